//! Sample tables for the rendering layer (CSV or Parquet by extension).

use anyhow::{Context, Result};
use polars::prelude::*;
use shotgeom::angle::AngleSample;
use shotgeom::tilt::{Rails, TiltedPlane};
use std::fs::{self, File};
use std::path::Path;

/// Columns `y, angle_rad, angle_deg`.
pub fn sweep_table(samples: &[AngleSample]) -> PolarsResult<DataFrame> {
    let y: Vec<f64> = samples.iter().map(|s| s.y).collect();
    let rad: Vec<f64> = samples.iter().map(|s| s.angle).collect();
    let deg: Vec<f64> = samples.iter().map(|s| s.degrees()).collect();
    df!("y" => y, "angle_rad" => rad, "angle_deg" => deg)
}

/// Columns `tau, ax, ay, az, bx, by, bz`; `z` is the height on the tilted plane.
pub fn rails_table(rails: &Rails, plane: &TiltedPlane, taus: &[f64]) -> PolarsResult<DataFrame> {
    let mut cols: [Vec<f64>; 6] = Default::default();
    for &tau in taus {
        let [a, b] = rails.sample_3d(tau, plane);
        for (col, v) in cols.iter_mut().zip([a.x, a.y, a.z, b.x, b.y, b.z]) {
            col.push(v);
        }
    }
    let [ax, ay, az, bx, by, bz] = cols;
    df!(
        "tau" => taus.to_vec(),
        "ax" => ax, "ay" => ay, "az" => az,
        "bx" => bx, "by" => by, "bz" => bz
    )
}

pub fn write_table(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match out.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(&mut file)
                .finish(df)
                .with_context(|| format!("writing parquet {}", out.display()))?;
        }
        _ => {
            CsvWriter::new(&mut file)
                .finish(df)
                .with_context(|| format!("writing csv {}", out.display()))?;
        }
    }
    Ok(())
}
