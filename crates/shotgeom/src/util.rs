use crate::error::GeomError;

/// Inclusive linspace; endpoints are reproduced exactly.
pub(crate) fn linspace(lo: f64, hi: f64, n: usize) -> Result<Vec<f64>, GeomError> {
    if n < 2 {
        return Err(GeomError::TooFewSamples { requested: n });
    }
    if !(hi > lo) {
        return Err(GeomError::EmptyRange { lo, hi });
    }
    let last = (n - 1) as f64;
    Ok((0..n)
        .map(|i| {
            if i == n - 1 {
                hi
            } else {
                lo + (hi - lo) * (i as f64 / last)
            }
        })
        .collect())
}
