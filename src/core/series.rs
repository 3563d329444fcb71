use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Lower bound of the normalized data domain.
pub const MIN_VALUE: f64 = 0.0;
/// Upper bound of the normalized data domain.
pub const MAX_VALUE: f64 = 100.0;

/// Returns `true` when `value` lies inside `[MIN_VALUE, MAX_VALUE]`.
///
/// NaN is never in the domain.
#[must_use]
pub fn in_domain(value: f64) -> bool {
    (MIN_VALUE..=MAX_VALUE).contains(&value)
}

/// One curve of normalized values.
///
/// Values outside `[MIN_VALUE, MAX_VALUE]` are kept as-is and treated as
/// missing points by every encoder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Maps `values` linearly from `[min, max]` into the normalized domain.
    ///
    /// Values outside `[min, max]` (and NaN) stay missing after scaling.
    pub fn scaled(values: &[f64], min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidData(format!(
                "scaling domain must be finite with min < max, got [{min}, {max}]"
            )));
        }

        let span = max - min;
        let values = values
            .iter()
            .map(|&value| {
                if (min..=max).contains(&value) {
                    MIN_VALUE + (value - min) / span * (MAX_VALUE - MIN_VALUE)
                } else {
                    f64::NAN
                }
            })
            .collect::<Vec<_>>();
        Ok(Self { values })
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|&&value| !in_domain(value)).count()
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for Series {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_series_maps_into_domain_and_keeps_gaps() {
        let series = Series::scaled(&[10.0, 15.0, 20.0, 25.0], 10.0, 20.0).expect("scale");
        assert_eq!(series.values()[..3], [0.0, 50.0, 100.0]);
        assert!(series.values()[3].is_nan());
        assert_eq!(series.missing_count(), 1);
    }

    #[test]
    fn scaled_series_rejects_empty_domain() {
        assert!(Series::scaled(&[1.0], 5.0, 5.0).is_err());
        assert!(Series::scaled(&[1.0], f64::NEG_INFINITY, 5.0).is_err());
    }

    #[test]
    fn out_of_domain_values_are_not_clamped() {
        let series = Series::new(vec![-1.0, 101.0, f64::NAN, 42.0]);
        assert_eq!(series.values()[0], -1.0);
        assert_eq!(series.values()[1], 101.0);
        assert_eq!(series.missing_count(), 3);
    }
}
