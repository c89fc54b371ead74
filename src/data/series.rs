//! Series Module
//! Ordered numeric (x, y) datasets used as chart input.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SeriesError {
    #[error("series is empty")]
    Empty,
    #[error("x has {x_len} values but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[error("non-finite value at index {0}")]
    NonFinite(usize),
}

/// An immutable, ordered numeric (x, y) dataset.
///
/// Validated at construction: x and y must be the same length and every
/// value finite. An empty series is representable so that backends which
/// can draw an empty figure may do so; backends that cannot reject it.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    /// Build a series from x and y value vectors.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, SeriesError> {
        if x.len() != y.len() {
            return Err(SeriesError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        for values in [&x, &y] {
            if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
                return Err(SeriesError::NonFinite(idx));
            }
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of (x, y) pairs.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Fail with an input error if the series has no points.
    pub fn ensure_non_empty(&self) -> Result<(), SeriesError> {
        if self.is_empty() {
            Err(SeriesError::Empty)
        } else {
            Ok(())
        }
    }

    /// Iterate (x, y) pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Minimum and maximum x values. Meaningless for an empty series.
    pub fn x_range(&self) -> (f64, f64) {
        Self::range(&self.x)
    }

    /// Minimum and maximum y values. Meaningless for an empty series.
    pub fn y_range(&self) -> (f64, f64) {
        Self::range(&self.y)
    }

    fn range(values: &[f64]) -> (f64, f64) {
        values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
    }
}
