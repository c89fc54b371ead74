//! Sample Dataset Module
//! The fixed series rendered by every backend on every page.

use super::Series;

/// Supplies the fixed sample dataset. Pure, always the same values.
pub struct SampleData;

impl SampleData {
    /// The series shared by all three backends.
    pub fn shared() -> Series {
        Series::new(
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![10.0, 15.0, 13.0, 17.0, 22.0],
        )
        .expect("sample data is well-formed")
    }

    /// Second and third traces shown only on the declarative chart.
    pub fn companions() -> [Series; 2] {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        [
            Series::new(x.clone(), vec![11.0, 16.0, 14.0, 18.0, 23.0])
                .expect("sample data is well-formed"),
            Series::new(x, vec![8.0, 12.0, 9.0, 14.0, 19.0])
                .expect("sample data is well-formed"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_series_holds_the_fixed_values() {
        let series = SampleData::shared();
        assert_eq!(series.x(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(series.y(), &[10.0, 15.0, 13.0, 17.0, 22.0]);
    }

    #[test]
    fn companions_share_the_x_axis() {
        let shared = SampleData::shared();
        for series in SampleData::companions() {
            assert_eq!(series.x(), shared.x());
            assert_eq!(series.len(), shared.len());
        }
    }
}
