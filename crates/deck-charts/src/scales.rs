//! X/Y scale construction from raw records

use deck_core::Record;

use crate::{chartkit::LinearScale, RenderError, SeriesLayout};

/// The pair of scales shared by grid, axes and series within one pass
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

/// Numeric timestamps, in record order
pub fn x_samples(records: &[Record]) -> Vec<f64> {
    records.iter().filter_map(Record::time).collect()
}

/// Numeric values for `layout`, in record order
///
/// Vector layouts contribute every numeric slot, including slots past the
/// drawn series. Rows with non-numeric timestamps still contribute.
pub fn y_samples(records: &[Record], layout: SeriesLayout) -> Result<Vec<f64>, RenderError> {
    match layout {
        SeriesLayout::Single => Ok(records.iter().filter_map(|r| r.value.scalar()).collect()),
        SeriesLayout::Multi => Ok(records
            .iter()
            .filter(|r| r.value.is_vector())
            .flat_map(|r| r.value.numeric_values())
            .collect()),
        SeriesLayout::Unknown => Err(RenderError::ShapeUndetermined),
    }
}

/// `(min, max)` of `values`, `None` when empty
pub fn extent(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Builds [`ChartScales`] for an inner drawing area
#[derive(Debug, Clone)]
pub struct ScaleBuilder {
    pub inner_width: f64,
    pub inner_height: f64,
    /// Tick count used when rounding the Y domain
    pub nice_count: usize,
}

impl ScaleBuilder {
    pub fn new(inner_width: f64, inner_height: f64) -> Self {
        Self {
            inner_width,
            inner_height,
            nice_count: 10,
        }
    }

    pub fn nice_count(mut self, count: usize) -> Self {
        self.nice_count = count;
        self
    }

    /// Derive both scales from time-sorted records.
    ///
    /// Checks run in pipeline order: X domain, then layout, then Y domain.
    pub fn build(&self, sorted: &[Record], layout: SeriesLayout) -> Result<ChartScales, RenderError> {
        let (x_min, x_max) = extent(&x_samples(sorted)).ok_or(RenderError::NoValidXDomain)?;
        let (y_min, y_max) = extent(&y_samples(sorted, layout)?).ok_or(RenderError::NoValidYDomain)?;

        let x = LinearScale::new()
            .domain(x_min, x_max)
            .range(0.0, self.inner_width);

        let y = LinearScale::new()
            .domain(y_min, y_max)
            .nice(self.nice_count)
            .range(self.inner_height, 0.0);

        Ok(ChartScales { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chartkit::Scale;
    use deck_core::SeriesValue;

    fn builder() -> ScaleBuilder {
        ScaleBuilder::new(656.0, 276.0)
    }

    #[test]
    fn test_extent() {
        assert_eq!(extent(&[]), None);
        assert_eq!(extent(&[3.0]), Some((3.0, 3.0)));
        assert_eq!(extent(&[3.0, -1.0, 7.5]), Some((-1.0, 7.5)));
    }

    #[test]
    fn test_single_scales() {
        let records = vec![
            Record::scalar(0.0, Some(1.0)),
            Record::scalar(1.0, Some(2.0)),
            Record::scalar(2.0, Some(3.0)),
        ];
        let scales = builder().build(&records, SeriesLayout::Single).unwrap();

        assert_eq!(scales.x.domain_bounds(), (0.0, 2.0));
        assert_eq!(scales.x.range_bounds(), (0.0, 656.0));
        let (lo, hi) = scales.y.domain_bounds();
        assert!(lo <= 1.0 && hi >= 3.0);
        assert_eq!(scales.y.range_bounds(), (276.0, 0.0));
        assert_eq!(scales.y.scale(hi), 0.0);
    }

    #[test]
    fn test_multi_collects_every_slot() {
        let records = vec![
            Record::vector(0.0, vec![Some(1.0), None, Some(3.0), Some(40.0)]),
            Record::vector(1.0, vec![Some(-2.0)]),
        ];
        assert_eq!(
            y_samples(&records, SeriesLayout::Multi).unwrap(),
            vec![1.0, 3.0, 40.0, -2.0]
        );
    }

    #[test]
    fn test_multi_ignores_scalar_rows() {
        let records = vec![
            Record::vector(0.0, vec![Some(1.0)]),
            Record::scalar(1.0, Some(99.0)),
        ];
        assert_eq!(y_samples(&records, SeriesLayout::Multi).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_unknown_layout_fails() {
        let records = vec![Record::scalar(0.0, Some(1.0))];
        assert_eq!(
            builder().build(&records, SeriesLayout::Unknown),
            Err(RenderError::ShapeUndetermined)
        );
    }

    #[test]
    fn test_missing_x_takes_precedence() {
        let records = vec![Record::new(None, SeriesValue::Opaque)];
        assert_eq!(
            builder().build(&records, SeriesLayout::Unknown),
            Err(RenderError::NoValidXDomain)
        );
    }

    #[test]
    fn test_all_null_values_fail_y() {
        let records = vec![Record::scalar(0.0, None), Record::scalar(1.0, None)];
        assert_eq!(
            builder().build(&records, SeriesLayout::Single),
            Err(RenderError::NoValidYDomain)
        );
    }

    #[test]
    fn test_non_numeric_timestamp_excluded_from_x_only() {
        let records = vec![
            Record::new(None, SeriesValue::Scalar(Some(1.0))),
            Record::scalar(1.0, Some(2.0)),
        ];
        assert_eq!(x_samples(&records), vec![1.0]);
        assert_eq!(y_samples(&records, SeriesLayout::Single).unwrap(), vec![1.0, 2.0]);

        let scales = builder().build(&records, SeriesLayout::Single).unwrap();
        assert_eq!(scales.x.domain_bounds(), (1.0, 1.0));
    }
}
