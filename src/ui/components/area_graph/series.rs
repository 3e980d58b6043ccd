//! Input data for the area graph
//!
//! [`DataPoint`] is what callers hand in; [`Series`] is the validated,
//! non-empty, finite form the widget works with.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use super::{GraphError, GraphResult};

/// A single named observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Label shown in the tooltip (e.g. a month)
    pub name: String,
    /// Magnitude plotted on the vertical axis
    pub value: f64,
}

impl DataPoint {
    /// Create a new data point
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// An ordered, non-empty sequence of data points with finite values
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    /// Validate and wrap a sequence of points
    ///
    /// Fails with [`GraphError::EmptySeries`] for no points and
    /// [`GraphError::NonFiniteValue`] for the first NaN or infinite value.
    pub fn new(points: impl Into<Vec<DataPoint>>) -> GraphResult<Self> {
        let points = points.into();

        if points.is_empty() {
            return Err(GraphError::EmptySeries);
        }

        if let Some(index) = points.iter().position(|p| !p.value.is_finite()) {
            return Err(GraphError::NonFiniteValue { index });
        }

        Ok(Self { points })
    }

    /// Get reference to all points
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Get a point by index
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    /// Number of points, always at least one
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl TryFrom<Vec<DataPoint>> for Series {
    type Error = GraphError;

    fn try_from(points: Vec<DataPoint>) -> GraphResult<Self> {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_series_is_rejected() {
        assert_eq!(Series::new(Vec::<DataPoint>::new()), Err(GraphError::EmptySeries));
    }

    #[test]
    fn non_finite_values_are_rejected_with_index() {
        let points = vec![
            DataPoint::new("a", 1.0),
            DataPoint::new("b", f64::NAN),
            DataPoint::new("c", f64::INFINITY),
        ];
        assert_eq!(
            Series::new(points),
            Err(GraphError::NonFiniteValue { index: 1 })
        );

        let points = vec![DataPoint::new("a", f64::NEG_INFINITY)];
        assert_eq!(
            Series::new(points),
            Err(GraphError::NonFiniteValue { index: 0 })
        );
    }

    #[test]
    fn valid_series_keeps_order_and_duplicates() {
        let series = Series::new(vec![
            DataPoint::new("x", 3.0),
            DataPoint::new("x", -1.5),
        ])
        .unwrap();

        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
        assert_eq!(series.get(1).unwrap().value, -1.5);
        assert_eq!(series.points()[0].name, "x");
        assert!(series.get(2).is_none());
    }

    #[test]
    fn data_point_deserializes_from_postcard() {
        let point = DataPoint::new("Feb", 20.0);
        let bytes = postcard::to_allocvec(&point).unwrap();
        let decoded: DataPoint = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, point);
    }
}
