use serde::{Deserialize, Serialize};

use crate::region::RegionId;

/// One `(region, value)` pair from the metric source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub region: RegionId,
    pub value: f64,
}

impl MetricRow {
    pub fn new(region: impl Into<RegionId>, value: f64) -> Self {
        Self { region: region.into(), value }
    }
}

impl<R: Into<RegionId>> From<(R, f64)> for MetricRow {
    fn from((region, value): (R, f64)) -> Self { Self::new(region, value) }
}
