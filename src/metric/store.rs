use ahash::AHashMap;
use tracing::debug;

use crate::{metric::MetricRow, region::RegionId};

/// Region → metric mapping with the value range derived from it.
/// Replaced wholesale by [`MetricStore::load`]; never updated incrementally.
#[derive(Debug, Clone, Default)]
pub struct MetricStore {
    values: AHashMap<RegionId, f64>,
    min: f64,
    max: f64,
}

impl MetricStore {
    pub fn new() -> Self { Self::default() }

    /// Replace the mapping with `rows`. A region listed twice keeps its last value,
    /// and the range covers only the values that survive. Non-finite values are skipped.
    pub fn load(&mut self, rows: impl IntoIterator<Item = MetricRow>) {
        self.values.clear();
        for row in rows {
            if !row.value.is_finite() {
                debug!(region = %row.region, value = row.value, "skipping non-finite metric value");
                continue;
            }
            self.values.insert(row.region, row.value);
        }

        let (min, max) = self.values.values()
            .fold(None, |acc: Option<(f64, f64)>, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 0.0));

        self.min = min;
        self.max = max;
    }

    #[inline] pub fn get(&self, region: &RegionId) -> Option<f64> { self.values.get(region).copied() }

    /// `(min, max)` of the loaded values; `(0, 0)` when empty, which means "no data".
    #[inline] pub fn range(&self) -> (f64, f64) { (self.min, self.max) }

    #[inline] pub fn len(&self) -> usize { self.values.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.values.is_empty() }
}
