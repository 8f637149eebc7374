use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    metric::MetricRow,
    region::BoundarySet,
    source::{parse_metric_table, BoundarySource, FetchError, MetricSource},
};

fn read(path: &Path) -> Result<Vec<u8>, FetchError> {
    std::fs::read(path).map_err(|source| FetchError::Io { path: path.to_path_buf(), source })
}

/// Boundary GeoJSON read from a local file.
#[derive(Debug, Clone)]
pub struct FileBoundarySource {
    path: PathBuf,
}

impl FileBoundarySource {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl BoundarySource for FileBoundarySource {
    fn fetch_boundary(&self) -> Result<BoundarySet, FetchError> {
        debug!(path = %self.path.display(), "reading boundary file");
        BoundarySet::from_geojson_bytes(&read(&self.path)?)
    }
}

/// A saved query response read from a local file. The query and dataset are not evaluated.
#[derive(Debug, Clone)]
pub struct FileMetricSource {
    path: PathBuf,
}

impl FileMetricSource {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl MetricSource for FileMetricSource {
    fn query(&self, query: &str, dataset: &str) -> Result<Vec<MetricRow>, FetchError> {
        debug!(path = %self.path.display(), query, dataset, "reading metric file");
        parse_metric_table(&read(&self.path)?)
    }
}
