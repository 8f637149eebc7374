//! Boundary and metric data sources.

mod error;
mod file;
#[cfg(feature = "download")]
mod http;
mod table;

pub use error::FetchError;
pub use file::{FileBoundarySource, FileMetricSource};
#[cfg(feature = "download")]
pub use http::{HttpBoundarySource, HttpMetricSource};
pub use table::parse_metric_table;

use crate::{
    config::{HttpConfig, MetricsConfig},
    metric::MetricRow,
    region::BoundarySet,
};

/// Query text and dataset id sent to a [`MetricSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricQuery {
    pub query: String,
    pub dataset: String,
}

impl From<&MetricsConfig> for MetricQuery {
    fn from(config: &MetricsConfig) -> Self {
        Self { query: config.query.clone(), dataset: config.dataset.clone() }
    }
}

/// Supplies the boundary dataset. Called once per load.
pub trait BoundarySource {
    fn fetch_boundary(&self) -> Result<BoundarySet, FetchError>;
}

/// Runs a query against a tabular data service and returns `(region, value)` rows.
pub trait MetricSource {
    fn query(&self, query: &str, dataset: &str) -> Result<Vec<MetricRow>, FetchError>;
}

impl<S: BoundarySource + ?Sized> BoundarySource for Box<S> {
    fn fetch_boundary(&self) -> Result<BoundarySet, FetchError> { (**self).fetch_boundary() }
}

impl<S: MetricSource + ?Sized> MetricSource for Box<S> {
    fn query(&self, query: &str, dataset: &str) -> Result<Vec<MetricRow>, FetchError> {
        (**self).query(query, dataset)
    }
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Boundary source for an `http(s)://` URL or a local path.
pub fn open_boundary(location: &str, http: &HttpConfig) -> Result<Box<dyn BoundarySource + Send>, FetchError> {
    if is_remote(location) {
        return remote::boundary(location, http);
    }
    Ok(Box::new(FileBoundarySource::new(location)))
}

/// Metric source for an `http(s)://` endpoint or a local saved response.
pub fn open_metrics(location: &str, http: &HttpConfig) -> Result<Box<dyn MetricSource + Send>, FetchError> {
    if is_remote(location) {
        return remote::metrics(location, http);
    }
    Ok(Box::new(FileMetricSource::new(location)))
}

#[cfg(feature = "download")]
mod remote {
    use super::*;

    pub(super) fn boundary(url: &str, http: &HttpConfig) -> Result<Box<dyn BoundarySource + Send>, FetchError> {
        Ok(Box::new(HttpBoundarySource::new(url, http)?))
    }

    pub(super) fn metrics(url: &str, http: &HttpConfig) -> Result<Box<dyn MetricSource + Send>, FetchError> {
        Ok(Box::new(HttpMetricSource::new(url, http)?))
    }
}

#[cfg(not(feature = "download"))]
mod remote {
    use super::*;

    fn disabled(url: &str) -> FetchError {
        FetchError::Http { url: url.to_string(), message: "built without the `download` feature".into() }
    }

    pub(super) fn boundary(url: &str, _http: &HttpConfig) -> Result<Box<dyn BoundarySource + Send>, FetchError> {
        Err(disabled(url))
    }

    pub(super) fn metrics(url: &str, _http: &HttpConfig) -> Result<Box<dyn MetricSource + Send>, FetchError> {
        Err(disabled(url))
    }
}
