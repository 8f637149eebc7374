use std::time::Duration;

use reqwest::{blocking::Client, redirect::Policy};
use tracing::{debug, info};

use crate::{
    config::HttpConfig,
    metric::MetricRow,
    region::BoundarySet,
    source::{parse_metric_table, BoundarySource, FetchError, MetricSource},
};

fn build_client(url: &str, config: &HttpConfig) -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .redirect(Policy::limited(10))
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| FetchError::Http { url: url.to_string(), message: format!("build client: {e}") })
}

/// GET `url` once and return the body. No retries.
fn get_bytes(client: &Client, url: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, FetchError> {
    let http_err = |e: reqwest::Error| FetchError::Http { url: url.to_string(), message: e.to_string() };

    let resp = client.get(url)
        .query(query)
        .send()
        .map_err(http_err)?
        .error_for_status()
        .map_err(http_err)?;

    let bytes = resp.bytes().map_err(http_err)?;
    debug!(url, bytes = bytes.len(), "fetched");
    Ok(bytes.to_vec())
}

/// Boundary GeoJSON fetched with a single GET.
#[derive(Debug, Clone)]
pub struct HttpBoundarySource {
    client: Client,
    url: String,
}

impl HttpBoundarySource {
    pub fn new(url: impl Into<String>, config: &HttpConfig) -> Result<Self, FetchError> {
        let url: String = url.into();
        Ok(Self { client: build_client(&url, config)?, url })
    }
}

impl BoundarySource for HttpBoundarySource {
    fn fetch_boundary(&self) -> Result<BoundarySet, FetchError> {
        info!(url = %self.url, "fetching boundary");
        BoundarySet::from_geojson_bytes(&get_bytes(&self.client, &self.url, &[])?)
    }
}

/// Remote table query service: `GET {endpoint}?sql={query}&dataset={dataset}`.
#[derive(Debug, Clone)]
pub struct HttpMetricSource {
    client: Client,
    endpoint: String,
}

impl HttpMetricSource {
    pub fn new(endpoint: impl Into<String>, config: &HttpConfig) -> Result<Self, FetchError> {
        let endpoint: String = endpoint.into();
        Ok(Self { client: build_client(&endpoint, config)?, endpoint })
    }
}

impl MetricSource for HttpMetricSource {
    fn query(&self, query: &str, dataset: &str) -> Result<Vec<MetricRow>, FetchError> {
        info!(endpoint = %self.endpoint, dataset, "querying metrics");
        let body = get_bytes(&self.client, &self.endpoint, &[("sql", query), ("dataset", dataset)])?;
        parse_metric_table(&body)
    }
}
