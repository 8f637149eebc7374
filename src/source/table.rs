use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{metric::MetricRow, source::FetchError};

/// First result batch of a table query. Columns are informational only.
#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

/// Parse a `{ "columns": [...], "rows": [[name, value], ...] }` response.
///
/// Column 0 must be a string and column 1 a finite number (numeric strings are accepted).
/// Rows that fail either check are skipped.
pub fn parse_metric_table(bytes: &[u8]) -> Result<Vec<MetricRow>, FetchError> {
    let response: QueryResponse = serde_json::from_slice(bytes)
        .map_err(|e| FetchError::Schema(format!("metric response is not a query table: {e}")))?;

    if response.columns.len() > 2 {
        debug!(columns = ?response.columns, "ignoring metric columns past the second");
    }

    let mut rows = Vec::with_capacity(response.rows.len());
    for (idx, row) in response.rows.iter().enumerate() {
        match parse_row(row) {
            Some(parsed) => rows.push(parsed),
            None => warn!(row = idx, "malformed metric row; skipping"),
        }
    }

    debug!(rows = rows.len(), skipped = response.rows.len() - rows.len(), "parsed metric table");
    Ok(rows)
}

fn parse_row(row: &[Value]) -> Option<MetricRow> {
    let region = row.first()?.as_str()?;
    let value = match row.get(1)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then(|| MetricRow::new(region, value))
}
