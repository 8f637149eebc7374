mod row;
mod store;

pub use row::MetricRow;
pub use store::MetricStore;
