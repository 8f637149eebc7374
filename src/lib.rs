#![doc = "Selection and color-scaling engine for clickable choropleth maps"]
mod app;
mod config;
mod filter;
mod metric;
mod region;
mod selection;
mod source;
mod style;

#[doc(inline)]
pub use app::{fetch_sequence, AppController, Event, SessionId};

#[doc(inline)]
pub use config::{AppConfig, BoundaryConfig, ConfigError, HttpConfig, MetricsConfig};

#[doc(inline)]
pub use filter::{EmbedPanel, FilterCommand, FilterOperator, FilterSync, RecordingEmbed};

#[doc(inline)]
pub use metric::{MetricRow, MetricStore};

#[doc(inline)]
pub use region::{BoundarySet, Region, RegionId};

#[doc(inline)]
pub use selection::SelectionSet;

#[doc(inline)]
pub use source::{
    open_boundary, open_metrics, parse_metric_table, BoundarySource, FetchError, FileBoundarySource,
    FileMetricSource, MetricQuery, MetricSource,
};

#[cfg(feature = "download")]
#[doc(inline)]
pub use source::{HttpBoundarySource, HttpMetricSource};

#[doc(inline)]
pub use style::{interpolate, Palette, ParseColorError, RegionStyler, Rgb, Style};
