mod embed;
mod sync;

pub use embed::{EmbedPanel, FilterCommand, FilterOperator, RecordingEmbed};
pub use sync::FilterSync;
