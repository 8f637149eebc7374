use serde::{Deserialize, Serialize};

use crate::region::RegionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    #[serde(rename = "IN")]
    In,
}

/// Command pushed to the embedded visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FilterCommand {
    /// Inclusion filter on `field`; empty `values` means "no filter".
    UpdateFilter {
        field: String,
        operator: FilterOperator,
        values: Vec<RegionId>,
    },
}

/// The embedded visualization panel.
pub trait EmbedPanel {
    /// Whether the panel has finished initializing and accepts commands.
    fn is_ready(&self) -> bool;

    /// Deliver a command. Fire-and-forget.
    fn send(&mut self, command: FilterCommand);

    /// Raise (`true`) or lower (`false`) the panel's stacking order.
    fn set_foreground(&mut self, raised: bool);
}

impl<E: EmbedPanel + ?Sized> EmbedPanel for Box<E> {
    fn is_ready(&self) -> bool { (**self).is_ready() }
    fn send(&mut self, command: FilterCommand) { (**self).send(command) }
    fn set_foreground(&mut self, raised: bool) { (**self).set_foreground(raised) }
}

/// Embed panel that records what it was sent.
#[derive(Debug, Clone, Default)]
pub struct RecordingEmbed {
    pub ready: bool,
    pub commands: Vec<FilterCommand>,
    pub foreground: bool,
}

impl RecordingEmbed {
    pub fn ready() -> Self { Self { ready: true, ..Self::default() } }
}

impl EmbedPanel for RecordingEmbed {
    fn is_ready(&self) -> bool { self.ready }

    fn send(&mut self, command: FilterCommand) { self.commands.push(command) }

    fn set_foreground(&mut self, raised: bool) { self.foreground = raised }
}
