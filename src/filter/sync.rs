use tracing::debug;

use crate::{
    filter::{EmbedPanel, FilterCommand, FilterOperator},
    region::RegionId,
    selection::SelectionSet,
};

/// Pushes the selection to the embed panel as an inclusion filter on one field,
/// and tracks whether the panel is raised.
#[derive(Debug, Clone)]
pub struct FilterSync {
    field: String,
    raised: bool,
}

impl FilterSync {
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into(), raised: false }
    }

    #[inline] pub fn field(&self) -> &str { &self.field }

    #[inline] pub fn is_raised(&self) -> bool { self.raised }

    /// Filter the panel to `selection` and bring it to the foreground.
    /// Dropped without effect when the panel is not ready.
    pub fn apply(&mut self, embed: &mut impl EmbedPanel, selection: &[RegionId]) {
        if !embed.is_ready() {
            debug!(selected = selection.len(), "embed not ready; dropping filter apply");
            return;
        }

        embed.send(self.command(selection.to_vec()));
        embed.set_foreground(true);
        self.raised = true;
        debug!(field = %self.field, selected = selection.len(), "filter applied");
    }

    /// Remove the filter, lower the panel and empty the selection.
    /// The selection and flag are reset even if the panel is not ready.
    pub fn clear(&mut self, embed: &mut impl EmbedPanel, selection: &mut SelectionSet) {
        if embed.is_ready() {
            embed.send(self.command(Vec::new()));
            embed.set_foreground(false);
            debug!(field = %self.field, "filter cleared");
        } else {
            debug!("embed not ready; dropping filter clear");
        }

        self.raised = false;
        selection.clear();
    }

    fn command(&self, values: Vec<RegionId>) -> FilterCommand {
        FilterCommand::UpdateFilter { field: self.field.clone(), operator: FilterOperator::In, values }
    }
}
