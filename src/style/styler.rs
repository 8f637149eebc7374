use serde::Serialize;

use crate::{
    metric::MetricStore,
    region::{BoundarySet, RegionId},
    selection::SelectionSet,
    style::{interpolate, Palette, Rgb},
};

/// Visual style for one region, derived fresh on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub fill_color: Rgb,
    pub stroke_color: Rgb,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub fill_opacity: f64,
}

/// Chooses a region's fill from selection state and metric value.
#[derive(Debug, Clone, Default)]
pub struct RegionStyler {
    palette: Palette,
}

impl RegionStyler {
    pub fn new(palette: Palette) -> Self { Self { palette } }

    #[inline] pub fn palette(&self) -> &Palette { &self.palette }

    /// Selected beats metric color, metric color beats the no-data fill.
    /// Stroke and opacity are the same for every region.
    pub fn style_for(&self, region: &RegionId, selection: &SelectionSet, metrics: &MetricStore) -> Style {
        let fill_color = if selection.contains(region) {
            self.palette.selected
        } else if let Some(value) = metrics.get(region) {
            let (min, max) = metrics.range();
            interpolate(value, min, max)
        } else {
            self.palette.no_data
        };

        Style {
            fill_color,
            stroke_color: self.palette.stroke_color,
            stroke_width: self.palette.stroke_width,
            stroke_opacity: self.palette.stroke_opacity,
            fill_opacity: self.palette.fill_opacity,
        }
    }

    /// One style per boundary region, in dataset order.
    pub fn styles<'a>(
        &'a self,
        boundary: &'a BoundarySet,
        selection: &'a SelectionSet,
        metrics: &'a MetricStore,
    ) -> impl Iterator<Item = (&'a RegionId, Style)> + 'a {
        boundary.ids().map(move |id| (id, self.style_for(id, selection, metrics)))
    }
}
