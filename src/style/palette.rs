use serde::{Deserialize, Serialize};

use crate::{config::ConfigError, style::Rgb};

/// Fixed colors and stroke settings shared by every region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Fill for selected regions, outside the data scale.
    pub selected: Rgb,
    /// Fill for regions without a metric value.
    pub no_data: Rgb,
    pub stroke_color: Rgb,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub fill_opacity: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            selected: Rgb::new(128, 128, 128),
            no_data: Rgb::new(238, 238, 238),
            stroke_color: Rgb::new(255, 255, 255),
            stroke_width: 1.0,
            stroke_opacity: 0.8,
            fill_opacity: 0.75,
        }
    }
}

impl Palette {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (name, opacity) in [("stroke_opacity", self.stroke_opacity), ("fill_opacity", self.fill_opacity)] {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(ConfigError::Invalid(format!("palette.{name} must be within [0, 1], got {opacity}")));
            }
        }
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "palette.stroke_width must be a non-negative number, got {}", self.stroke_width
            )));
        }
        if self.selected == self.no_data {
            return Err(ConfigError::Invalid("palette.selected and palette.no_data must differ".into()));
        }
        Ok(())
    }
}
