mod color;
mod palette;
mod styler;

pub use color::{interpolate, ParseColorError, Rgb};
pub use palette::Palette;
pub use styler::{RegionStyler, Style};
