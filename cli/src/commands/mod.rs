pub mod scale;
pub mod styles;
