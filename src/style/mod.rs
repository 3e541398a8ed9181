//! Color values and the semantic token registry.

pub mod color;
pub mod registry;

pub use color::Rgb;
pub use registry::{ColorToken, is_registered, resolve, token_names};
