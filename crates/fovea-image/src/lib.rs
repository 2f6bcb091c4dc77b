//! Color-tagged image tensors for the fovea ecosystem.
//!
//! This crate wraps a `Feature` tensor from `fovea-features` with a color
//! space classification, inferred from the tensor shape or supplied
//! explicitly at construction.
//!
//! All image tensors use CHW layout: `[..., channels, height, width]`.

pub mod colorspace;
pub mod display;
pub mod error;
pub mod grid;
pub mod image;

pub use colorspace::{ColorSpace, guess_color_space};
pub use error::ImageError;
pub use grid::{GridOptions, make_grid};
pub use image::{Image, ImageOptions};
