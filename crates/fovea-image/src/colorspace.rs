use std::fmt;
use std::str::FromStr;

use fovea_features::TensorData;

use crate::ImageError;

/// Classification of how channel values map to a visual color model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// Reserved for test scaffolding, never produced by inference.
    #[doc(hidden)]
    Sentinel,
    Other,
    Grayscale,
    Rgb,
}

impl ColorSpace {
    /// Channel count this classification names, if it names one.
    pub fn channels(&self) -> Option<usize> {
        match self {
            ColorSpace::Grayscale => Some(1),
            ColorSpace::Rgb => Some(3),
            ColorSpace::Other | ColorSpace::Sentinel => None,
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorSpace::Sentinel => "SENTINEL",
            ColorSpace::Other => "OTHER",
            ColorSpace::Grayscale => "GRAYSCALE",
            ColorSpace::Rgb => "RGB",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ColorSpace {
    type Err = ImageError;

    /// Exact, case-sensitive lookup over the public names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OTHER" => Ok(ColorSpace::Other),
            "GRAYSCALE" => Ok(ColorSpace::Grayscale),
            "RGB" => Ok(ColorSpace::Rgb),
            _ => Err(ImageError::ColorSpace(s.to_string())),
        }
    }
}

/// Classifies tensor contents by shape alone.
///
/// The channel axis is the third dimension from the end. A single 2-D plane
/// counts as grayscale, a channel axis of 1 or 3 maps to grayscale or RGB,
/// and everything else is [`ColorSpace::Other`]. Total over all ranks, no
/// side effects.
pub fn guess_color_space(data: &TensorData) -> ColorSpace {
    let shape = data.shape();
    match shape.len() {
        0 | 1 => ColorSpace::Other,
        2 => ColorSpace::Grayscale,
        n => match shape[n - 3] {
            1 => ColorSpace::Grayscale,
            3 => ColorSpace::Rgb,
            _ => ColorSpace::Other,
        },
    }
}
