use std::fmt;

use fovea_base::TensorError;
use fovea_features::FeatureError;

#[derive(Debug)]
pub enum ImageError {
    Rank { got: usize },
    ColorSpace(String),
    Grid(String),
    Display(String),
    Feature(FeatureError),
    Tensor(TensorError),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Rank { got } => {
                write!(f, "rank error: an image needs at least 2 dimensions, got {got}")
            }
            ImageError::ColorSpace(name) => write!(f, "unknown color space: {name}"),
            ImageError::Grid(msg) => write!(f, "grid error: {msg}"),
            ImageError::Display(msg) => write!(f, "display error: {msg}"),
            ImageError::Feature(err) => write!(f, "feature error: {err}"),
            ImageError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<FeatureError> for ImageError {
    fn from(err: FeatureError) -> Self {
        ImageError::Feature(err)
    }
}

impl From<TensorError> for ImageError {
    fn from(err: TensorError) -> Self {
        ImageError::Tensor(err)
    }
}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Display(err.to_string())
    }
}
