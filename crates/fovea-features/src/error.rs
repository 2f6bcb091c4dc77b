use std::fmt;

use fovea_base::TensorError;

#[derive(Debug)]
pub enum FeatureError {
    Placement(String),
    Tensor(TensorError),
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureError::Placement(msg) => write!(f, "placement error: {msg}"),
            FeatureError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for FeatureError {}

impl From<TensorError> for FeatureError {
    fn from(err: TensorError) -> Self {
        FeatureError::Tensor(err)
    }
}
