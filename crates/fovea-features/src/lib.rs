//! Tagged tensor containers for the fovea ecosystem.
//!
//! A [`Feature`] wraps a [`TensorData`] value after resolving the element
//! type and storage placement requested at construction. Richer feature
//! types (images and friends) layer their own metadata on top of it.

pub mod data;
pub mod device;
pub mod dtype;
pub mod error;
pub mod feature;

pub use data::{IntoTensorData, TensorData};
pub use device::Device;
pub use dtype::DType;
pub use error::FeatureError;
pub use feature::{Feature, FeatureOptions};
