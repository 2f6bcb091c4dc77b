//! Core numeric container and logging for the fovea ecosystem.
//!
//! `Tensor<T>` is an owned, shape-checked multi-dimensional array used by
//! every crate in the workspace. The logging module provides the `log`
//! implementation the binaries install at startup.

pub mod logging;
pub mod tensor;

pub use logging::{StdoutLogger, init_stdout_logger};
pub use tensor::{Tensor, TensorError};

// Re-export log so downstream crates can use fovea_base::log::*
pub use log;
