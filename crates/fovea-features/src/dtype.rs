use std::fmt;

/// Element type of a [`TensorData`](crate::TensorData) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    U8,
    U16,
    F32,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::U8 => write!(f, "u8"),
            DType::U16 => write!(f, "u16"),
            DType::F32 => write!(f, "f32"),
        }
    }
}
