use fovea_base::{Tensor, TensorError};

use crate::DType;

/// Tensor storage with the element type lifted into an enum.
///
/// Shape-only operations dispatch to the wrapped [`Tensor`] regardless of
/// the element type, so callers that only care about geometry never have to
/// match on the variant themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum TensorData {
    U8(Tensor<u8>),
    U16(Tensor<u16>),
    F32(Tensor<f32>),
}

impl TensorData {
    pub fn shape(&self) -> &[usize] {
        match self {
            TensorData::U8(tensor) => &tensor.shape,
            TensorData::U16(tensor) => &tensor.shape,
            TensorData::F32(tensor) => &tensor.shape,
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    pub fn len(&self) -> usize {
        match self {
            TensorData::U8(tensor) => tensor.len(),
            TensorData::U16(tensor) => tensor.len(),
            TensorData::F32(tensor) => tensor.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> DType {
        match self {
            TensorData::U8(_) => DType::U8,
            TensorData::U16(_) => DType::U16,
            TensorData::F32(_) => DType::F32,
        }
    }

    /// Inserts a size-1 axis at `axis`, keeping the element type.
    pub fn unsqueeze(self, axis: usize) -> Result<TensorData, TensorError> {
        Ok(match self {
            TensorData::U8(tensor) => TensorData::U8(tensor.unsqueeze(axis)?),
            TensorData::U16(tensor) => TensorData::U16(tensor.unsqueeze(axis)?),
            TensorData::F32(tensor) => TensorData::F32(tensor.unsqueeze(axis)?),
        })
    }

    /// Reinterprets the storage under a new shape with the same element count.
    pub fn reshape(self, shape: Vec<usize>) -> Result<TensorData, TensorError> {
        Ok(match self {
            TensorData::U8(tensor) => TensorData::U8(tensor.reshape(shape)?),
            TensorData::U16(tensor) => TensorData::U16(tensor.reshape(shape)?),
            TensorData::F32(tensor) => TensorData::F32(tensor.reshape(shape)?),
        })
    }

    /// Converts the storage to `dtype`, rescaling values between the integer
    /// and float ranges.
    ///
    /// Integer widening replicates the high bits so full scale maps to full
    /// scale, narrowing keeps the high byte, and float conversions treat
    /// `0.0..=1.0` as the displayable range with clamping on the way out.
    pub fn cast(self, dtype: DType) -> TensorData {
        match (self, dtype) {
            (TensorData::U8(tensor), DType::U8) => TensorData::U8(tensor),
            (TensorData::U8(tensor), DType::U16) => {
                TensorData::U16(map_tensor(tensor, |v| ((v as u16) << 8) | v as u16))
            }
            (TensorData::U8(tensor), DType::F32) => {
                TensorData::F32(map_tensor(tensor, |v| v as f32 / 255.0))
            }
            (TensorData::U16(tensor), DType::U8) => {
                TensorData::U8(map_tensor(tensor, |v| (v >> 8) as u8))
            }
            (TensorData::U16(tensor), DType::U16) => TensorData::U16(tensor),
            (TensorData::U16(tensor), DType::F32) => {
                TensorData::F32(map_tensor(tensor, |v| v as f32 / 65535.0))
            }
            (TensorData::F32(tensor), DType::U8) => {
                TensorData::U8(map_tensor(tensor, |v| (v.clamp(0.0, 1.0) * 255.0) as u8))
            }
            (TensorData::F32(tensor), DType::U16) => {
                TensorData::U16(map_tensor(tensor, |v| (v.clamp(0.0, 1.0) * 65535.0) as u16))
            }
            (TensorData::F32(tensor), DType::F32) => TensorData::F32(tensor),
        }
    }
}

fn map_tensor<T, U>(tensor: Tensor<T>, f: impl Fn(T) -> U) -> Tensor<U> {
    let Tensor { shape, data } = tensor;
    Tensor {
        shape,
        data: data.into_iter().map(f).collect(),
    }
}

/// Conversion into [`TensorData`] for the types feature constructors accept.
///
/// Scalars become rank-0 tensors and vectors become rank-1 tensors.
pub trait IntoTensorData {
    fn into_tensor_data(self) -> TensorData;
}

impl IntoTensorData for TensorData {
    fn into_tensor_data(self) -> TensorData {
        self
    }
}

impl IntoTensorData for Tensor<u8> {
    fn into_tensor_data(self) -> TensorData {
        TensorData::U8(self)
    }
}

impl IntoTensorData for Tensor<u16> {
    fn into_tensor_data(self) -> TensorData {
        TensorData::U16(self)
    }
}

impl IntoTensorData for Tensor<f32> {
    fn into_tensor_data(self) -> TensorData {
        TensorData::F32(self)
    }
}

impl IntoTensorData for u8 {
    fn into_tensor_data(self) -> TensorData {
        TensorData::U8(Tensor::from_scalar(self))
    }
}

impl IntoTensorData for u16 {
    fn into_tensor_data(self) -> TensorData {
        TensorData::U16(Tensor::from_scalar(self))
    }
}

impl IntoTensorData for f32 {
    fn into_tensor_data(self) -> TensorData {
        TensorData::F32(Tensor::from_scalar(self))
    }
}

impl IntoTensorData for Vec<u8> {
    fn into_tensor_data(self) -> TensorData {
        let len = self.len();
        TensorData::U8(Tensor {
            shape: vec![len],
            data: self,
        })
    }
}

impl IntoTensorData for Vec<u16> {
    fn into_tensor_data(self) -> TensorData {
        let len = self.len();
        TensorData::U16(Tensor {
            shape: vec![len],
            data: self,
        })
    }
}

impl IntoTensorData for Vec<f32> {
    fn into_tensor_data(self) -> TensorData {
        let len = self.len();
        TensorData::F32(Tensor {
            shape: vec![len],
            data: self,
        })
    }
}
