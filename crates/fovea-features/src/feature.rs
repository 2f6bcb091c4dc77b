use crate::{DType, Device, FeatureError, IntoTensorData, TensorData};

/// Construction options shared by every feature kind.
#[derive(Clone, Debug, Default)]
pub struct FeatureOptions {
    dtype: Option<DType>,
    device: Option<Device>,
}

impl FeatureOptions {
    /// Request a cast to `dtype` during construction.
    pub fn with_dtype(mut self, dtype: DType) -> Self {
        self.dtype = Some(dtype);
        self
    }

    /// Request placement on `device` during construction.
    pub fn with_device(mut self, device: Device) -> Self {
        self.device = Some(device);
        self
    }

    // Getters
    pub fn dtype(&self) -> Option<DType> {
        self.dtype
    }

    pub fn device(&self) -> Option<Device> {
        self.device
    }
}

/// A tensor carried together with its placement.
///
/// Feature kinds wrap this and add their own metadata on top. The wrapped
/// tensor keeps whatever dtype the caller handed in unless the options
/// request a cast.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    data: TensorData,
    device: Device,
}

impl Feature {
    /// Builds a feature from anything convertible to tensor storage,
    /// applying the dtype and device requests in `options`.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::Placement`] when the requested device has no
    /// backing storage in this workspace.
    pub fn new(data: impl IntoTensorData, options: FeatureOptions) -> Result<Feature, FeatureError> {
        let mut data = data.into_tensor_data();
        if let Some(dtype) = options.dtype() {
            data = data.cast(dtype);
        }
        let device = options.device().unwrap_or_default();
        if let Device::Cuda { .. } = device {
            return Err(FeatureError::Placement(format!(
                "device {device} is not available, tensors are host-only"
            )));
        }
        Ok(Feature { data, device })
    }

    pub fn data(&self) -> &TensorData {
        &self.data
    }

    pub fn into_data(self) -> TensorData {
        self.data
    }

    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }
}
