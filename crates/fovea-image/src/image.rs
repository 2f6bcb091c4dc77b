use fovea_features::{DType, Device, Feature, FeatureOptions, IntoTensorData, TensorData};

use crate::{ColorSpace, ImageError, guess_color_space};

/// Construction options for [`Image`].
#[derive(Clone, Debug, Default)]
pub struct ImageOptions {
    dtype: Option<DType>,
    device: Option<Device>,
    color_space: Option<ColorSpace>,
    color_space_name: Option<String>,
}

impl ImageOptions {
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

    /// Tag the image with `color_space` directly, skipping inference.
    ///
    /// The value is stored as-is, without validation against the channel
    /// count. Takes precedence over [`with_color_space_name`] when both are
    /// set.
    ///
    /// [`with_color_space_name`]: ImageOptions::with_color_space_name
    pub fn with_color_space(mut self, color_space: ColorSpace) -> Self {
        self.color_space = Some(color_space);
        self
    }

    /// Tag the image with the color space named `name`.
    ///
    /// The name is resolved during construction by exact, case-sensitive
    /// lookup over `OTHER`, `GRAYSCALE` and `RGB`.
    pub fn with_color_space_name(mut self, name: impl Into<String>) -> Self {
        self.color_space_name = Some(name.into());
        self
    }

    // Getters
    pub fn dtype(&self) -> Option<DType> {
        self.dtype
    }

    pub fn device(&self) -> Option<Device> {
        self.device
    }

    pub fn color_space(&self) -> Option<ColorSpace> {
        self.color_space
    }

    pub fn color_space_name(&self) -> Option<&str> {
        self.color_space_name.as_deref()
    }
}

/// An image tensor tagged with its color-space classification.
///
/// Layout is CHW: `[..., channels, height, width]`. Construction normalizes
/// rank 2 input to rank 3, so the channel axis and the two spatial axes are
/// always present. The value is read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    feature: Feature,
    color_space: ColorSpace,
}

impl Image {
    /// Builds an image from anything convertible to tensor storage.
    ///
    /// A rank 2 input is a single plane without a channel axis; it gains a
    /// leading channel axis of size 1. Higher ranks pass through unchanged.
    /// When no color space is supplied the tag is inferred from the shape,
    /// and an inconclusive guess is logged as a warning with the image
    /// tagged [`ColorSpace::Other`].
    ///
    /// # Errors
    ///
    /// Returns `ImageError::Rank` if the input has fewer than 2 dimensions.
    /// Returns `ImageError::ColorSpace` if a color-space name does not match
    /// the enumeration.
    /// Returns `ImageError::Feature` if dtype or device resolution fails.
    pub fn new(data: impl IntoTensorData, options: ImageOptions) -> Result<Image, ImageError> {
        let mut data = data.into_tensor_data();
        if data.ndim() < 2 {
            return Err(ImageError::Rank { got: data.ndim() });
        }
        if data.ndim() == 2 {
            data = data.unsqueeze(0)?;
        }

        let color_space = match (options.color_space(), options.color_space_name()) {
            (Some(color_space), _) => color_space,
            (None, Some(name)) => name.parse()?,
            (None, None) => {
                let guessed = guess_color_space(&data);
                if guessed == ColorSpace::Other {
                    log::warn!(
                        "unable to infer a color space from shape {:?}, tagging as {guessed}, pass one explicitly",
                        data.shape()
                    );
                }
                guessed
            }
        };

        let mut feature_options = FeatureOptions::default();
        if let Some(dtype) = options.dtype() {
            feature_options = feature_options.with_dtype(dtype);
        }
        if let Some(device) = options.device() {
            feature_options = feature_options.with_device(device);
        }
        let feature = Feature::new(data, feature_options)?;

        Ok(Image {
            feature,
            color_space,
        })
    }

    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    pub fn data(&self) -> &TensorData {
        self.feature.data()
    }

    pub fn dtype(&self) -> DType {
        self.feature.dtype()
    }

    pub fn device(&self) -> Device {
        self.feature.device()
    }

    pub fn shape(&self) -> &[usize] {
        self.feature.shape()
    }

    pub fn ndim(&self) -> usize {
        self.feature.ndim()
    }

    /// Spatial size as `(height, width)`, the last two dimensions.
    pub fn image_size(&self) -> (usize, usize) {
        let shape = self.shape();
        (shape[shape.len() - 2], shape[shape.len() - 1])
    }

    /// Size of the channel axis, the third dimension from the end.
    pub fn num_channels(&self) -> usize {
        let shape = self.shape();
        shape[shape.len() - 3]
    }
}
