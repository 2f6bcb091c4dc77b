use fovea_base::Tensor;
use fovea_features::TensorData;

use crate::{Image, ImageError};

/// Layout options for [`make_grid`].
#[derive(Clone, Debug)]
pub struct GridOptions {
    nrow: usize,
    padding: usize,
    pad_value: u8,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            nrow: 8,
            padding: 2,
            pad_value: 0,
        }
    }
}

impl GridOptions {
    /// Set the maximum number of cells per grid row.
    pub fn with_nrow(mut self, nrow: usize) -> Self {
        self.nrow = nrow;
        self
    }

    /// Set the spacing between cells and around the border, in pixels.
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Set the fill value for spacing and unused cells.
    pub fn with_pad_value(mut self, pad_value: u8) -> Self {
        self.pad_value = pad_value;
        self
    }

    // Getters
    pub fn nrow(&self) -> usize {
        self.nrow
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn pad_value(&self) -> u8 {
        self.pad_value
    }
}

/// Composes a batched image tensor into one displayable grid.
///
/// The stored tensor is read as a flat batch of `[channels, height, width]`
/// planes, leading dimensions multiplied out. Pixel values are converted to
/// u8 RGB: grayscale planes are replicated across the three channels, RGB
/// planes pass through, u16 and f32 values are narrowed the same way the
/// dtype cast narrows them. Cells fill row-major with at most `nrow` per
/// row, separated and bordered by `padding` pixels of `pad_value`.
///
/// Returns an HWC tensor of shape `[grid_height, grid_width, 3]`.
///
/// # Errors
///
/// Returns `ImageError::Grid` if the batch is empty, `nrow` is zero, or the
/// channel count is neither 1 nor 3.
pub fn make_grid(image: &Image, options: GridOptions) -> Result<Tensor<u8>, ImageError> {
    let shape = image.shape();
    let n = shape.len();
    let (channels, height, width) = (shape[n - 3], shape[n - 2], shape[n - 1]);
    let batch: usize = shape[..n - 3].iter().product();

    if batch == 0 {
        return Err(ImageError::Grid("empty batch".to_string()));
    }
    if options.nrow() == 0 {
        return Err(ImageError::Grid("nrow must be at least 1".to_string()));
    }
    if channels != 1 && channels != 3 {
        return Err(ImageError::Grid(format!(
            "unsupported channel count: {channels}"
        )));
    }

    let pixels: Vec<u8> = match image.data() {
        TensorData::U8(t) => t.data.clone(),
        TensorData::U16(t) => t.data.iter().map(|&v| (v >> 8) as u8).collect(),
        TensorData::F32(t) => t
            .data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0) as u8)
            .collect(),
    };

    let padding = options.padding();
    let cols = options.nrow().min(batch);
    let rows = batch.div_ceil(cols);
    let cell_h = height + padding;
    let cell_w = width + padding;
    let grid_h = rows * cell_h + padding;
    let grid_w = cols * cell_w + padding;

    let mut grid = vec![options.pad_value(); grid_h * grid_w * 3];
    let plane_len = channels * height * width;
    let hw = height * width;

    for index in 0..batch {
        let plane = &pixels[index * plane_len..][..plane_len];
        let y0 = (index / cols) * cell_h + padding;
        let x0 = (index % cols) * cell_w + padding;

        for y in 0..height {
            for x in 0..width {
                let dst = ((y0 + y) * grid_w + (x0 + x)) * 3;
                let src = y * width + x;
                if channels == 1 {
                    let v = plane[src];
                    grid[dst] = v;
                    grid[dst + 1] = v;
                    grid[dst + 2] = v;
                } else {
                    grid[dst] = plane[src];
                    grid[dst + 1] = plane[hw + src];
                    grid[dst + 2] = plane[2 * hw + src];
                }
            }
        }
    }

    Ok(Tensor::new(vec![grid_h, grid_w, 3], grid)?)
}
