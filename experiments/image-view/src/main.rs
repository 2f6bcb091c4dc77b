use fovea_base::{Tensor, init_stdout_logger};
use fovea_image::{GridOptions, Image, ImageOptions, make_grid};
use minifb::{Key, Window, WindowOptions};

const TILE: usize = 64;
const BATCH: usize = 8;

/// Convert HWC RGB buffer to packed ARGB u32 for minifb
fn rgb_to_argb(buf: &[u8], width: usize, height: usize) -> Vec<u32> {
    debug_assert!(
        buf.len() >= width * height * 3,
        "RGB buffer too small: expected {} bytes, got {}",
        width * height * 3,
        buf.len()
    );
    let mut argb = Vec::with_capacity(width * height);
    for i in 0..width * height {
        let idx = i * 3;
        let r = buf[idx] as u32;
        let g = buf[idx + 1] as u32;
        let b = buf[idx + 2] as u32;
        argb.push((r << 16) | (g << 8) | b);
    }
    argb
}

/// Fill a CHW batch with one color ramp per tile.
fn synthetic_planes() -> Vec<u8> {
    let plane = TILE * TILE;
    let mut data = vec![0u8; BATCH * 3 * plane];
    for tile in 0..BATCH {
        let base = tile * 3 * plane;
        let blue = (tile * 255 / (BATCH - 1)) as u8;
        for y in 0..TILE {
            for x in 0..TILE {
                let i = y * TILE + x;
                data[base + i] = (x * 255 / (TILE - 1)) as u8;
                data[base + plane + i] = (y * 255 / (TILE - 1)) as u8;
                data[base + 2 * plane + i] = blue;
            }
        }
    }
    data
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_stdout_logger();

    println!("Image View");
    println!("Tiles: {} of {}x{}", BATCH, TILE, TILE);
    println!("Controls: ESC to exit");
    println!();

    let tensor = Tensor::new(vec![BATCH, 3, TILE, TILE], synthetic_planes())?;
    let image = Image::new(tensor, ImageOptions::default())?;
    let (height, width) = image.image_size();
    println!(
        "Classified as {} ({} channels, {}x{} pixels per tile)",
        image.color_space(),
        image.num_channels(),
        width,
        height
    );

    let grid = make_grid(&image, GridOptions::default().with_nrow(4))?;
    let grid_h = grid.shape[0];
    let grid_w = grid.shape[1];
    let argb = rgb_to_argb(&grid.data, grid_w, grid_h);

    let mut window = Window::new(
        "Image View - ESC to exit",
        grid_w,
        grid_h,
        WindowOptions::default(),
    )?;

    window.set_target_fps(30);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&argb, grid_w, grid_h)?;
    }

    println!("Exiting...");
    Ok(())
}
