use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{GridOptions, Image, ImageError, make_grid};

static NEXT_SHOW_ID: AtomicU64 = AtomicU64::new(0);

fn temp_png_path() -> PathBuf {
    let id = NEXT_SHOW_ID.fetch_add(1, Ordering::Relaxed);
    env::temp_dir().join(format!("fovea-show-{}-{id}.png", std::process::id()))
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg("start").arg("").arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

fn show_inner(image: &Image) -> Result<(), ImageError> {
    let grid = make_grid(image, GridOptions::default())?;
    let (height, width) = (grid.shape[0] as u32, grid.shape[1] as u32);
    let buffer = crates_image::RgbImage::from_raw(width, height, grid.data)
        .ok_or_else(|| ImageError::Display("grid buffer does not match its shape".to_string()))?;

    let path = temp_png_path();
    buffer.save(&path)?;

    // Dropping the child handle leaves the viewer running detached.
    viewer_command(&path)
        .spawn()
        .map_err(|e| ImageError::Display(e.to_string()))?;

    Ok(())
}

impl Image {
    /// Composes the image batch into a grid, writes it to a temporary PNG,
    /// and opens it with the platform image viewer.
    ///
    /// The viewer runs detached; the call returns as soon as it is spawned.
    /// The CPU-bound grid and encoding work runs on tokio's blocking thread
    /// pool.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::Grid` if the batch cannot be composed.
    /// Returns `ImageError::Display` if the PNG cannot be written or the
    /// viewer cannot be spawned.
    pub async fn show(&self) -> Result<(), ImageError> {
        let image = self.clone();
        tokio::task::spawn_blocking(move || show_inner(&image))
            .await
            .map_err(|e| ImageError::Display(e.to_string()))?
    }
}
