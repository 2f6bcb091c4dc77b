use fovea_base::Tensor;
use fovea_image::{ColorSpace, Image, ImageError, ImageOptions};

// show() paths that fail during grid composition return before any file is
// written or viewer spawned, so they are safe to exercise here.

#[tokio::test]
async fn test_show_unsupported_channels() {
    let tensor = Tensor::<u8>::zeros(vec![2, 4, 4]).unwrap();
    let options = ImageOptions::default().with_color_space(ColorSpace::Other);
    let image = Image::new(tensor, options).unwrap();

    let result = image.show().await;
    match result {
        Err(ImageError::Grid(msg)) => assert!(msg.contains("unsupported channel count: 2")),
        _ => panic!("Expected ImageError::Grid variant"),
    }
}

#[tokio::test]
async fn test_show_empty_batch() {
    let tensor = Tensor::<u8>::zeros(vec![0, 3, 4, 4]).unwrap();
    let image = Image::new(tensor, ImageOptions::default()).unwrap();

    let result = image.show().await;
    match result {
        Err(ImageError::Grid(msg)) => assert!(msg.contains("empty")),
        _ => panic!("Expected ImageError::Grid variant"),
    }
}
