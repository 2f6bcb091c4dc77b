use fovea_base::Tensor;
use fovea_features::TensorData;
use fovea_image::{ColorSpace, ImageError, guess_color_space};

#[test]
fn test_guess_rank_0_and_1() {
    let scalar = TensorData::U8(Tensor::from_scalar(42u8));
    assert_eq!(guess_color_space(&scalar), ColorSpace::Other);

    let flat = TensorData::U8(Tensor::zeros(vec![7]).unwrap());
    assert_eq!(guess_color_space(&flat), ColorSpace::Other);
}

#[test]
fn test_guess_rank_2_is_grayscale() {
    let plane = TensorData::U8(Tensor::zeros(vec![4, 4]).unwrap());
    assert_eq!(guess_color_space(&plane), ColorSpace::Grayscale);
}

#[test]
fn test_guess_rank_3_by_channel_axis() {
    let one = TensorData::U8(Tensor::zeros(vec![1, 4, 4]).unwrap());
    assert_eq!(guess_color_space(&one), ColorSpace::Grayscale);

    let three = TensorData::U8(Tensor::zeros(vec![3, 4, 4]).unwrap());
    assert_eq!(guess_color_space(&three), ColorSpace::Rgb);

    let five = TensorData::U8(Tensor::zeros(vec![5, 4, 4]).unwrap());
    assert_eq!(guess_color_space(&five), ColorSpace::Other);
}

#[test]
fn test_guess_batched_ranks() {
    // The channel axis stays third from the end however many leading
    // dimensions there are.
    let batch = TensorData::U8(Tensor::zeros(vec![2, 3, 4, 4]).unwrap());
    assert_eq!(guess_color_space(&batch), ColorSpace::Rgb);

    let nested = TensorData::U8(Tensor::zeros(vec![2, 2, 1, 4, 4]).unwrap());
    assert_eq!(guess_color_space(&nested), ColorSpace::Grayscale);

    let odd = TensorData::U8(Tensor::zeros(vec![2, 4, 4, 4]).unwrap());
    assert_eq!(guess_color_space(&odd), ColorSpace::Other);
}

#[test]
fn test_guess_total_over_ranks() {
    for rank in 0..=5 {
        let shape = vec![2; rank];
        let data = TensorData::F32(Tensor::zeros(shape).unwrap());
        // Never panics, always returns a classification.
        let _ = guess_color_space(&data);
    }
}

#[test]
fn test_display_names() {
    assert_eq!(ColorSpace::Other.to_string(), "OTHER");
    assert_eq!(ColorSpace::Grayscale.to_string(), "GRAYSCALE");
    assert_eq!(ColorSpace::Rgb.to_string(), "RGB");
    assert_eq!(ColorSpace::Sentinel.to_string(), "SENTINEL");
}

#[test]
fn test_from_str_exact_names() {
    assert_eq!("OTHER".parse::<ColorSpace>().unwrap(), ColorSpace::Other);
    assert_eq!(
        "GRAYSCALE".parse::<ColorSpace>().unwrap(),
        ColorSpace::Grayscale
    );
    assert_eq!("RGB".parse::<ColorSpace>().unwrap(), ColorSpace::Rgb);
}

#[test]
fn test_from_str_case_sensitive() {
    assert!("rgb".parse::<ColorSpace>().is_err());
    assert!("Rgb".parse::<ColorSpace>().is_err());
    assert!("grayscale".parse::<ColorSpace>().is_err());
}

#[test]
fn test_from_str_unknown_name() {
    let err = "CMYK".parse::<ColorSpace>().unwrap_err();
    match err {
        ImageError::ColorSpace(name) => assert_eq!(name, "CMYK"),
        _ => panic!("Expected ImageError::ColorSpace variant"),
    }
}

#[test]
fn test_from_str_rejects_sentinel() {
    assert!("SENTINEL".parse::<ColorSpace>().is_err());
}

#[test]
fn test_parse_display_round_trip() {
    for space in [ColorSpace::Other, ColorSpace::Grayscale, ColorSpace::Rgb] {
        let parsed: ColorSpace = space.to_string().parse().unwrap();
        assert_eq!(parsed, space);
    }
}

#[test]
fn test_channels() {
    assert_eq!(ColorSpace::Grayscale.channels(), Some(1));
    assert_eq!(ColorSpace::Rgb.channels(), Some(3));
    assert_eq!(ColorSpace::Other.channels(), None);
    assert_eq!(ColorSpace::Sentinel.channels(), None);
}
