use texture_options::{ChannelLayout, Extent, PixelFormat, SchemaEnum, StorageClass};

#[test]
fn formats_decompose_into_layout_and_storage() {
    for &format in PixelFormat::ALL {
        assert_eq!(PixelFormat::new(format.layout(), format.storage()), format);
    }

    for &layout in ChannelLayout::ALL {
        for &storage in StorageClass::ALL {
            let format = PixelFormat::new(layout, storage);
            assert_eq!(format.layout(), layout);
            assert_eq!(format.storage(), storage);
        }
    }
}

#[test]
fn channel_counts() {
    assert_eq!(PixelFormat::Single.channels(), 1);
    assert_eq!(PixelFormat::FloatDual.channels(), 2);
    assert_eq!(PixelFormat::CompressedRgb.channels(), 3);
    assert_eq!(PixelFormat::Rgba.channels(), 4);
}

#[test]
fn storage_classes() {
    assert!(PixelFormat::FloatRgb.is_float());
    assert!(!PixelFormat::FloatRgb.is_compressed());
    assert!(PixelFormat::CompressedSingle.is_compressed());
    assert!(!PixelFormat::Dual.is_float());
    assert!(!PixelFormat::Dual.is_compressed());
}

#[test]
fn wgpu_formats() {
    use wgpu::TextureFormat as F;

    let expected = [
        (PixelFormat::Single, F::R8Unorm),
        (PixelFormat::Dual, F::Rg8Unorm),
        (PixelFormat::Rgb, F::Rgba8Unorm),
        (PixelFormat::Rgba, F::Rgba8Unorm),
        (PixelFormat::FloatSingle, F::R32Float),
        (PixelFormat::FloatDual, F::Rg32Float),
        (PixelFormat::FloatRgb, F::Rgba32Float),
        (PixelFormat::FloatRgba, F::Rgba32Float),
        (PixelFormat::CompressedSingle, F::Bc4RUnorm),
        (PixelFormat::CompressedDual, F::Bc5RgUnorm),
        (PixelFormat::CompressedRgb, F::Bc1RgbaUnorm),
        (PixelFormat::CompressedRgba, F::Bc3RgbaUnorm),
    ];

    for (format, wgpu_format) in expected {
        assert_eq!(format.wgpu_format(), wgpu_format, "{format}");
        assert_eq!(
            format.block_size(),
            wgpu_format.block_dimensions(),
            "{format}"
        );
        assert_eq!(
            Some(format.bytes_per_block()),
            wgpu_format.block_copy_size(None),
            "{format}"
        );
    }
}

#[test]
fn widened_formats() {
    let widened: Vec<_> = PixelFormat::ALL
        .iter()
        .copied()
        .filter(|f| f.is_widened())
        .collect();
    assert_eq!(widened, [PixelFormat::Rgb, PixelFormat::FloatRgb]);
}

#[test]
fn row_pitch() {
    assert_eq!(PixelFormat::Single.bytes_per_row(100), 100);
    assert_eq!(PixelFormat::Rgb.bytes_per_row(100), 400);
    assert_eq!(PixelFormat::FloatRgba.bytes_per_row(3), 48);
    // Partial blocks round up.
    assert_eq!(PixelFormat::CompressedRgb.bytes_per_row(5), 16);
    assert_eq!(PixelFormat::CompressedRgba.bytes_per_row(8), 32);
    assert_eq!(PixelFormat::CompressedDual.rows_per_image(9), 3);
    assert_eq!(PixelFormat::Dual.rows_per_image(9), 9);
}

#[test]
fn block_alignment() {
    assert!(PixelFormat::Rgba.is_aligned(Extent::new(3, 1)));
    assert!(PixelFormat::CompressedRgb.is_aligned(Extent::new(8, 4)));
    assert!(!PixelFormat::CompressedRgb.is_aligned(Extent::new(8, 2)));
    assert!(!PixelFormat::CompressedSingle.is_aligned(Extent::new(6, 4)));
}

#[test]
fn compressed_formats_need_bc_feature() {
    for &format in PixelFormat::ALL {
        let needs_bc = format.required_features() == wgpu::Features::TEXTURE_COMPRESSION_BC;
        assert_eq!(needs_bc, format.is_compressed(), "{format}");
        assert!(format.is_supported_by(wgpu::Features::TEXTURE_COMPRESSION_BC));
        assert_eq!(
            format.is_supported_by(wgpu::Features::empty()),
            !format.is_compressed()
        );
    }
}
