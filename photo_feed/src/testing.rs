//! Shared fixtures for unit tests.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};

use crate::model::PhotoRecord;

/// Encode a small solid-colour JPEG.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
        width,
        height,
        image::Rgb([200, 40, 90]),
    ));
    let mut buffer = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buffer, 80);
    encoder.encode_image(&img).unwrap();
    buffer
}

pub fn record(id: i64, url: impl Into<String>) -> PhotoRecord {
    let url = url.into();
    PhotoRecord {
        album_id: 1,
        id,
        title: format!("photo {}", id),
        thumbnail_url: format!("{}_t", url),
        url,
    }
}
