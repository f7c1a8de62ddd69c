//! Remote image fetch and slot rasterization.
//!
//! The HTTP GET goes through `reqwest`; decoding, the square centre crop, the
//! resample and the rounded-corner mask run on a blocking tokio worker so the
//! UI executor is never stalled by a large JPEG.

use anyhow::{Context, Result, anyhow};
use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::time::Duration;
use tracing::{debug, trace};

/// Pixel target for one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotRaster {
    pub side_px: u32,
    /// Corner radius as a fraction of the side.
    pub corner_ratio: f32,
}

/// A decoded, slot-ready image.
#[derive(Debug, Clone)]
pub struct SlotImage {
    pub handle: Handle,
}

pub fn build_client(timeout: Duration, user_agent: &str) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .context("Failed to build HTTP client")
}

pub async fn fetch_slot_image(
    client: &reqwest::Client,
    url: &str,
    raster: SlotRaster,
) -> Result<SlotImage> {
    debug!(%url, "Fetching image");
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {url} failed"))?
        .error_for_status()
        .with_context(|| format!("GET {url} returned an error status"))?;
    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("Failed to read body of {url}"))?;
    trace!(%url, bytes = bytes.len(), "Image body received");

    let pixels = tokio::task::spawn_blocking(move || rasterize(&bytes, raster))
        .await
        .map_err(|err| anyhow!("Decode worker failed: {err}"))??;

    Ok(SlotImage {
        handle: Handle::from_rgba(raster.side_px, raster.side_px, pixels),
    })
}

/// Decode `bytes`, crop the centred square, resize it to the slot and mask
/// the corners. Returns RGBA8 pixels, row-major.
pub fn rasterize(bytes: &[u8], raster: SlotRaster) -> Result<Vec<u8>> {
    let side = raster.side_px.max(1);
    let decoded = image::load_from_memory(bytes).context("Failed to decode image")?;
    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 {
        return Err(anyhow!("Image has no pixels"));
    }

    let crop = width.min(height);
    let square = decoded.crop_imm((width - crop) / 2, (height - crop) / 2, crop, crop);
    let mut rgba = square
        .resize_exact(side, side, FilterType::CatmullRom)
        .to_rgba8();

    let radius = (raster.corner_ratio.clamp(0.0, 0.5) * side as f32).max(0.0);
    if radius > 0.0 {
        for (x, y, pixel) in rgba.enumerate_pixels_mut() {
            let coverage = corner_coverage(x, y, side, radius);
            if coverage < 1.0 {
                pixel.0[3] = (pixel.0[3] as f32 * coverage).round() as u8;
            }
        }
    }

    Ok(rgba.into_raw())
}

/// Fraction of pixel `(x, y)` inside a square of `side` with rounded corners.
fn corner_coverage(x: u32, y: u32, side: u32, radius: f32) -> f32 {
    let size = side as f32;
    let px = x as f32 + 0.5;
    let py = y as f32 + 0.5;
    let cx = if px < radius {
        radius
    } else if px > size - radius {
        size - radius
    } else {
        return 1.0;
    };
    let cy = if py < radius {
        radius
    } else if py > size - radius {
        size - radius
    } else {
        return 1.0;
    };
    let distance = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
    (radius - distance + 0.5).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn crops_wide_image_to_square_slot() {
        let raster = SlotRaster {
            side_px: 32,
            corner_ratio: 0.0,
        };
        let pixels = rasterize(&encoded_png(120, 60), raster).expect("rasterize");
        assert_eq!(pixels.len(), 32 * 32 * 4);
        assert!(pixels.chunks(4).all(|p| p[3] == 255));
    }

    #[test]
    fn rounded_corners_are_transparent_and_centre_opaque() {
        let raster = SlotRaster {
            side_px: 48,
            corner_ratio: 24.0 / 450.0 * 4.0,
        };
        let pixels = rasterize(&encoded_png(64, 64), raster).expect("rasterize");
        let alpha = |x: usize, y: usize| pixels[(y * 48 + x) * 4 + 3];
        assert_eq!(alpha(0, 0), 0);
        assert_eq!(alpha(47, 0), 0);
        assert_eq!(alpha(0, 47), 0);
        assert_eq!(alpha(47, 47), 0);
        assert_eq!(alpha(24, 24), 255);
        assert_eq!(alpha(24, 0), 255);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let raster = SlotRaster {
            side_px: 16,
            corner_ratio: 0.0,
        };
        assert!(rasterize(b"definitely not an image", raster).is_err());
    }
}
