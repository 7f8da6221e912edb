//! Raster output of rendered icons.
//!
//! [`IconImage`] is what [`VectorIcon::rasterize`](crate::VectorIcon::rasterize)
//! produces: straight-alpha RGBA pixels, the display scale they were rendered
//! for and the region that actually contains ink.

use image::RgbaImage;

/// A rectangle defined in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl RectPx {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle starting at origin (0, 0) with the given dimensions.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A rasterised icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in RGBA format.
    pub data: RgbaImage,

    /// The display scale factor (1.0 for @1x, 2.0 for @2x, ...).
    ///
    /// The logical size of the icon is `dimensions / scale`.
    pub scale: f32,

    /// The smallest rectangle containing every non-transparent pixel.
    ///
    /// Empty when the raster has no ink at all.
    pub content_bounds: RectPx,
}

impl IconImage {
    pub fn new(data: RgbaImage, scale: f32, content_bounds: RectPx) -> Self {
        Self {
            data,
            scale,
            content_bounds,
        }
    }

    /// Wraps a freshly rendered raster, measuring its content bounds.
    pub fn from_raster(data: RgbaImage, scale: f32) -> Self {
        let content_bounds = ink_bounds(&data);
        Self::new(data, scale, content_bounds)
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Returns the logical size of the icon (dimensions / scale).
    ///
    /// For a 48x48 @2x raster, the logical size is 24x24.
    pub fn logical_size(&self) -> (f32, f32) {
        (
            self.data.width() as f32 / self.scale,
            self.data.height() as f32 / self.scale,
        )
    }
}

fn ink_bounds(data: &RgbaImage) -> RectPx {
    let mut min = (u32::MAX, u32::MAX);
    let mut max = (0u32, 0u32);
    let mut any = false;

    for (x, y, pixel) in data.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        any = true;
        min = (min.0.min(x), min.1.min(y));
        max = (max.0.max(x), max.1.max(y));
    }

    if !any {
        return RectPx::default();
    }
    RectPx::new(min.0, min.1, max.0 - min.0 + 1, max.1 - min.1 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn rect_px_edges() {
        let rect = RectPx::new(10, 20, 100, 200);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 220);
        assert!(!rect.is_empty());
        assert!(RectPx::from_size(0, 5).is_empty());
    }

    #[test]
    fn logical_size_divides_by_scale() {
        let img = IconImage::from_raster(RgbaImage::new(64, 64), 2.0);
        assert_eq!(img.logical_size(), (32.0, 32.0));
    }

    #[test]
    fn content_bounds_cover_ink_only() {
        let mut data = RgbaImage::new(10, 10);
        data.put_pixel(2, 3, Rgba([0, 0, 0, 255]));
        data.put_pixel(6, 8, Rgba([0, 0, 0, 10]));

        let img = IconImage::from_raster(data, 1.0);
        assert_eq!(img.content_bounds, RectPx::new(2, 3, 5, 6));
    }

    #[test]
    fn blank_raster_has_empty_bounds() {
        let img = IconImage::from_raster(RgbaImage::new(4, 4), 1.0);
        assert!(img.content_bounds.is_empty());
        assert_eq!(img.dimensions(), SizePx::new(4, 4));
    }
}
