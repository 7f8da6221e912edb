//! SVG rasterisation and compositing using resvg/tiny-skia.
//!
//! Icons are rendered from the markup produced by
//! [`VectorIcon::to_svg`](crate::VectorIcon::to_svg). A [`Tint`] repaints
//! every fill and stroke in a single colour before parsing.

use std::str::FromStr;

use image::{Rgba, RgbaImage};
use palette::Srgb;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::{Error, Result};

// ============================================================================
// Tint
// ============================================================================

/// A colour applied to every painted fill and stroke of an icon.
///
/// Parsed from a hex code such as `"#1e88e5"` or `"1e88e5"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    rgb: [u8; 3],
}

impl Tint {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    /// Parses a hex colour code.
    pub fn parse(value: &str) -> Result<Self> {
        let color = Srgb::<u8>::from_str(value.trim()).map_err(|source| Error::InvalidColor {
            value: value.to_string(),
            source,
        })?;
        let (r, g, b) = color.into_components();
        Ok(Self::new(r, g, b))
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let [r, g, b] = self.rgb;
        (r, g, b)
    }

    /// The colour as `#rrggbb`.
    pub fn hex(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Tint {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

// ============================================================================
// SVG Rendering
// ============================================================================

/// Renders SVG markup to fit within a `size x size` pixel square.
///
/// Aspect ratio is preserved: the larger dimension becomes `size`.
/// Returns `None` if the markup cannot be parsed or the pixmap cannot be
/// allocated.
pub fn render_svg(svg_data: &str, size: u32) -> Option<RgbaImage> {
    render_svg_with_color(svg_data, size, None)
}

/// Renders SVG markup, optionally repainting it with `tint` first.
pub fn render_svg_with_color(svg_data: &str, size: u32, tint: Option<Tint>) -> Option<RgbaImage> {
    let markup = match tint {
        Some(tint) => repaint(svg_data, &tint.hex()),
        None => svg_data.to_string(),
    };

    let tree = Tree::from_str(&markup, &Options::default()).ok()?;
    let svg_size = tree.size();
    let scale = size as f32 / svg_size.width().max(svg_size.height());
    let width = (svg_size.width() * scale).ceil() as u32;
    let height = (svg_size.height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(width, height)?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    pixmap_to_image(&pixmap)
}

/// Replaces the value of every `fill="…"` and `stroke="…"` attribute with
/// `color`, leaving `none` and `transparent` untouched.
fn repaint(svg_data: &str, color: &str) -> String {
    ["fill", "stroke"]
        .into_iter()
        .fold(svg_data.to_string(), |markup, attr| {
            repaint_attr(&markup, attr, color)
        })
}

fn repaint_attr(markup: &str, attr: &str, color: &str) -> String {
    let opener = format!(" {attr}=\"");
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(at) = rest.find(&opener) {
        let value_start = at + opener.len();
        out.push_str(&rest[..value_start]);
        rest = &rest[value_start..];

        let Some(close) = rest.find('"') else {
            break;
        };
        match &rest[..close] {
            keep @ ("none" | "transparent") => out.push_str(keep),
            _ => out.push_str(color),
        }
        rest = &rest[close..];
    }

    out.push_str(rest);
    out
}

/// Converts a premultiplied tiny-skia pixmap into a straight-alpha image.
fn pixmap_to_image(pixmap: &Pixmap) -> Option<RgbaImage> {
    let bytes = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), bytes)
}

// ============================================================================
// Compositing
// ============================================================================

/// Draws `src` onto `dest` with its top-left corner at `(x, y)`.
///
/// Pixels falling outside `dest` are clipped. Blending is source-over.
pub fn composite_over(dest: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    for (sx, sy, pixel) in src.enumerate_pixels() {
        let dx = x + i64::from(sx);
        let dy = y + i64::from(sy);
        if dx < 0 || dy < 0 || dx >= i64::from(dest.width()) || dy >= i64::from(dest.height()) {
            continue;
        }
        let target = dest.get_pixel_mut(dx as u32, dy as u32);
        *target = source_over(*pixel, *target);
    }
}

fn source_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = f32::from(src[3]) / 255.0;
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= f32::EPSILON {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let s = f32::from(src[i]) / 255.0;
        let d = f32::from(dst[i]) / 255.0;
        ((s * sa + d * da * (1.0 - sa)) / out_a * 255.0).round() as u8
    };
    Rgba([channel(0), channel(1), channel(2), (out_a * 255.0).round() as u8])
}

#[cfg(test)]
mod tests {
    use super::*;

    const CIRCLE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24"><circle cx="12" cy="12" r="10" fill="#ff0000"/></svg>"##;

    #[test]
    fn renders_to_requested_size() {
        let img = render_svg(CIRCLE, 48).unwrap();
        assert_eq!((img.width(), img.height()), (48, 48));
        assert_eq!(img.get_pixel(24, 24)[3], 255);
        assert_eq!(img.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn invalid_markup_renders_nothing() {
        assert!(render_svg("not svg", 16).is_none());
    }

    #[test]
    fn tint_repaints_fill() {
        let tint = Tint::parse("#00ff00").unwrap();
        let img = render_svg_with_color(CIRCLE, 24, Some(tint)).unwrap();
        let center = img.get_pixel(12, 12);
        assert!(center[1] > 200 && center[0] < 50, "centre should be green: {center:?}");
    }

    #[test]
    fn repaint_keeps_none_and_ignores_prefixed_attrs() {
        let markup =
            r##"<path fill="none" stroke="#000000" stroke-width="2" fill-opacity="0.3"/>"##;
        let out = repaint(markup, "#123456");
        assert!(out.contains(r#"fill="none""#));
        assert!(out.contains(r##"stroke="#123456""##));
        assert!(out.contains(r#"stroke-width="2""#));
        assert!(out.contains(r#"fill-opacity="0.3""#));
    }

    #[test]
    fn tint_parses_with_or_without_hash() {
        assert_eq!(Tint::parse("1e88e5").unwrap(), Tint::new(0x1e, 0x88, 0xe5));
        assert_eq!(Tint::parse("#1e88e5").unwrap().hex(), "#1e88e5");
        assert!(matches!(Tint::parse("blue"), Err(Error::InvalidColor { .. })));
    }

    #[test]
    fn composite_clips_and_blends() {
        let mut dest = RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]));
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
        composite_over(&mut dest, &src, 6, -2);

        assert_eq!(dest.get_pixel(7, 0).0, [0, 0, 255, 255]);
        assert_eq!(dest.get_pixel(5, 0).0, [255, 0, 0, 255]);
        assert_eq!(dest.get_pixel(7, 2).0, [255, 0, 0, 255]);
    }

    #[test]
    fn half_transparent_source_mixes_colours() {
        let mixed = source_over(Rgba([0, 0, 255, 128]), Rgba([255, 0, 0, 255]));
        assert!(mixed[0] > 0 && mixed[2] > 0);
        assert_eq!(mixed[3], 255);
    }
}
