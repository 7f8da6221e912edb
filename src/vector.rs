//! Vector icons produced by catalog accessors.
//!
//! A [`VectorIcon`] is the renderable value an accessor returns: a qualified
//! name, its style and the static path data of the glyph. It can be turned
//! into SVG markup with [`VectorIcon::to_svg`] or rasterised with
//! [`VectorIcon::rasterize`].

use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::icon::IconImage;
use crate::render::{Tint, render_svg_with_color};
use crate::selection::Selection;
use crate::style::IconStyle;

/// Side length of the square viewport every bundled glyph is drawn in.
pub const VIEWPORT: f32 = 24.0;

/// Opacity of the secondary tone in [`IconStyle::TwoTone`] icons.
const TWO_TONE_OPACITY: f32 = 0.3;

/// A vector icon materialised from the catalog.
///
/// Equality and hashing only consider the `(name, style)` pair; the path
/// data is fully determined by it.
#[derive(Clone)]
pub struct VectorIcon {
    qualified_name: String,
    style: IconStyle,
    viewport: f32,
    paths: &'static [&'static str],
}

impl VectorIcon {
    /// Creates an icon named `name` in `style` from static path data.
    pub fn new(style: IconStyle, name: &str, paths: &'static [&'static str]) -> Self {
        Self {
            qualified_name: format!("{style}.{name}"),
            style,
            viewport: VIEWPORT,
            paths,
        }
    }

    /// The qualified name, e.g. `"TwoTone.Search"`.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// The display name with the style prefix stripped, e.g. `"Search"`.
    pub fn name(&self) -> &str {
        display_name(&self.qualified_name)
    }

    pub fn style(&self) -> IconStyle {
        self.style
    }

    pub fn viewport(&self) -> f32 {
        self.viewport
    }

    /// The raw path data, one entry per `<path>` element.
    pub fn paths(&self) -> &'static [&'static str] {
        self.paths
    }

    /// The selection that picks this icon.
    pub fn selection(&self) -> Selection {
        Selection::new(self.style, self.name())
    }

    /// Builds SVG markup for this icon, painted in black.
    ///
    /// Each style paints the same glyph differently: filled, outlined
    /// (stroke only), rounded joins, crisp sharp edges, or a translucent
    /// fill under an outline for two-tone.
    pub fn to_svg(&self) -> String {
        let size = self.viewport;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        );
        for d in self.paths {
            // Writing to a String cannot fail.
            let _ = match self.style {
                IconStyle::Filled => write!(svg, r##"<path d="{d}" fill="#000000"/>"##),
                IconStyle::Outlined => write!(
                    svg,
                    r##"<path d="{d}" fill="none" stroke="#000000" stroke-width="1.5"/>"##
                ),
                IconStyle::Rounded => write!(
                    svg,
                    r##"<path d="{d}" fill="#000000" stroke="#000000" stroke-width="1" stroke-linejoin="round" stroke-linecap="round"/>"##
                ),
                IconStyle::Sharp => write!(
                    svg,
                    r##"<path d="{d}" fill="#000000" shape-rendering="crispEdges"/>"##
                ),
                IconStyle::TwoTone => write!(
                    svg,
                    r##"<path d="{d}" fill="#000000" fill-opacity="{TWO_TONE_OPACITY}"/><path d="{d}" fill="none" stroke="#000000" stroke-width="1.5"/>"##
                ),
            };
        }
        svg.push_str("</svg>");
        svg
    }

    /// Rasterises the icon to fit a `size x size` pixel square.
    ///
    /// `scale` is recorded on the resulting image (2.0 for a @2x raster);
    /// the pixel size is `size * scale`. A tint replaces every painted colour.
    /// A scale that is not finite and positive is rejected.
    pub fn rasterize(&self, size: u32, scale: f32, tint: Option<Tint>) -> Result<IconImage> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::invalid_dimensions(format!(
                "scale {scale} for '{}' must be finite and positive",
                self.qualified_name
            )));
        }
        let pixels = (size as f32 * scale).round().max(1.0) as u32;
        let data = render_svg_with_color(&self.to_svg(), pixels, tint).ok_or_else(|| {
            Error::svg(&self.qualified_name, "SVG could not be parsed or rasterised")
        })?;
        Ok(IconImage::from_raster(data, scale))
    }
}

impl PartialEq for VectorIcon {
    fn eq(&self, other: &Self) -> bool {
        self.style == other.style && self.name() == other.name()
    }
}

impl Eq for VectorIcon {}

impl Hash for VectorIcon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.style.hash(state);
        self.name().hash(state);
    }
}

impl fmt::Debug for VectorIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorIcon")
            .field("name", &self.qualified_name)
            .field("paths", &self.paths.len())
            .finish()
    }
}

/// Strips the style prefix segment from a qualified icon name.
///
/// Everything up to and including the first `.` is removed; names without a
/// separator are returned unchanged.
pub fn display_name(qualified: &str) -> &str {
    qualified
        .split_once('.')
        .map_or(qualified, |(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    static SQUARE: &[&str] = &["M4 4h16v16H4z"];

    #[test]
    fn name_strips_style_prefix() {
        let icon = VectorIcon::new(IconStyle::TwoTone, "Search", SQUARE);
        assert_eq!(icon.qualified_name(), "TwoTone.Search");
        assert_eq!(icon.name(), "Search");
        assert_eq!(display_name("Search"), "Search");
    }

    #[test]
    fn equality_uses_name_and_style() {
        static OTHER: &[&str] = &["M0 0h1v1H0z"];
        let a = VectorIcon::new(IconStyle::Filled, "Home", SQUARE);
        let b = VectorIcon::new(IconStyle::Filled, "Home", OTHER);
        let c = VectorIcon::new(IconStyle::Sharp, "Home", SQUARE);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn outlined_svg_has_no_fill() {
        let svg = VectorIcon::new(IconStyle::Outlined, "Box", SQUARE).to_svg();
        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r#"viewBox="0 0 24 24""#));
    }

    #[test]
    fn two_tone_svg_draws_each_path_twice() {
        let svg = VectorIcon::new(IconStyle::TwoTone, "Box", SQUARE).to_svg();
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains("fill-opacity=\"0.3\""));
    }

    #[test]
    fn rasterize_honours_scale() {
        let icon = VectorIcon::new(IconStyle::Filled, "Box", SQUARE);
        let image = icon.rasterize(24, 2.0, None).unwrap();
        assert_eq!(image.dimensions().width, 48);
        assert_eq!(image.logical_size(), (24.0, 24.0));
        assert!(!image.content_bounds.is_empty());
    }

    #[test]
    fn rasterize_rejects_degenerate_scale() {
        let icon = VectorIcon::new(IconStyle::Filled, "Box", SQUARE);
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(
                matches!(icon.rasterize(24, scale, None), Err(Error::InvalidDimensions(_))),
                "scale {scale} was accepted"
            );
        }
    }

    #[test]
    fn selection_round_trips_through_icon() {
        let icon = VectorIcon::new(IconStyle::Rounded, "Star", SQUARE);
        assert_eq!(icon.selection().to_string(), "Rounded.Star");
    }
}
