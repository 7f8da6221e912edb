//! Result sheets: a list of icons rendered into one raster.

use image::RgbaImage;

use crate::config::GridSettings;
use crate::error::{Error, Result};
use crate::icon::RectPx;
use crate::render::{Tint, composite_over};
use crate::vector::VectorIcon;

/// Longest edge, in pixels, a sheet may have.
pub const MAX_SHEET_EDGE: u32 = 16_384;

/// Cell geometry for a sheet of `count` icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub size: u32,
    pub padding: u32,
    pitch: u32,
    width: u32,
    height: u32,
}

impl GridLayout {
    /// Lays out `count` icons row by row. Never uses more columns than icons.
    ///
    /// Fails when either edge of the sheet would exceed [`MAX_SHEET_EDGE`].
    pub fn new(count: usize, size: u32, settings: &GridSettings) -> Result<Self> {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        let columns = settings.columns.max(1).min(count);
        let rows = if columns == 0 { 0 } else { count.div_ceil(columns) };

        let pitch = settings
            .padding
            .checked_mul(2)
            .and_then(|gap| gap.checked_add(size));
        let edges = pitch.and_then(|pitch| {
            Some((pitch, columns.checked_mul(pitch)?, rows.checked_mul(pitch)?))
        });
        let (pitch, width, height) = match edges {
            Some((pitch, width, height)) if width <= MAX_SHEET_EDGE && height <= MAX_SHEET_EDGE => {
                (pitch, width, height)
            }
            _ => {
                return Err(Error::invalid_dimensions(format!(
                    "{count} icons of {size}px with {}px padding in {columns} columns \
                     exceed the {MAX_SHEET_EDGE}px sheet limit",
                    settings.padding
                )));
            }
        };

        Ok(Self {
            columns,
            rows,
            size,
            padding: settings.padding,
            pitch,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The square the icon at `index` is drawn into.
    pub fn cell(&self, index: usize) -> RectPx {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        let columns = self.columns.max(1);
        let (column, row) = (index % columns, index / columns);
        RectPx::new(
            column.saturating_mul(self.pitch).saturating_add(self.padding),
            row.saturating_mul(self.pitch).saturating_add(self.padding),
            self.size,
            self.size,
        )
    }
}

/// Rasterises `icons` at `size` pixels each and tiles them into one image.
///
/// The background is transparent. An empty list produces an empty image.
pub fn render_grid(
    icons: &[VectorIcon],
    size: u32,
    settings: &GridSettings,
    tint: Option<Tint>,
) -> Result<RgbaImage> {
    let layout = GridLayout::new(icons.len(), size, settings)?;
    let mut sheet = RgbaImage::new(layout.width(), layout.height());

    for (index, icon) in icons.iter().enumerate() {
        let raster = icon.rasterize(size, 1.0, tint)?;
        let cell = layout.cell(index);
        composite_over(&mut sheet, &raster.data, i64::from(cell.x), i64::from(cell.y));
    }

    tracing::debug!(
        icons = icons.len(),
        columns = layout.columns,
        rows = layout.rows,
        "rendered icon sheet"
    );
    Ok(sheet)
}
