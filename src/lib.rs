//! maticonsearch: search and pick from a bundled set of Material-style icons
//!
//! Icons live in a static catalog keyed by `icons.<style>.<Name>`. An
//! [`IconResolver`] looks single icons up and runs case-insensitive substring
//! queries per [`IconStyle`]; an [`IconPicker`] drives those queries from a
//! background thread while the caller types.
//!
//! # Example
//!
//! ```
//! use maticonsearch::{IconResolver, IconStyle, Selection};
//!
//! let resolver = IconResolver::bundled();
//!
//! let names: Vec<_> = resolver
//!     .query(Some("search"), IconStyle::TwoTone)
//!     .iter()
//!     .map(|icon| icon.name().to_string())
//!     .collect();
//! assert_eq!(names, ["ManageSearch", "SavedSearch", "Search"]);
//!
//! // Selections travel as "<Style>.<Name>"
//! let selection: Selection = "TwoTone.Search".parse().unwrap();
//! let icon = resolver.resolve_selection(&selection).unwrap();
//! assert_eq!(icon.selection(), selection);
//! ```
//!
//! # Picker sessions
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use maticonsearch::{IconPicker, IconResolver, IconStyle, PickerConfig, PickerResult};
//!
//! let config = PickerConfig::new().with_default_style(IconStyle::Rounded);
//! let mut picker = IconPicker::new(Arc::new(IconResolver::bundled()), &config).unwrap();
//!
//! picker.search("wifi").unwrap();
//! assert!(picker.wait(Duration::from_secs(5)).unwrap());
//!
//! let result = PickerResult::new(picker.select(0).unwrap());
//! assert_eq!(result.to_json().unwrap(), r#"{"icon":"Rounded.Wifi"}"#);
//! ```
//!
//! # Rendering
//!
//! ```
//! use maticonsearch::{IconResolver, IconStyle, Tint};
//!
//! let icon = IconResolver::bundled().resolve("Star", IconStyle::Outlined).unwrap();
//! let image = icon.rasterize(24, 2.0, Some(Tint::parse("#1e88e5").unwrap())).unwrap();
//! assert_eq!(image.dimensions().width, 48);
//! assert_eq!(image.logical_size(), (24.0, 24.0));
//! ```

mod catalog;
mod config;
mod error;
mod grid;
mod icon;
mod index;
mod list;
mod picker;
mod render;
mod resolver;
mod selection;
mod state;
mod style;
mod vector;
mod worker;

pub use catalog::{Accessor, Catalog, CatalogEntry};
pub use config::{GridSettings, PickerConfig, RenderSettings};
pub use error::{Error, Result};
pub use grid::{GridLayout, MAX_SHEET_EDGE, render_grid};
pub use icon::{IconImage, RectPx, SizePx};
pub use index::IconIndex;
pub use list::IconList;
pub use picker::IconPicker;
pub use render::{Tint, composite_over, render_svg, render_svg_with_color};
pub use resolver::IconResolver;
pub use selection::{PickerResult, Selection};
pub use state::{SearchState, SearchUpdate};
pub use style::{IconStyle, NAMESPACE};
pub use vector::{VIEWPORT, VectorIcon, display_name};
pub use worker::{CancellationPolicy, QueryOutcome, QueryWorker};
