//! Compile-time manifest of the bundled icons.
//!
//! Each manifest line names an icon, the styles it ships in and the path
//! data of its 24x24 glyph. The macro expands every line into an accessor
//! function plus one [`CatalogEntry`] per listed style.

#![allow(non_snake_case)]

use super::CatalogEntry;
use crate::style::IconStyle;
use crate::vector::VectorIcon;

macro_rules! icon_catalog {
    ($( $name:ident [$($style:ident),+ $(,)?] { $($path:literal),+ $(,)? } )*) => {
        $(
            pub(super) fn $name(style: IconStyle) -> VectorIcon {
                static PATHS: &[&str] = &[$($path),+];
                VectorIcon::new(style, stringify!($name), PATHS)
            }
        )*

        pub(super) static ENTRIES: &[CatalogEntry] = &[
            $( $( CatalogEntry::new(IconStyle::$style, stringify!($name), $name), )+ )*
        ];
    };
}

icon_catalog! {
    Add [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M19 13h-6v6h-2v-6H5v-2h6V5h2v6h6v2z",
    }
    Check [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z",
    }
    Close [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z",
    }
    Delete [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M6 19c0 1.1.9 2 2 2h8c1.1 0 2-.9 2-2V7H6v12z",
        "M19 4h-3.5l-1-1h-5l-1 1H5v2h14V4z",
    }
    Favorite [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z",
    }
    FilterList [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M10 18h4v-2h-4v2zM3 6v2h18V6H3zm3 7h12v-2H6v2z",
    }
    Home [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z",
    }
    Info [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-6h2v6zm0-8h-2V7h2v2z",
    }
    Lock [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M18 8h-1V6c0-2.76-2.24-5-5-5S7 3.24 7 6v2H6c-1.1 0-2 .9-2 2v10c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V10c0-1.1-.9-2-2-2zm-6 9c-1.1 0-2-.9-2-2s.9-2 2-2 2 .9 2 2-.9 2-2 2zM9 8V6c0-1.66 1.34-3 3-3s3 1.34 3 3v2H9z",
    }
    ManageSearch [Filled, Outlined, Rounded, TwoTone] {
        "M7 9H2V7h5v2zm0 3H2v2h5v-2zm13.59 7l-3.83-3.83c-.8.52-1.74.83-2.76.83-2.76 0-5-2.24-5-5s2.24-5 5-5 5 2.24 5 5c0 1.02-.31 1.96-.83 2.75L21 17.59 19.59 19zM17 11c0-1.65-1.35-3-3-3s-3 1.35-3 3 1.35 3 3 3 3-1.35 3-3zM2 19h10v-2H2v2z",
    }
    Menu [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z",
    }
    Person [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M12 12c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm0 2c-2.67 0-8 1.34-8 4v2h16v-2c0-2.66-5.33-4-8-4z",
    }
    Refresh [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M17.65 6.35C16.2 4.9 14.21 4 12 4c-4.42 0-7.99 3.58-7.99 8s3.57 8 7.99 8c3.73 0 6.84-2.55 7.73-6h-2.08c-.82 2.33-3.04 4-5.65 4-3.31 0-6-2.69-6-6s2.69-6 6-6c1.66 0 3.14.69 4.22 1.78L13 11h7V4l-2.35 2.35z",
    }
    SavedSearch [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5z",
        "M9.5 13l-1.2-2.3L6 9.5l2.3-1.2L9.5 6l1.2 2.3L13 9.5l-2.3 1.2z",
    }
    Search [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z",
    }
    Settings [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M12 8a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
        "M20.5 13.5v-3l-2.6-.4a7 7 0 0 0-.8-1.9l1.6-2.1-2.1-2.1-2.1 1.6a7 7 0 0 0-1.9-.8L12.2 2h-3l-.4 2.6a7 7 0 0 0-1.9.8L4.8 3.8 2.7 5.9l1.6 2.1a7 7 0 0 0-.8 1.9L1 10.3v3l2.6.4a7 7 0 0 0 .8 1.9l-1.6 2.1 2.1 2.1 2.1-1.6a7 7 0 0 0 1.9.8l.4 2.6h3l.4-2.6a7 7 0 0 0 1.9-.8l2.1 1.6 2.1-2.1-1.6-2.1a7 7 0 0 0 .8-1.9z",
    }
    Star [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z",
    }
    Verified [Filled, Outlined, Rounded] {
        "M23 12l-2.44-2.79.34-3.69-3.61-.82-1.89-3.2L12 2.96 8.6 1.5 6.71 4.69 3.1 5.5l.34 3.7L1 12l2.44 2.79-.34 3.7 3.61.82L8.6 22.5l3.4-1.47 3.4 1.46 1.89-3.19 3.61-.82-.34-3.69L23 12z",
        "M10.09 16.72l-3.8-3.81 1.48-1.48 2.32 2.33 5.85-5.87 1.48 1.48-7.33 7.35z",
    }
    Wifi [Filled, Outlined, Rounded, Sharp, TwoTone] {
        "M1 9l2 2c4.97-4.97 13.03-4.97 18 0l2-2C16.93 2.93 7.08 2.93 1 9zm8 8l3 3 3-3c-1.65-1.66-4.34-1.66-6 0zm-4-4l2 2c2.76-2.76 7.24-2.76 10 0l2-2C15.14 9.14 8.87 9.14 5 13z",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_counts_per_style() {
        let count = |style: IconStyle| ENTRIES.iter().filter(|e| e.style() == style).count();
        assert_eq!(count(IconStyle::Filled), 19);
        assert_eq!(count(IconStyle::Outlined), 19);
        assert_eq!(count(IconStyle::Rounded), 19);
        assert_eq!(count(IconStyle::Sharp), 17);
        assert_eq!(count(IconStyle::TwoTone), 18);
    }

    #[test]
    fn accessor_tags_icon_with_style() {
        let icon = Search(IconStyle::TwoTone);
        assert_eq!(icon.qualified_name(), "TwoTone.Search");
    }

    #[test]
    fn every_glyph_rasterises() {
        for entry in ENTRIES {
            let image = entry
                .invoke()
                .rasterize(24, 1.0, None)
                .unwrap_or_else(|err| panic!("{entry:?}: {err}"));
            assert!(!image.content_bounds.is_empty(), "{entry:?} drew nothing");
        }
    }
}
