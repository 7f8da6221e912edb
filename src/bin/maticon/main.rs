//! maticon: browse, search and render the bundled icon catalog.

mod pick;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use maticonsearch::{
    GridSettings, IconResolver, IconStyle, PickerConfig, Selection, Tint, render_grid,
};

#[derive(Parser)]
#[command(name = "maticon")]
#[command(about = "Search, pick and render bundled vector icons")]
struct Cli {
    /// Picker configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List styles and how many icons each has
    Styles,
    /// Print icons whose name contains QUERY
    Search {
        query: Option<String>,
        /// Style to search (defaults to the configured style)
        #[arg(long, short)]
        style: Option<IconStyle>,
    },
    /// Print icon names starting with PREFIX
    Complete {
        prefix: String,
        #[arg(long, short)]
        style: Option<IconStyle>,
    },
    /// Look up one icon by its "<Style>.<Name>" selection
    Resolve {
        selection: String,
        /// Fall back to Filled for an unknown style
        #[arg(long)]
        lenient: bool,
        /// Print the icon as SVG
        #[arg(long)]
        svg: bool,
    },
    /// Rasterise one icon to a PNG file
    Render {
        selection: String,
        #[arg(long, short)]
        output: PathBuf,
        #[arg(long)]
        size: Option<u32>,
        #[arg(long, default_value_t = 1.0)]
        scale: f32,
        /// Hex tint colour, e.g. "#1e88e5"
        #[arg(long)]
        color: Option<String>,
    },
    /// Render every match of QUERY into one PNG sheet
    Sheet {
        query: Option<String>,
        #[arg(long, short)]
        style: Option<IconStyle>,
        #[arg(long, short)]
        output: PathBuf,
        #[arg(long)]
        columns: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Interactive picker; prints the chosen icon as JSON
    Pick {
        #[arg(long, short)]
        style: Option<IconStyle>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let resolver = IconResolver::bundled();

    match cli.command {
        Commands::Styles => {
            for style in IconStyle::ALL {
                println!("{style}\t{}", resolver.index().len(style));
            }
        }
        Commands::Search { query, style } => {
            let style = style.unwrap_or(config.default_style);
            for icon in resolver.query(query.as_deref(), style) {
                println!("{}", icon.qualified_name());
            }
        }
        Commands::Complete { prefix, style } => {
            for name in resolver.complete(&prefix, style.unwrap_or(config.default_style)) {
                println!("{name}");
            }
        }
        Commands::Resolve { selection, lenient, svg } => {
            let selection = parse_selection(&selection, lenient)?;
            let icon = resolver.resolve_selection(&selection)?;
            if svg {
                println!("{}", icon.to_svg());
            } else {
                let styles = resolver.catalog().styles_of(icon.name());
                let styles: Vec<_> = styles.iter().map(|style| style.as_str()).collect();
                println!("{}\tstyles: {}", icon.qualified_name(), styles.join(", "));
            }
        }
        Commands::Render {
            selection,
            output,
            size,
            scale,
            color,
        } => {
            let icon = resolver.resolve_selection(&parse_selection(&selection, false)?)?;
            let tint = tint(color.as_deref(), &config)?;
            let image = icon.rasterize(size.unwrap_or(config.render.size), scale, tint)?;
            save(&image.data, &output)?;
            println!(
                "{} -> {} ({}x{})",
                icon.qualified_name(),
                output.display(),
                image.data.width(),
                image.data.height()
            );
        }
        Commands::Sheet {
            query,
            style,
            output,
            columns,
            size,
            color,
        } => {
            let style = style.unwrap_or(config.default_style);
            let icons = resolver.query(query.as_deref(), style);
            if icons.is_empty() {
                bail!("no {style} icons match {:?}", query.unwrap_or_default());
            }
            let settings = GridSettings {
                columns: columns.unwrap_or(config.grid.columns),
                ..config.grid.clone()
            };
            let tint = tint(color.as_deref(), &config)?;
            let sheet = render_grid(&icons, size.unwrap_or(config.render.size), &settings, tint)?;
            save(&sheet, &output)?;
            println!("{} icons -> {}", icons.len(), output.display());
        }
        Commands::Pick { style } => {
            let config = match style {
                Some(style) => config.with_default_style(style),
                None => config,
            };
            pick::run(resolver, &config)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<PickerConfig> {
    match path {
        Some(path) => PickerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(PickerConfig::default()),
    }
}

fn parse_selection(value: &str, lenient: bool) -> Result<Selection> {
    let selection = if lenient {
        Selection::decode_lenient(value)?
    } else {
        value.parse::<Selection>()?
    };
    Ok(selection)
}

/// A tint given on the command line overrides the configured one.
fn tint(color: Option<&str>, config: &PickerConfig) -> Result<Option<Tint>> {
    match color {
        Some(color) => Ok(Some(Tint::parse(color)?)),
        None => Ok(config.render.tint()?),
    }
}

fn save(image: &image::RgbaImage, path: &Path) -> Result<()> {
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}
