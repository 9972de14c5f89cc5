//! tint CLI
//!
//! Generates theme stylesheets and inspects design tokens:
//! - `tint css`: the full stylesheet (every configuration, direction blocks,
//!   reduced motion)
//! - `tint tokens`: the flat variable map of one configuration
//! - `tint get`: token lookups by dotted path
//! - `tint dir`: text direction of a language code

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::TintConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tint_theme::{
    create_theme, detect_direction_from_language, flatten, generate_stylesheet_with,
    get_theme_color, stringify, ThemeConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tint")]
#[command(about = "Generate theme stylesheets and inspect design tokens")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Selection flags shared by commands that build one theme
#[derive(clap::Args, Debug, Default)]
struct ThemeArgs {
    /// Config file (defaults to ./tint.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Accent color family
    #[arg(long)]
    family: Option<String>,

    /// Brightness mode (light, dark, black)
    #[arg(long)]
    mode: Option<String>,

    /// Text direction (ltr, rtl)
    #[arg(long)]
    direction: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print or write the full stylesheet
    Css {
        /// Config file (defaults to ./tint.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file (overrides [output].path)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the flattened variables of one configuration
    Tokens {
        #[command(flatten)]
        theme: ThemeArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Css)]
        format: Format,

        /// Selector for the CSS block (overrides [output].selector)
        #[arg(long)]
        selector: Option<String>,
    },

    /// Look up tokens by dotted path (e.g. colors.semantic.action.primary)
    Get {
        #[command(flatten)]
        theme: ThemeArgs,

        /// Token paths
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print the text direction of a language code
    Dir {
        /// Language code (e.g. ar-EG, en-US)
        lang: String,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Css,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Css { config, out } => cmd_css(config.as_deref(), out),
        Commands::Tokens {
            theme,
            format,
            selector,
        } => cmd_tokens(&theme, format, selector),
        Commands::Get { theme, paths } => cmd_get(&theme, &paths),
        Commands::Dir { lang } => {
            println!("{}", detect_direction_from_language(&lang));
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_css(config_path: Option<&Path>, out: Option<PathBuf>) -> Result<()> {
    let config = TintConfig::load(config_path, Path::new("."))?;
    let css = generate_stylesheet_with(&config.theme);

    match out.or(config.output.path) {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, css)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("wrote stylesheet to {}", path.display());
        }
        None => print!("{css}"),
    }

    Ok(())
}

fn cmd_tokens(args: &ThemeArgs, format: Format, selector: Option<String>) -> Result<()> {
    let (theme_config, config) = resolve_theme_config(args)?;
    let vars = flatten(&create_theme(&theme_config));

    match format {
        Format::Css => {
            let selector = selector
                .or(config.output.selector)
                .unwrap_or_else(|| ":root".to_string());
            println!("{}", stringify(&vars, &selector));
        }
        Format::Json => {
            let json =
                serde_json::to_string_pretty(&vars).context("Failed to serialize tokens")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn cmd_get(args: &ThemeArgs, paths: &[String]) -> Result<()> {
    let (theme_config, _) = resolve_theme_config(args)?;
    let theme = create_theme(&theme_config);

    for path in paths {
        println!("{path} = {}", get_theme_color(&theme, path));
    }

    Ok(())
}

/// File config with command-line selection flags applied on top
fn resolve_theme_config(args: &ThemeArgs) -> Result<(ThemeConfig, TintConfig)> {
    let config = TintConfig::load(args.config.as_deref(), Path::new("."))?;
    let mut theme = config.theme.clone();

    if let Some(family) = &args.family {
        theme = theme.with_family(family.parse()?);
    }
    if let Some(mode) = &args.mode {
        theme = theme.with_mode(mode.parse()?);
    }
    if let Some(direction) = &args.direction {
        theme = theme.with_direction(direction.parse()?);
    }

    Ok((theme, config))
}
