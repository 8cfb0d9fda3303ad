//! Iconset CLI - generate an `AppIcon.appiconset` from a single image.
//!
//! Reads the icon manifest (built in, or the file named by `general.manifest`
//! in the config file), renders every listed icon from the source image and
//! writes them next to a copy of the manifest.
//!
//! # Usage
//!
//! ```bash
//! iconset -i logo.png -o ./MyApp/Assets.xcassets
//!
//! # Show skipped manifest entries and stage timings
//! iconset -i logo.png -o ./out -v
//! ```

use clap::{CommandFactory, Parser};

mod cli;
mod logging;

/// Generate every app icon size listed in an icon manifest from one image.
#[derive(Parser, Debug)]
#[command(name = "iconset")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    generate: cli::generate::GenerateArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let request = match cli.generate.into_request() {
        Ok(request) => request,
        Err(missing) => {
            println!("{missing}\n");
            println!("{}", Cli::command().render_usage());
            std::process::exit(1);
        }
    };

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match iconset_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config from {}: {e}\n  Using default configuration.",
                iconset_core::Config::default_path().display()
            );
            iconset_core::Config::default()
        }
    };
    logging::LogSettings::resolve(&config, cli.verbose).init();

    tracing::debug!("iconset v{}", iconset_core::VERSION);

    cli::generate::execute(request, &config).await
}
