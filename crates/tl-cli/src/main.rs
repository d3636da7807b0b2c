use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tl_cli::commands::{entries, render};
use tl_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match &cli.command {
        Some(Commands::Render {
            projects,
            out,
            width,
            height,
            padding,
        }) => {
            let config =
                Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
            tracing::debug!(?config, "loaded configuration");

            let mut layout = config.layout;
            if let Some(width) = width {
                layout.width = *width;
            }
            if let Some(height) = height {
                layout.height = *height;
            }
            if let Some(padding) = padding {
                layout.padding = *padding;
            }

            match out {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    let mut writer = BufWriter::new(file);
                    render::run(&mut writer, projects, &layout)?;
                    writer.flush()?;
                }
                None => {
                    let stdout = std::io::stdout();
                    render::run(&mut stdout.lock(), projects, &layout)?;
                }
            }
        }
        Some(Commands::Entries { projects, json }) => {
            // Entries inspection doesn't need config - layout never applies
            let stdout = std::io::stdout();
            entries::run(&mut stdout.lock(), projects, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
