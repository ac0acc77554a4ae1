//! Scrawl - a small modal terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! scrawl notes.txt
//! scrawl --readonly /var/log/syslog
//! scrawl            # start with an empty, unnamed buffer
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use scrawl::app::App;
use scrawl::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};

/// A small modal terminal text editor
#[derive(Parser, Debug)]
#[command(name = "scrawl", version, about, long_about = None)]
struct Cli {
    /// File to edit (omit to start an empty buffer)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Hide the line-number gutter
    #[arg(long)]
    no_gutter: bool,

    /// Open read-only (navigation commands only)
    #[arg(long)]
    readonly: bool,

    /// Write tracing output to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Save current flags as defaults in the config file
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(log_path: Option<&std::path::Path>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    if let Some(path) = log_path {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log.as_deref())?;

    // A path that names a directory cannot be edited; a path that does
    // not exist yet simply starts empty.
    if let Some(path) = &cli.file {
        if path.is_dir() {
            anyhow::bail!("{} is a directory", path.display());
        }
    }

    let mut app = App::new(cli.file)
        .with_gutter(!effective.no_gutter)
        .with_readonly(effective.readonly);

    app.run().context("Application error")
}
