use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Flags that can be persisted as defaults in a config file.
///
/// File flags and CLI flags merge with [`ConfigFlags::union`]; the CLI
/// side wins for valued options.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_gutter: bool,
    pub readonly: bool,
    pub log: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_gutter: self.no_gutter || other.no_gutter,
            readonly: self.readonly || other.readonly,
            log: other.log.clone().or_else(|| self.log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("scrawl").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("scrawl")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("scrawl").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("scrawl")
                .join("config");
        }
    }

    PathBuf::from(".scrawlrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".scrawlrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# scrawl defaults (saved with --save)".to_string());
    if flags.no_gutter {
        lines.push("--no-gutter".to_string());
    }
    if flags.readonly {
        lines.push("--readonly".to_string());
    }
    if let Some(log) = &flags.log {
        lines.push(format!("--log {}", log.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--no-gutter" {
            flags.no_gutter = true;
        } else if token == "--readonly" {
            flags.readonly = true;
        } else if token == "--log" {
            if let Some(next) = tokens.get(i + 1) {
                flags.log = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--log=") {
            flags.log = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}
