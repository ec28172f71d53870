//! Command-line plumbing shared by the demo binaries: log file setup and
//! loading a [`MenuConfig`] from JSON.

use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Args;
use scrollmenu::MenuConfig;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Options every demo accepts.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Write a log to this file (the terminal belongs to the menu).
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Log level for --log.
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,

    /// JSON file with menu settings (scroll speed, keys, style).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CommonArgs {
    /// Install the file logger, if one was asked for.
    pub fn init_logging(&self) -> Result<(), Box<dyn Error>> {
        let Some(path) = &self.log else {
            return Ok(());
        };
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        WriteLogger::init(self.log_level, log_config, File::create(path)?)?;
        log::info!("logging to {}", path.display());
        Ok(())
    }

    /// The menu configuration: defaults, overridden by `--config`.
    pub fn menu_config(&self) -> Result<MenuConfig, Box<dyn Error>> {
        match &self.config {
            Some(path) => load_config(path),
            None => Ok(MenuConfig::default()),
        }
    }
}

/// Read a [`MenuConfig`] from a JSON file. Missing fields keep their
/// defaults.
pub fn load_config(path: &Path) -> Result<MenuConfig, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&text)?;
    log::debug!("loaded menu config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use scrollmenu_core::{Color, Key};

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::try_parse_from(["demo"]).unwrap();
        assert!(cli.common.log.is_none());
        assert_eq!(cli.common.log_level, LevelFilter::Debug);
        assert_eq!(cli.common.menu_config().unwrap(), MenuConfig::default());
    }

    #[test]
    fn log_level_is_parsed() {
        let cli = Cli::try_parse_from(["demo", "--log", "x.log", "--log-level", "trace"]).unwrap();
        assert_eq!(cli.common.log.as_deref(), Some(Path::new("x.log")));
        assert_eq!(cli.common.log_level, LevelFilter::Trace);
    }

    #[test]
    fn config_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("scrollmenu-cfg-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{
                "scroll_speed_ms": 60,
                "keys": {"down": ["ArrowDown", {"Char": "j"}]},
                "style": {"selected": {"fg": "black", "bg": "yellow"}}
            }"#,
        )
        .unwrap();
        let cfg = load_config(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(cfg.scroll_speed_ms, 60);
        assert_eq!(cfg.keys.down, vec![Key::ArrowDown, Key::Char('j')]);
        assert_eq!(cfg.keys.up, vec![Key::ArrowUp]);
        assert_eq!(cfg.style.selected.fg, Color::Black);
        assert_eq!(cfg.style.selected.bg, Color::Yellow);
        assert_eq!(cfg.style.select_open, '>');
    }

    #[test]
    fn missing_config_file_is_an_error() {
        assert!(load_config(Path::new("/nonexistent/scrollmenu.json")).is_err());
    }
}
