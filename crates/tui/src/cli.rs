//! Command line arguments.
//!
//! CLI flags take precedence over environment variables and `.env` values;
//! anything not given here falls back to `gear-config` loading.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "gear-tui",
    about = "Terminal UI for the GearTracker inventory service",
    version
)]
pub struct Cli {
    /// Base URL of the GearTracker server (overrides GEAR_BASE_URL).
    #[arg(long)]
    pub base_url: Option<String>,

    /// Rows per page at startup (overrides GEAR_PAGE_SIZE).
    #[arg(long)]
    pub page_size: Option<u64>,

    /// Directory for log files.
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse capture (useful for terminal-native text selection).
    #[arg(long)]
    pub no_mouse: bool,

    /// UI tick interval in milliseconds (spinner and toast timing).
    #[arg(long, default_value_t = gear_config::constants::DEFAULT_UI_TICK_MS)]
    pub tick_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_config_to_the_loader() {
        let cli = Cli::parse_from(["gear-tui"]);
        assert!(cli.base_url.is_none());
        assert!(cli.page_size.is_none());
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
        assert!(!cli.no_mouse);
        assert_eq!(cli.tick_ms, 250);
    }

    #[test]
    fn overrides_are_parsed() {
        let cli = Cli::parse_from([
            "gear-tui",
            "--base-url",
            "http://gear.example:9000",
            "--page-size",
            "50",
            "--no-mouse",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://gear.example:9000"));
        assert_eq!(cli.page_size, Some(50));
        assert!(cli.no_mouse);
    }
}
