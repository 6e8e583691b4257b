pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "linkcaster")]
#[command(about = "Discovers content links and posts them to X", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/linkcaster/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding history, trusted domains and blacklist
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot once: discover, filter, fetch and post
    Run {
        /// Post for real, overriding safe_mode
        #[arg(long, conflicts_with = "safe")]
        live: bool,

        /// Only log what would be posted
        #[arg(long)]
        safe: bool,

        /// Maximum posts for this run
        #[arg(long)]
        cap: Option<usize>,

        /// Disable off days and pre-post delays
        #[arg(long)]
        no_pacing: bool,
    },
    /// Show store locations and counts
    Status,
    /// List URLs in the history
    History {
        /// Show only the most recent N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List built-in and learned trusted domains
    Trusted,
    /// Inspect or edit the domain blacklist
    Blacklist {
        #[command(subcommand)]
        action: BlacklistAction,
    },
}

#[derive(Subcommand)]
pub enum BlacklistAction {
    /// List blacklisted domains
    List,
    /// Blacklist a domain
    Add {
        /// Domain, e.g. "example.com"
        domain: String,
    },
    /// Remove a domain from the blacklist
    Remove {
        /// Domain, e.g. "example.com"
        domain: String,
    },
}

/// Flags of `run` that override the loaded configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOverrides {
    pub live: bool,
    pub safe: bool,
    pub cap: Option<usize>,
    pub no_pacing: bool,
}

impl RunOverrides {
    pub fn apply(&self, config: &mut Config) {
        if self.live {
            config.bot.safe_mode = false;
        }
        if self.safe {
            config.bot.safe_mode = true;
        }
        if let Some(cap) = self.cap {
            config.bot.daily_post_cap = cap;
        }
        if self.no_pacing {
            config.pacing = Default::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_flags() {
        let cli = Cli::try_parse_from(["linkcaster", "run", "--live", "--cap", "1"]).unwrap();
        match cli.command {
            Commands::Run {
                live, safe, cap, ..
            } => {
                assert!(live);
                assert!(!safe);
                assert_eq!(cap, Some(1));
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_live_and_safe_conflict() {
        assert!(Cli::try_parse_from(["linkcaster", "run", "--live", "--safe"]).is_err());
    }

    #[test]
    fn test_global_data_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["linkcaster", "status", "--data-dir", "/tmp/lc"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/lc")));
    }

    #[test]
    fn test_blacklist_add() {
        let cli = Cli::try_parse_from(["linkcaster", "blacklist", "add", "spam.com"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Blacklist {
                action: BlacklistAction::Add { ref domain }
            } if domain == "spam.com"
        ));
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = Config::default();
        config.pacing.off_day_chance = 0.15;

        RunOverrides {
            live: true,
            cap: Some(1),
            no_pacing: true,
            ..Default::default()
        }
        .apply(&mut config);

        assert!(!config.bot.safe_mode);
        assert_eq!(config.bot.daily_post_cap, 1);
        assert_eq!(config.pacing.off_day_chance, 0.0);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let mut config = Config::default();
        config.bot.safe_mode = false;
        RunOverrides::default().apply(&mut config);
        assert!(!config.bot.safe_mode);
        assert_eq!(config.bot.daily_post_cap, 3);
    }
}
