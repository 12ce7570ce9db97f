//! Command-line interface for the hanoi binary.

use crate::config::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;
use strictly_hanoi::PlacementPolicy;

/// Towers of Hanoi - move every disk from Start to Finish
#[derive(Parser, Debug)]
#[command(name = "hanoi")]
#[command(about = "Terminal Towers of Hanoi", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Player name (prompted for when missing)
    pub player_name: Option<String>,

    /// Number of disks, clamped to 1-6 (prompted for when missing or not a number)
    #[arg(allow_negative_numbers = true)]
    pub disks: Option<String>,

    /// Path to the TOML config file
    #[arg(short, long, default_value = "hanoi.toml")]
    pub config: PathBuf,

    /// Placement policy: strict refuses a disk on a smaller one
    #[arg(long)]
    pub policy: Option<PlacementPolicy>,

    /// Target frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Write the results report as JSON to this path
    #[arg(long)]
    pub results: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Flags that override config file values.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            placement_policy: self.policy,
            frame_rate: self.fps,
            results_path: self.results.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launcher_style_arguments() {
        let cli = Cli::try_parse_from(["hanoi", "Ada", "4"]).unwrap();
        assert_eq!(cli.player_name.as_deref(), Some("Ada"));
        assert_eq!(cli.disks.as_deref(), Some("4"));
        assert_eq!(cli.config, PathBuf::from("hanoi.toml"));
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["hanoi"]).unwrap();
        assert!(cli.player_name.is_none());
        assert!(cli.disks.is_none());
        assert_eq!(cli.overrides(), ConfigOverrides::default());
    }

    #[test]
    fn test_negative_disk_count_is_accepted_for_clamping() {
        let cli = Cli::try_parse_from(["hanoi", "Ada", "-2"]).unwrap();
        assert_eq!(cli.disks.as_deref(), Some("-2"));
    }

    #[test]
    fn test_malformed_disk_count_reaches_startup() {
        let cli = Cli::try_parse_from(["hanoi", "Ada", "four"]).unwrap();
        assert_eq!(cli.disks.as_deref(), Some("four"));
        let cli = Cli::try_parse_from(["hanoi", "Ada", "99999999999999999999"]).unwrap();
        assert_eq!(cli.disks.as_deref(), Some("99999999999999999999"));
    }

    #[test]
    fn test_flags_become_overrides() {
        let cli = Cli::try_parse_from([
            "hanoi",
            "--policy",
            "permissive",
            "--fps",
            "30",
            "--results",
            "out.json",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.placement_policy, Some(PlacementPolicy::Permissive));
        assert_eq!(overrides.frame_rate, Some(30));
        assert_eq!(overrides.results_path, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(Cli::try_parse_from(["hanoi", "--policy", "lenient"]).is_err());
    }
}
