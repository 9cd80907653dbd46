//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Terminal user management.
#[derive(Debug, Parser)]
#[command(name = "usermgmt")]
#[command(version)]
#[command(about = "Browse, add, edit and delete users from the terminal")]
pub struct Cli {
    #[arg(
        long,
        env = "USERMGMT_CONFIG_DIR",
        default_value = "config",
        help = "Directory holding default.toml and its overrides"
    )]
    pub config_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_flag() {
        let cli = Cli::try_parse_from(["usermgmt", "--config-dir", "/etc/usermgmt"]).unwrap();
        assert_eq!(cli.config_dir, PathBuf::from("/etc/usermgmt"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["usermgmt", "--port", "80"]).is_err());
    }
}
