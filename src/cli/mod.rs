//! CLI 模块

pub mod config;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todo")]
#[command(version)]
#[command(about = "A small terminal to-do list")]
pub struct Cli {
    /// Theme for this run (e.g. "Dark", "Nord", "Tokyo Night")
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Seconds the "All Tasks Completed" popup stays on screen
    #[arg(long, global = true)]
    pub popup_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the to-do list (default)
    Tui,
    /// Print the resolved configuration as TOML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["todo"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["todo", "config", "--theme", "Nord", "--popup-secs", "5"])
                .unwrap();
        assert_eq!(cli.command, Some(Commands::Config));
        assert_eq!(cli.theme.as_deref(), Some("Nord"));
        assert_eq!(cli.popup_secs, Some(5));
    }

    #[test]
    fn test_invalid_popup_secs_rejected() {
        assert!(Cli::try_parse_from(["todo", "--popup-secs", "soon"]).is_err());
    }
}
