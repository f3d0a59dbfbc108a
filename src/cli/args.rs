//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::ShellType;

#[derive(Parser)]
#[command(name = "aliaser")]
#[command(about = "Manage shell aliases in a dedicated section of your shell config")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to manage instead of the shell's default
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Shell dialect (detected from the file name or $SHELL when omitted)
    #[arg(short, long, global = true)]
    pub shell: Option<ShellArg>,

    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new alias
    #[command(visible_alias = "add")]
    Create {
        /// Alias name
        name: String,
        /// Command the alias expands to
        command: String,
        /// Overwrite an existing alias
        #[arg(long)]
        force: bool,
    },

    /// List managed aliases
    #[command(visible_alias = "ls")]
    List,

    /// Delete an alias
    #[command(visible_alias = "rm")]
    Delete {
        /// Alias name
        name: String,
    },

    /// Change the command of an existing alias
    Update {
        /// Alias name
        name: String,
        /// New command
        command: String,
    },

    /// Export aliases as name=command lines
    Export {
        /// Output file
        #[arg(short, long, default_value = "aliases.txt")]
        output: PathBuf,
    },

    /// Import aliases from a file or URL
    Import {
        /// File path or URL
        source: String,
        /// Overwrite aliases that already exist
        #[arg(long)]
        force: bool,
    },

    /// Remove every managed alias
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the command that reloads the config file
    Source,

    /// Print the config file being managed
    Path,

    /// Backup management
    Backup {
        #[command(subcommand)]
        backup_command: BackupCommands,
    },
}

#[derive(Subcommand)]
pub enum BackupCommands {
    /// List backups
    List,
    /// Restore a backup
    Restore {
        /// Backup ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Clean old backups
    Clean {
        /// Number to keep
        #[arg(long, default_value = "20")]
        keep: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ShellArg {
    Bash,
    Zsh,
    Fish,
}

impl From<ShellArg> for ShellType {
    fn from(arg: ShellArg) -> Self {
        match arg {
            ShellArg::Bash => ShellType::Bash,
            ShellArg::Zsh => ShellType::Zsh,
            ShellArg::Fish => ShellType::Fish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_with_globals() {
        let cli = Cli::try_parse_from([
            "aliaser", "create", "ll", "ls -la", "--force", "--shell", "zsh", "-f", "/tmp/rc",
        ])
        .unwrap();

        assert!(matches!(cli.shell, Some(ShellArg::Zsh)));
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/rc")));
        match cli.command {
            Commands::Create {
                name,
                command,
                force,
            } => {
                assert_eq!(name, "ll");
                assert_eq!(command, "ls -la");
                assert!(force);
            }
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn test_export_default_output() {
        let cli = Cli::try_parse_from(["aliaser", "export"]).unwrap();
        match cli.command {
            Commands::Export { output } => assert_eq!(output, PathBuf::from("aliases.txt")),
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_unknown_shell_rejected() {
        assert!(Cli::try_parse_from(["aliaser", "list", "--shell", "tcsh"]).is_err());
    }
}
