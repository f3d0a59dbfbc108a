//! Shell dialects and their configuration file locations

use std::env;
use std::path::{Path, PathBuf};

use crate::error::AliasError;

/// Supported shell dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

impl ShellType {
    pub const ALL: [ShellType; 3] = [ShellType::Bash, ShellType::Zsh, ShellType::Fish];

    /// Get shell name as string
    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
        }
    }

    /// Get the default configuration file path for this shell, using the
    /// current user's home directory and environment
    pub fn default_config_path(&self) -> PathBuf {
        ConfigLocator::from_env().resolve(*self)
    }

    /// Command the user runs to reload the configuration file
    pub fn reload_command(&self, config_file: &Path) -> String {
        // `source` works in all three dialects
        format!("source {}", config_file.display())
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ShellType {
    type Err = AliasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            "fish" => Ok(ShellType::Fish),
            _ => Err(AliasError::UnsupportedDialect(s.to_string())),
        }
    }
}

/// Resolves the startup file of each shell relative to a home directory.
///
/// Rules:
/// - bash: first existing of `.bash_profile`, `.bashrc`; default `.bashrc`
/// - zsh: `$ZDOTDIR/.zshrc`, else `~/.zshrc`
/// - fish: `$XDG_CONFIG_HOME/fish/config.fish`, else `~/.config/fish/config.fish`
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    pub home: PathBuf,
    pub xdg_config_home: Option<PathBuf>,
    pub zdotdir: Option<PathBuf>,
}

impl ConfigLocator {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            xdg_config_home: None,
            zdotdir: None,
        }
    }

    pub fn from_env() -> Self {
        let non_empty = |key: &str| {
            env::var_os(key)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };

        Self {
            home: dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")),
            xdg_config_home: non_empty("XDG_CONFIG_HOME"),
            zdotdir: non_empty("ZDOTDIR"),
        }
    }

    /// Candidate files in priority order; the first existing one wins
    pub fn candidates(&self, shell: ShellType) -> Vec<PathBuf> {
        match shell {
            ShellType::Bash => vec![
                self.home.join(".bash_profile"),
                self.home.join(".bashrc"),
            ],
            ShellType::Zsh => {
                let dir = self.zdotdir.as_ref().unwrap_or(&self.home);
                vec![dir.join(".zshrc")]
            }
            ShellType::Fish => {
                let config_home = self
                    .xdg_config_home
                    .clone()
                    .unwrap_or_else(|| self.home.join(".config"));
                vec![config_home.join("fish").join("config.fish")]
            }
        }
    }

    /// Resolve the config path for a shell
    pub fn resolve(&self, shell: ShellType) -> PathBuf {
        let candidates = self.candidates(shell);
        if let Some(existing) = candidates.iter().find(|p| p.is_file()) {
            return existing.clone();
        }

        match shell {
            ShellType::Bash => self.home.join(".bashrc"),
            ShellType::Zsh | ShellType::Fish => candidates
                .into_iter()
                .next()
                .unwrap_or_else(|| self.home.join(".profile")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_shell_type_name() {
        assert_eq!(ShellType::Bash.name(), "bash");
        assert_eq!(ShellType::Zsh.name(), "zsh");
        assert_eq!(ShellType::Fish.name(), "fish");
    }

    #[test]
    fn test_shell_type_from_str() {
        assert_eq!("bash".parse::<ShellType>().unwrap(), ShellType::Bash);
        assert_eq!("ZSH".parse::<ShellType>().unwrap(), ShellType::Zsh);
        assert_eq!("fish".parse::<ShellType>().unwrap(), ShellType::Fish);
    }

    #[test]
    fn test_unknown_shell_rejected_at_parse() {
        let err = "tcsh".parse::<ShellType>().unwrap_err();
        assert!(matches!(err, AliasError::UnsupportedDialect(ref s) if s == "tcsh"));
    }

    #[test]
    fn test_bash_prefers_bash_profile() {
        let home = tempdir().unwrap();
        let locator = ConfigLocator::new(home.path());
        std::fs::write(home.path().join(".bashrc"), "").unwrap();
        std::fs::write(home.path().join(".bash_profile"), "").unwrap();

        assert_eq!(
            locator.resolve(ShellType::Bash),
            home.path().join(".bash_profile")
        );

        std::fs::remove_file(home.path().join(".bash_profile")).unwrap();
        assert_eq!(locator.resolve(ShellType::Bash), home.path().join(".bashrc"));
    }

    #[test]
    fn test_bash_default_when_nothing_exists() {
        let home = tempdir().unwrap();
        let locator = ConfigLocator::new(home.path());
        assert_eq!(locator.resolve(ShellType::Bash), home.path().join(".bashrc"));
    }

    #[test]
    fn test_zsh_and_fish_paths() {
        let home = tempdir().unwrap();
        let mut locator = ConfigLocator::new(home.path());

        assert_eq!(locator.resolve(ShellType::Zsh), home.path().join(".zshrc"));
        assert_eq!(
            locator.resolve(ShellType::Fish),
            home.path().join(".config").join("fish").join("config.fish")
        );

        locator.zdotdir = Some(home.path().join("zdot"));
        locator.xdg_config_home = Some(home.path().join("xdg"));
        assert_eq!(
            locator.resolve(ShellType::Zsh),
            home.path().join("zdot").join(".zshrc")
        );
        assert_eq!(
            locator.resolve(ShellType::Fish),
            home.path().join("xdg").join("fish").join("config.fish")
        );
    }
}
