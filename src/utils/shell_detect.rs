//! Shell detection utilities

use std::path::Path;

use crate::error::{AliasError, Result};
use crate::model::ShellType;

/// Detect the calling shell from `$SHELL`
pub fn detect_shell() -> Result<ShellType> {
    let value = std::env::var("SHELL").ok();
    detect_from_shell_var(value.as_deref())
}

/// Detect shell type from the value of `$SHELL` (e.g. `/usr/bin/zsh`)
pub fn detect_from_shell_var(value: Option<&str>) -> Result<ShellType> {
    let value = value.map(str::trim).filter(|v| !v.is_empty()).ok_or_else(|| {
        AliasError::ShellDetectionFailure("SHELL environment variable is not set".to_string())
    })?;

    let name = Path::new(value)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(value)
        .trim_start_matches('-');

    name.parse::<ShellType>().map_err(|_| {
        AliasError::ShellDetectionFailure(format!("shell '{}' is not supported", name))
    })
}

/// Detect shell type from a config file name
pub fn detect_from_file(path: &Path) -> Option<ShellType> {
    let filename = path.file_name().and_then(|n| n.to_str())?;

    if filename.contains("bashrc")
        || filename.contains("bash_profile")
        || filename.contains("bash_aliases")
    {
        return Some(ShellType::Bash);
    }
    if filename.contains("zshrc") || filename.contains("zprofile") {
        return Some(ShellType::Zsh);
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some("fish") => Some(ShellType::Fish),
        Some("bash") | Some("sh") => Some(ShellType::Bash),
        Some("zsh") => Some(ShellType::Zsh),
        _ => None,
    }
}

/// Get the appropriate shell type for the current context.
///
/// Priority: specified > file name > `$SHELL`
pub fn get_shell_type(specified: Option<ShellType>, file_path: Option<&Path>) -> Result<ShellType> {
    if let Some(shell) = specified {
        return Ok(shell);
    }

    if let Some(shell) = file_path.and_then(detect_from_file) {
        return Ok(shell);
    }

    detect_shell()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_from_shell_var() {
        assert_eq!(
            detect_from_shell_var(Some("/bin/zsh")).unwrap(),
            ShellType::Zsh
        );
        assert_eq!(
            detect_from_shell_var(Some("/usr/local/bin/fish")).unwrap(),
            ShellType::Fish
        );
        assert_eq!(detect_from_shell_var(Some("-bash")).unwrap(), ShellType::Bash);
    }

    #[test]
    fn test_unsupported_shell_fails() {
        let err = detect_from_shell_var(Some("/bin/tcsh")).unwrap_err();
        assert!(matches!(err, AliasError::ShellDetectionFailure(_)));
        assert!(err.to_string().contains("not supported"));
    }

    #[test]
    fn test_missing_shell_var_fails() {
        let err = detect_from_shell_var(None).unwrap_err();
        assert!(matches!(err, AliasError::ShellDetectionFailure(_)));
        assert!(detect_from_shell_var(Some("  ")).is_err());
    }

    #[test]
    fn test_detect_from_file() {
        assert_eq!(
            detect_from_file(&PathBuf::from("/home/user/.bashrc")),
            Some(ShellType::Bash)
        );
        assert_eq!(
            detect_from_file(&PathBuf::from("/home/user/.zshrc")),
            Some(ShellType::Zsh)
        );
        assert_eq!(
            detect_from_file(&PathBuf::from("/home/user/.config/fish/config.fish")),
            Some(ShellType::Fish)
        );
        assert_eq!(detect_from_file(&PathBuf::from("/tmp/config")), None);
    }

    #[test]
    fn test_get_shell_type_specified() {
        let result = get_shell_type(Some(ShellType::Fish), Some(Path::new(".bashrc")));
        assert_eq!(result.unwrap(), ShellType::Fish);
    }
}
