//! Lookup of executables on the search path

/// Answers whether a name resolves to a command on the execution search path
pub trait CommandLookup {
    fn command_exists(&self, name: &str) -> bool;
}

/// Searches `$PATH` using the `which` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchPathLookup;

impl CommandLookup for SearchPathLookup {
    fn command_exists(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }
}

/// Fixed list of known commands; never touches the filesystem
#[derive(Debug, Default, Clone)]
pub struct StaticLookup {
    commands: Vec<String>,
}

impl StaticLookup {
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }
}

impl CommandLookup for StaticLookup {
    fn command_exists(&self, name: &str) -> bool {
        self.commands.iter().any(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_lookup() {
        let lookup = StaticLookup::new(["ls", "git"]);
        assert!(lookup.command_exists("ls"));
        assert!(!lookup.command_exists("ll"));
    }

    #[test]
    fn test_search_path_rejects_nonsense() {
        assert!(!SearchPathLookup.command_exists("aliaser-definitely-not-a-command-42"));
    }
}
