//! Alias entries and the ordered alias set read from a managed section

/// A single alias definition, with the command in its unescaped form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub command: String,
}

impl Alias {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

/// Ordered mapping of alias name to command.
///
/// Order mirrors the line order inside the managed section. Inserting a name
/// that is already present replaces its command but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasSet {
    entries: Vec<Alias>,
}

impl AliasSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, command: impl Into<String>) {
        let name = name.into();
        let command = command.into();
        match self.entries.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.command = command,
            None => self.entries.push(Alias { name, command }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.command.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Alias> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|a| a.name.as_str())
    }
}

impl<'a> IntoIterator for &'a AliasSet {
    type Item = &'a Alias;
    type IntoIter = std::slice::Iter<'a, Alias>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Alias> for AliasSet {
    fn from_iter<T: IntoIterator<Item = Alias>>(iter: T) -> Self {
        let mut set = AliasSet::new();
        for alias in iter {
            set.insert(alias.name, alias.command);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut set = AliasSet::new();
        set.insert("c", "3");
        set.insert("a", "1");
        set.insert("b", "2");
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut set = AliasSet::new();
        set.insert("a", "1");
        set.insert("b", "2");
        set.insert("a", "updated");
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("a"), Some("updated"));
        assert_eq!(set.names().next(), Some("a"));
    }
}
