//! Words an alias must never be named after

/// Control-flow keywords and builtins across bash, zsh and fish
pub const RESERVED_WORDS: &[&str] = &[
    // POSIX / bash / zsh keywords
    "if", "then", "else", "elif", "fi", "case", "esac", "for", "select", "while", "until", "do",
    "done", "in", "function", "time", "coproc",
    // fish keywords
    "begin", "end", "switch", "not", "and", "or",
    // builtins that would break the shell if shadowed
    "return", "break", "continue", "alias", "unalias", "builtin", "command", "exec", "export",
    "set", "unset", "source", "eval", "exit",
];

/// Check if a word is a shell reserved word
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_words() {
        for word in ["if", "then", "fi", "for", "end", "switch", "alias"] {
            assert!(is_reserved_word(word), "{} should be reserved", word);
        }
        assert!(!is_reserved_word("ll"));
        assert!(!is_reserved_word("If"));
    }
}
