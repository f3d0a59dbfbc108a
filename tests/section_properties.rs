//! Library-level checks of the managed section invariants across dialects

use aliaser::section::{locate, SectionManager, SECTION_END, SECTION_START};
use aliaser::utils::command_lookup::StaticLookup;
use aliaser::{AliasNameValidator, ShellType};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const COMMANDS: &[&str] = &[
    "ls -la",
    "echo \"double\" 'single'",
    r"printf 'a\tb\n'",
    "git log --format='%h %s' | head -n 5",
    "cd ~/projects && $EDITOR .",
    "echo naïve ✓",
];

fn manager(shell: ShellType, path: &Path) -> SectionManager {
    SectionManager::new(shell, path)
        .with_validator(AliasNameValidator::new(Box::new(StaticLookup::new(["ls"]))))
}

fn rc_name(shell: ShellType) -> &'static str {
    match shell {
        ShellType::Bash => ".bashrc",
        ShellType::Zsh => ".zshrc",
        ShellType::Fish => "config.fish",
    }
}

#[test]
fn commands_round_trip_in_every_dialect() {
    for shell in ShellType::ALL {
        let dir = tempdir().unwrap();
        let mgr = manager(shell, &dir.path().join(rc_name(shell)));

        for (i, command) in COMMANDS.iter().enumerate() {
            assert!(mgr.add_alias(&format!("a{}", i), command, false).unwrap());
        }

        let aliases = mgr.get_all_aliases().unwrap();
        assert_eq!(aliases.len(), COMMANDS.len(), "{}", shell);
        for (i, command) in COMMANDS.iter().enumerate() {
            assert_eq!(
                aliases.get(&format!("a{}", i)),
                Some(*command),
                "{} lost {:?}",
                shell,
                command
            );
        }
    }
}

#[test]
fn aliases_keep_insertion_order() {
    let dir = tempdir().unwrap();
    let mgr = manager(ShellType::Zsh, &dir.path().join(".zshrc"));

    for name in ["zeta", "alpha", "mid"] {
        mgr.add_alias(name, "echo", false).unwrap();
    }
    mgr.update_alias("alpha", "echo changed").unwrap();

    let names: Vec<_> = mgr
        .get_all_aliases()
        .unwrap()
        .names()
        .map(String::from)
        .collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn forced_add_never_duplicates() {
    for shell in ShellType::ALL {
        let dir = tempdir().unwrap();
        let path = dir.path().join(rc_name(shell));
        let mgr = manager(shell, &path);

        for command in COMMANDS {
            mgr.add_alias("dup", command, true).unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        let declarations = content
            .lines()
            .filter(|l| l.starts_with("alias dup"))
            .count();
        assert_eq!(declarations, 1, "{}", shell);
        assert_eq!(
            mgr.get_all_aliases().unwrap().get("dup"),
            COMMANDS.last().copied()
        );
    }
}

#[test]
fn repeated_mutations_keep_a_single_section() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".bashrc");
    let mgr = manager(ShellType::Bash, &path);

    mgr.add_alias("one", "echo 1", false).unwrap();
    mgr.remove_alias("one").unwrap();
    mgr.add_alias("two", "echo 2", false).unwrap();
    mgr.clear_aliases().unwrap();
    mgr.add_alias("three", "echo 3", false).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.matches(SECTION_START).count(), 1);
    assert_eq!(content.matches(SECTION_END).count(), 1);
    assert!(locate(&content).unwrap().is_some());
}

#[test]
fn content_outside_section_is_untouched() {
    let before = "# user prelude\nexport PATH=\"$HOME/bin:$PATH\"\nalias ll='ls -l'\n\n";
    let after = "\n# user epilogue\nfunction greet() { echo hi; }";

    for shell in ShellType::ALL {
        let dir = tempdir().unwrap();
        let path = dir.path().join(rc_name(shell));
        fs::write(
            &path,
            format!("{}{}\n{}\n{}", before, SECTION_START, SECTION_END, after),
        )
        .unwrap();
        let mgr = manager(shell, &path);

        mgr.add_alias("a", "echo a", false).unwrap();
        mgr.add_alias("b", "echo b", false).unwrap();
        mgr.update_alias("a", "echo A").unwrap();
        mgr.remove_alias("b").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(&format!("{}{}\n", before, SECTION_START)), "{}", shell);
        assert!(content.ends_with(&format!("{}\n{}", SECTION_END, after)), "{}", shell);

        mgr.clear_aliases().unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("{}{}\n{}\n{}", before, SECTION_START, SECTION_END, after)
        );
    }
}

#[test]
fn aliases_outside_section_are_invisible() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".zshrc");
    fs::write(
        &path,
        format!("alias gs=\"git status\"\n{}\n{}\n", SECTION_START, SECTION_END),
    )
    .unwrap();
    let mgr = manager(ShellType::Zsh, &path);

    assert!(mgr.get_all_aliases().unwrap().is_empty());
    assert!(!mgr.remove_alias("gs").unwrap());
    assert!(!mgr.update_alias("gs", "git stash").unwrap());
    assert!(mgr.add_alias("gs", "git stash", false).unwrap());

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("alias gs=\"git status\"\n"));
    assert_eq!(mgr.get_all_aliases().unwrap().get("gs"), Some("git stash"));
}

#[test]
fn reads_do_not_modify_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".bashrc");
    fs::write(&path, "export A=1").unwrap();
    let mgr = manager(ShellType::Bash, &path);

    assert!(mgr.get_all_aliases().unwrap().is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "export A=1");
}
