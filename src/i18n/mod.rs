//! Internationalization (i18n) module for aliaser
//!
//! Provides English and Traditional Chinese UI messages. Placeholders are
//! `{}` and are filled in order with `replacen`.

mod en;
mod zh_tw;

use std::str::FromStr;
use std::sync::OnceLock;

/// All translatable messages in the application
#[derive(Debug, Clone)]
pub struct Messages {
    // === General ===
    pub no_aliases_found: &'static str,
    pub total_aliases: &'static str,
    pub cancelled: &'static str,

    // === Headers ===
    pub header_name: &'static str,
    pub header_command: &'static str,

    // === Create/Delete/Update ===
    pub alias_created: &'static str,
    pub alias_exists: &'static str,
    pub alias_not_found: &'static str,
    pub alias_deleted: &'static str,
    pub alias_updated: &'static str,

    // === Clear ===
    pub clear_prompt: &'static str,
    pub aliases_cleared: &'static str,

    // === Import/Export ===
    pub exported_aliases: &'static str,
    pub import_summary: &'static str,
    pub import_line_failed: &'static str,
    pub import_line_skipped: &'static str,
    pub import_ignored_lines: &'static str,

    // === Backup ===
    pub backup_restored: &'static str,
    pub backup_not_found: &'static str,
    pub backups_cleaned: &'static str,
    pub no_backups_found: &'static str,
    pub backup_list_header: &'static str,
    pub restore_prompt: &'static str,

    // === Reload Hint ===
    pub reload_hint: &'static str,
}

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    TraditionalChinese,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "english" => Ok(Language::English),
            "zh-tw" | "zh-hant" | "zh" => Ok(Language::TraditionalChinese),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

static MESSAGES: OnceLock<&'static Messages> = OnceLock::new();

/// Messages for a language, without touching the global selection
pub fn messages_for(lang: Language) -> &'static Messages {
    match lang {
        Language::English => en::messages(),
        Language::TraditionalChinese => zh_tw::messages(),
    }
}

/// Select the UI language. The first call wins.
pub fn init_messages(lang: Language) -> &'static Messages {
    MESSAGES.get_or_init(|| messages_for(lang))
}
