//! Traditional Chinese (zh-TW) language messages

use super::Messages;
use std::sync::OnceLock;

static ZH_TW_MESSAGES: OnceLock<Messages> = OnceLock::new();

pub fn messages() -> &'static Messages {
    ZH_TW_MESSAGES.get_or_init(|| Messages {
        // === General ===
        no_aliases_found: "找不到任何別名。",
        total_aliases: "總計：{} 個別名",
        cancelled: "已取消。",

        // === Headers ===
        header_name: "名稱",
        header_command: "指令",

        // === Create/Delete/Update ===
        alias_created: "已建立別名 '{}' = '{}'",
        alias_exists: "別名 '{}' 已存在（使用 --force 覆寫）",
        alias_not_found: "找不到別名 '{}'",
        alias_deleted: "已刪除別名 '{}'",
        alias_updated: "已更新別名 '{}' = '{}'",

        // === Clear ===
        clear_prompt: "要移除 {} 中所有受管理的別名嗎？",
        aliases_cleared: "已移除 {} 個別名",

        // === Import/Export ===
        exported_aliases: "已匯出 {} 個別名至 {}",
        import_summary: "已匯入 {}，跳過 {}，失敗 {}",
        import_line_failed: "第 {} 行：{}",
        import_line_skipped: "第 {} 行：'{}' 已存在，已跳過",
        import_ignored_lines: "已忽略 {} 行沒有 '=' 的內容",

        // === Backup ===
        backup_restored: "已將備份 {} 還原至 {}",
        backup_not_found: "找不到備份：{}",
        backups_cleaned: "已移除 {} 個舊備份",
        no_backups_found: "找不到任何備份。",
        backup_list_header: "可用的備份：",
        restore_prompt: "要還原此備份嗎？目前的檔案會先被備份。",

        // === Reload Hint ===
        reload_hint: "執行 '{}' 以套用變更",
    })
}
