/// 截断字符串到指定最大长度，超出部分用省略号替代
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len == 0 {
        String::new()
    } else {
        format!("{}…", s.chars().take(max_len - 1).collect::<String>())
    }
}

/// 保留字符串末尾最多 `max_len` 个字符（输入框光标跟随）
pub fn tail(s: &str, max_len: usize) -> &str {
    let count = s.chars().count();
    if count <= max_len {
        return s;
    }
    let skip = count - max_len;
    let start = s.char_indices().nth(skip).map(|(i, _)| i).unwrap_or(s.len());
    &s[start..]
}

pub mod completion_popup;
pub mod dialog_utils;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod progress_bar;
pub mod task_input;
pub mod task_list;
pub mod theme_selector;
pub mod toast;
