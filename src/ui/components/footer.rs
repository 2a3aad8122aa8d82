use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::InputMode;
use crate::theme::ThemeColors;

pub const FOOTER_HEIGHT: u16 = 3;

/// 渲染底部快捷键提示栏
pub fn render(
    frame: &mut Frame,
    area: Rect,
    mode: InputMode,
    has_items: bool,
    colors: &ThemeColors,
) {
    let shortcuts = get_shortcuts(mode, has_items);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn get_shortcuts(mode: InputMode, has_items: bool) -> Vec<(&'static str, &'static str)> {
    match mode {
        InputMode::Editing => vec![("Enter", "add"), ("Esc", "list"), ("^C", "quit")],
        InputMode::Normal if has_items => vec![
            ("i", "new"),
            ("Space", "toggle"),
            ("x", "delete"),
            ("j/k", "move"),
            ("t", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ],
        InputMode::Normal => vec![("i", "new"), ("t", "theme"), ("?", "help"), ("q", "quit")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_depend_on_mode() {
        let editing = get_shortcuts(InputMode::Editing, true);
        assert_eq!(editing[0], ("Enter", "add"));

        let normal = get_shortcuts(InputMode::Normal, true);
        assert!(normal.contains(&("x", "delete")));

        let empty = get_shortcuts(InputMode::Normal, false);
        assert!(!empty.contains(&("x", "delete")));
    }
}
