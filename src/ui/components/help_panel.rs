//! 快捷键帮助面板

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::dialog_utils::center_dialog;
use crate::theme::ThemeColors;

/// 帮助面板宽度
const PANEL_WIDTH: u16 = 38;
/// 帮助面板高度
const PANEL_HEIGHT: u16 = 25;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let panel_area = center_dialog(frame.area(), PANEL_WIDTH, PANEL_HEIGHT);

    // 清除背景
    frame.render_widget(Clear, panel_area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let paragraph = Paragraph::new(build_help_lines(colors)).block(block);
    frame.render_widget(paragraph, panel_area);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        section_header("Input", colors),
        key_line("i / a / n", "Focus input", colors),
        key_line("Enter", "Add task", colors),
        key_line("Esc / Tab", "Back to list", colors),
        Line::from(""),
        section_header("List", colors),
        key_line("j / ↓", "Move down", colors),
        key_line("k / ↑", "Move up", colors),
        key_line("Space", "Toggle done", colors),
        key_line("x / d", "Delete task", colors),
        Line::from(""),
        section_header("Mouse", colors),
        key_line("[ ]", "Toggle done", colors),
        key_line("✕", "Delete task", colors),
        key_line("[ + ]", "Add task", colors),
        Line::from(""),
        section_header("Other", colors),
        key_line("t", "Theme selector", colors),
        key_line("?", "This help", colors),
        key_line("q / ^C", "Quit", colors),
        Line::from(""),
        Line::from(Span::styled(
            format!("  todo v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors.text),
        )),
        Line::from(Span::styled(
            "      Press ? or Esc to close",
            Style::default().fg(colors.muted),
        )),
    ]
}

/// 分组标题
fn section_header(title: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

/// 快捷键行
fn key_line(key: &'static str, desc: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:10}", key),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc, Style::default().fg(colors.muted)),
    ])
}
