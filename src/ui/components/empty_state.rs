use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染空列表提示
pub fn render(frame: &mut Frame, area: Rect, editing: bool, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(Span::styled(" Tasks ", Style::default().fg(colors.muted)));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hint = if editing {
        Line::from(vec![
            Span::styled("Type a task and press ", Style::default().fg(colors.text)),
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.text)),
            Span::styled(
                " i ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("to add a task", Style::default().fg(colors.text)),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("No tasks yet", Style::default().fg(colors.muted))),
        Line::from(""),
        hint,
    ];

    // 垂直居中
    let y_offset = inner.height.saturating_sub(lines.len() as u16) / 2;
    let centered = Rect {
        x: inner.x,
        y: inner.y + y_offset,
        width: inner.width,
        height: inner.height.saturating_sub(y_offset),
    };

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}
