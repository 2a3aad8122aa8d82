use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::store::Progress;
use crate::theme::ThemeColors;

/// Header 总高度：上下边框 + 标题行
pub const HEADER_HEIGHT: u16 = 3;

/// 渲染顶部标题栏（标题 + 完成计数）
pub fn render(frame: &mut Frame, area: Rect, progress: &Progress, colors: &ThemeColors) {
    let counter = Line::from(Span::styled(
        format!(" {}/{} done ", progress.completed_count, progress.total_count),
        Style::default().fg(colors.muted),
    ))
    .right_aligned();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(counter);

    let title = Line::from(vec![
        Span::styled("My ", Style::default().fg(colors.text)),
        Span::styled(
            "ToDo",
            Style::default()
                .fg(colors.logo)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" App", Style::default().fg(colors.text)),
    ]);

    let paragraph = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
