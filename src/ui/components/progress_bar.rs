use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::store::Progress;
use crate::theme::ThemeColors;

pub const PROGRESS_HEIGHT: u16 = 3;

/// 渲染进度条，列表为空时为 0%
pub fn render(frame: &mut Frame, area: Rect, progress: &Progress, colors: &ThemeColors) {
    let label = Span::styled(
        format!("{}%", progress.percent()),
        Style::default()
            .fg(colors.text)
            .add_modifier(Modifier::BOLD),
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(Span::styled(" Progress ", Style::default().fg(colors.muted))),
        )
        .gauge_style(Style::default().fg(colors.progress).bg(colors.bg_secondary))
        .ratio(progress.progress_ratio.clamp(0.0, 1.0))
        .label(label)
        .use_unicode(true);

    frame.render_widget(gauge, area);
}
