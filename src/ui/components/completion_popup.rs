//! "全部完成" 弹窗

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};
use crate::theme::ThemeColors;

const POPUP_WIDTH: u16 = 44;
const POPUP_HEIGHT: u16 = 8;

pub fn render(frame: &mut Frame, title: &str, colors: &ThemeColors) {
    let area = center_dialog(frame.area(), POPUP_WIDTH, POPUP_HEIGHT);
    let inner = render_dialog_frame(frame, area, "", colors.celebrate, colors);

    let [_, title_area, _, message_area, _, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let heading = Paragraph::new(Line::from(Span::styled(
        format!("🎉 {} 🎉", title),
        Style::default()
            .fg(colors.celebrate)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, title_area);

    let message = Paragraph::new(Span::styled(
        "Great job! Keep up the productivity!",
        Style::default().fg(colors.text),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(message, message_area);

    render_hint(frame, hint_area, &[("any key", "close")], colors);
}
