//! 任务输入框 + 添加按钮

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::tail;
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

pub const INPUT_HEIGHT: u16 = 3;

const PLACEHOLDER: &str = "Add a new task...";
const ADD_BUTTON: &str = "[ + ]";

pub fn render(
    frame: &mut Frame,
    area: Rect,
    draft: &str,
    editing: bool,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let border_color = if editing {
        colors.highlight
    } else {
        colors.border
    };

    let [input_area, button_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(7)]).areas(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(input_area);
    frame.render_widget(block, input_area);

    let line = if draft.is_empty() && !editing {
        Line::from(Span::styled(
            format!(" {}", PLACEHOLDER),
            Style::default().fg(colors.muted),
        ))
    } else {
        // 预留前导空格和光标
        let visible = tail(draft, (inner.width as usize).saturating_sub(2));
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(visible.to_string(), Style::default().fg(colors.text)),
        ];
        if editing {
            spans.push(Span::styled("█", Style::default().fg(colors.highlight)));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line), inner);

    let button = Paragraph::new(Span::styled(
        ADD_BUTTON,
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    );
    frame.render_widget(button, button_area);

    click_areas.input_area = Some(input_area);
    click_areas.add_button = Some(button_area);
}
