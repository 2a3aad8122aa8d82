//! 主题选择器组件

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};
use crate::theme::{Theme, ThemeColors};
use crate::ui::click_areas::{ClickAreas, DialogAction};

/// 渲染主题选择器弹窗
pub fn render(
    frame: &mut Frame,
    selected_index: usize,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let themes = Theme::all();

    // 边框 + 列表 + 提示
    let popup_area = center_dialog(frame.area(), 30, themes.len() as u16 + 3);
    let inner_area = render_dialog_frame(frame, popup_area, " Theme ", colors.highlight, colors);

    let [list_area, hint_area] = Layout::vertical([
        Constraint::Length(themes.len() as u16),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    let lines: Vec<Line> = themes
        .iter()
        .enumerate()
        .map(|(i, theme)| {
            let is_selected = i == selected_index;
            let prefix = if is_selected { "❯ " } else { "  " };
            let style = if is_selected {
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            Line::from(Span::styled(format!("{}{}", prefix, theme.label()), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), list_area);

    render_hint(
        frame,
        hint_area,
        &[("Enter", "select"), ("Esc", "cancel")],
        colors,
    );

    // 注册点击区域
    click_areas.dialog_area = Some(popup_area);
    for i in 0..(list_area.height as usize).min(themes.len()) {
        let row_rect = Rect::new(list_area.x, list_area.y + i as u16, list_area.width, 1);
        click_areas.dialog_items.push((row_rect, i));
    }
    let half = hint_area.width / 2;
    click_areas.dialog_buttons.push((
        Rect::new(hint_area.x, hint_area.y, half, 1),
        DialogAction::Confirm,
    ));
    click_areas.dialog_buttons.push((
        Rect::new(hint_area.x + half, hint_area.y, hint_area.width - half, 1),
        DialogAction::Cancel,
    ));
}
