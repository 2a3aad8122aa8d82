//! 任务列表
//!
//! 每行：选择指示器 | 勾选框 | 文本 | 创建时间 | 删除按钮。
//! 勾选框与删除按钮的区域会登记到 `ClickAreas`，供鼠标点击使用。

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::truncate;
use crate::store::Task;
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    selected: Option<usize>,
    focused: bool,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let border_color = if focused {
        colors.highlight
    } else {
        colors.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(" Tasks ", Style::default().fg(colors.muted)));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    click_areas.list_area = Some(inner);

    let visible = inner.height as usize;
    if visible == 0 || inner.width == 0 {
        return;
    }

    let now = Local::now();
    let offset = scroll_offset(selected, visible, tasks.len());

    for (row, (index, task)) in tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        let is_selected = selected == Some(index);
        render_row(frame, row_area, task, is_selected, focused, now, colors);

        let [_, check_area, _, _, delete_area] = row_columns(row_area);
        click_areas.task_rows.push((row_area, index));
        click_areas.toggle_buttons.push((check_area, task.id));
        click_areas.delete_buttons.push((delete_area, task.id));
    }
}

fn row_columns(row_area: Rect) -> [Rect; 5] {
    Layout::horizontal([
        Constraint::Length(2), // 选择器
        Constraint::Length(4), // 勾选框
        Constraint::Fill(1),   // 文本
        Constraint::Length(9), // 创建时间
        Constraint::Length(3), // 删除
    ])
    .areas(row_area)
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    task: &Task,
    is_selected: bool,
    focused: bool,
    now: DateTime<Local>,
    colors: &ThemeColors,
) {
    if is_selected {
        frame.render_widget(
            Block::default().style(Style::default().bg(colors.bg_secondary)),
            area,
        );
    }

    let [selector_area, check_area, text_area, age_area, delete_area] = row_columns(area);

    let selector = if is_selected { "❯" } else { " " };
    frame.render_widget(
        Paragraph::new(Span::styled(selector, Style::default().fg(colors.highlight))),
        selector_area,
    );

    let (check, check_style) = if task.completed {
        ("[✓]", Style::default().fg(colors.done))
    } else {
        ("[ ]", Style::default().fg(colors.muted))
    };
    frame.render_widget(Paragraph::new(Span::styled(check, check_style)), check_area);

    let mut text_style = if task.completed {
        Style::default()
            .fg(colors.muted)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(colors.text)
    };
    if is_selected && focused {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    let text = truncate(&task.text, text_area.width as usize);
    frame.render_widget(Paragraph::new(Span::styled(text, text_style)), text_area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format_age(task.created_at, now),
            Style::default().fg(colors.muted),
        ))
        .alignment(Alignment::Right),
        age_area,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(" ✕", Style::default().fg(colors.danger))),
        delete_area,
    );
}

/// 保证选中行可见的滚动偏移
fn scroll_offset(selected: Option<usize>, visible: usize, len: usize) -> usize {
    let selected = selected.unwrap_or(0).min(len.saturating_sub(1));
    if selected >= visible {
        selected + 1 - visible
    } else {
        0
    }
}

/// 相对时间："just now" / "5m ago" / "2h ago" / "3d ago"
pub fn format_age(created_at: DateTime<Local>, now: DateTime<Local>) -> String {
    let secs = (now - created_at).num_seconds().max(0);
    match secs {
        0..=59 => "just now".to_string(),
        60..=3599 => format!("{}m ago", secs / 60),
        3600..=86399 => format!("{}h ago", secs / 3600),
        _ => format!("{}d ago", secs / 86400),
    }
}
