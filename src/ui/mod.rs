pub mod click_areas;
pub mod components;

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, InputMode};

use components::{
    completion_popup, empty_state, footer, header, help_panel, progress_bar, task_input,
    task_list, theme_selector, toast,
};

/// 渲染整个界面，同时刷新本帧的点击区域
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.ui.colors;
    app.ui.click_areas.reset();

    // 填充整个背景
    frame.render_widget(Block::default().style(Style::default().bg(colors.bg)), area);

    let [header_area, progress_area, input_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(progress_bar::PROGRESS_HEIGHT),
        Constraint::Length(task_input::INPUT_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(footer::FOOTER_HEIGHT),
    ])
    .areas(area);

    let progress = app.store.compute_progress();
    let editing = app.mode == InputMode::Editing;

    header::render(frame, header_area, &progress, &colors);
    progress_bar::render(frame, progress_area, &progress, &colors);
    task_input::render(
        frame,
        input_area,
        app.store.pending_text(),
        editing,
        &colors,
        &mut app.ui.click_areas,
    );

    if app.store.tasks().is_empty() {
        empty_state::render(frame, list_area, editing, &colors);
    } else {
        task_list::render(
            frame,
            list_area,
            app.store.tasks(),
            app.list_state.selected(),
            !editing,
            &colors,
            &mut app.ui.click_areas,
        );
    }

    footer::render(
        frame,
        footer_area,
        app.mode,
        !app.store.tasks().is_empty(),
        &colors,
    );

    // 渲染 Toast（如果有）
    if let Some(ref t) = app.ui.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, &colors);
        }
    }

    // 渲染完成弹窗
    if let Some(ref popup) = app.ui.completion_popup {
        if !popup.is_expired() {
            completion_popup::render(frame, &popup.message, &colors);
        }
    }

    // 渲染主题选择器（如果打开）
    if app.ui.show_theme_selector {
        theme_selector::render(
            frame,
            app.ui.theme_selector_index,
            &colors,
            &mut app.ui.click_areas,
        );
    }

    // 渲染帮助面板
    if app.ui.show_help {
        help_panel::render(frame, &colors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn add(app: &mut App, text: &str) {
        app.store.set_pending_text(text);
        app.submit_draft();
    }

    #[test]
    fn test_render_empty_app() {
        let mut app = App::for_tests();
        let text = screen_text(&draw(&mut app));

        assert!(text.contains("ToDo"));
        assert!(text.contains("0/0 done"));
        assert!(text.contains("0%"));
        assert!(text.contains("No tasks yet"));
        assert!(app.ui.click_areas.add_button.is_some());
        assert!(app.ui.click_areas.task_rows.is_empty());
    }

    #[test]
    fn test_render_tasks_and_progress() {
        let mut app = App::for_tests();
        add(&mut app, "Buy milk");
        add(&mut app, "Walk dog");
        app.toggle_task(app.store.tasks()[0].id);

        let text = screen_text(&draw(&mut app));
        assert!(text.contains("Buy milk"));
        assert!(text.contains("Walk dog"));
        assert!(text.contains("1/2 done"));
        assert!(text.contains("50%"));
        assert!(text.contains("[✓]"));

        assert_eq!(app.ui.click_areas.task_rows.len(), 2);
        assert_eq!(app.ui.click_areas.toggle_buttons[1].1, app.store.tasks()[1].id);
    }

    #[test]
    fn test_render_completion_popup() {
        let mut app = App::for_tests();
        add(&mut app, "Only task");
        app.toggle_task(app.store.tasks()[0].id);
        assert!(app.ui.popup_visible());

        let text = screen_text(&draw(&mut app));
        assert!(text.contains("All Tasks Completed!"));
        assert!(text.contains("Great job! Keep up the productivity!"));
    }

    #[test]
    fn test_render_draft_in_input() {
        let mut app = App::for_tests();
        app.store.set_pending_text("half typed");
        let text = screen_text(&draw(&mut app));
        assert!(text.contains("half typed"));
    }

    #[test]
    fn test_render_placeholder_when_not_editing() {
        let mut app = App::for_tests();
        app.exit_edit_mode();
        let text = screen_text(&draw(&mut app));
        assert!(text.contains("Add a new task..."));
    }

    #[test]
    fn test_render_theme_selector_registers_click_areas() {
        let mut app = App::for_tests();
        app.ui.open_theme_selector();
        let text = screen_text(&draw(&mut app));

        assert!(text.contains("Tokyo Night"));
        assert_eq!(
            app.ui.click_areas.dialog_items.len(),
            crate::theme::Theme::all().len()
        );
        assert_eq!(app.ui.click_areas.dialog_buttons.len(), 2);
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut app = App::for_tests();
        add(&mut app, "a");
        app.ui.show_toast("hello", std::time::Duration::from_secs(2));
        app.ui.show_help = true;

        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();
    }
}
