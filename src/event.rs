use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::{App, InputMode};
use crate::ui::click_areas::{contains, hit, DialogAction};

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 清理过期的 Toast / 弹窗
    app.tick();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            // 只处理按下事件
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 完成弹窗显示时，任意键关闭
    if app.ui.popup_visible() {
        app.ui.dismiss_popup();
        return;
    }

    // 帮助面板
    if app.ui.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.ui.show_help = false;
        }
        return;
    }

    // 主题选择器
    if app.ui.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    match app.mode {
        InputMode::Editing => handle_editing_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

/// 输入框获得焦点时的键盘事件
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Esc | KeyCode::Tab => app.exit_edit_mode(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

/// 列表导航模式的键盘事件
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // 编辑输入框
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Tab => {
            app.enter_edit_mode()
        }

        // 导航
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 切换完成状态
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        // 删除
        KeyCode::Char('x') | KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        // 主题选择器
        KeyCode::Char('t') | KeyCode::Char('T') => app.ui.open_theme_selector(),

        // 帮助
        KeyCode::Char('?') => app.ui.show_help = true,

        _ => {}
    }
}

fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.theme_selector_next(),
        KeyCode::Char('k') | KeyCode::Up => app.theme_selector_prev(),
        KeyCode::Enter => app.theme_selector_confirm(),
        KeyCode::Esc | KeyCode::Char('q') => app.theme_selector_cancel(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, col, row),
        MouseEventKind::ScrollDown => {
            if is_over_list(app, col, row) {
                app.select_next();
            }
        }
        MouseEventKind::ScrollUp => {
            if is_over_list(app, col, row) {
                app.select_previous();
            }
        }
        _ => {}
    }
}

fn is_over_list(app: &App, col: u16, row: u16) -> bool {
    app.ui
        .click_areas
        .list_area
        .is_some_and(|area| contains(&area, col, row))
}

fn handle_click(app: &mut App, col: u16, row: u16) {
    if app.ui.popup_visible() {
        app.ui.dismiss_popup();
        return;
    }

    if app.ui.show_help {
        app.ui.show_help = false;
        return;
    }

    if app.ui.show_theme_selector {
        let areas = &app.ui.click_areas;
        if let Some(index) = hit(&areas.dialog_items, col, row) {
            app.theme_selector_select(index);
        } else if let Some(action) = hit(&areas.dialog_buttons, col, row) {
            match action {
                DialogAction::Confirm => app.theme_selector_confirm(),
                DialogAction::Cancel => app.theme_selector_cancel(),
            }
        } else if !areas
            .dialog_area
            .is_some_and(|area| contains(&area, col, row))
        {
            // 点击弹窗外部等同取消
            app.theme_selector_cancel();
        }
        return;
    }

    let areas = &app.ui.click_areas;
    if areas.add_button.is_some_and(|r| contains(&r, col, row)) {
        app.submit_draft();
    } else if areas.input_area.is_some_and(|r| contains(&r, col, row)) {
        app.enter_edit_mode();
    } else if let Some(id) = hit(&areas.toggle_buttons, col, row) {
        app.toggle_task(id);
    } else if let Some(id) = hit(&areas.delete_buttons, col, row) {
        app.delete_task(id);
    } else if let Some(index) = hit(&areas.task_rows, col, row) {
        app.mode = InputMode::Normal;
        app.select(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    fn click(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_typing_and_enter_adds_task() {
        let mut app = App::for_tests();
        type_text(&mut app, "Buy milk");
        assert_eq!(app.store.pending_text(), "Buy milk");

        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.store.tasks().len(), 1);
        assert_eq!(app.store.tasks()[0].text, "Buy milk");
        assert_eq!(app.store.pending_text(), "");
    }

    #[test]
    fn test_letters_in_editing_mode_are_not_shortcuts() {
        let mut app = App::for_tests();
        type_text(&mut app, "quit?");
        assert!(!app.should_quit);
        assert!(!app.ui.show_help);
        assert_eq!(app.store.pending_text(), "quit?");
    }

    #[test]
    fn test_backspace_edits_draft() {
        let mut app = App::for_tests();
        type_text(&mut app, "ab");
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.store.pending_text(), "a");
    }

    #[test]
    fn test_normal_mode_toggle_and_delete() {
        let mut app = App::for_tests();
        type_text(&mut app, "a");
        handle_key(&mut app, key(KeyCode::Enter));
        type_text(&mut app, "b");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, InputMode::Normal);

        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.store.tasks()[0].completed);

        handle_key(&mut app, key(KeyCode::Char('j')));
        handle_key(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.store.tasks().len(), 1);
        assert_eq!(app.store.tasks()[0].text, "a");
    }

    #[test]
    fn test_any_key_dismisses_popup() {
        let mut app = App::for_tests();
        type_text(&mut app, "a");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Esc));
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.ui.popup_visible());

        // 关闭弹窗的按键不会穿透到列表
        handle_key(&mut app, key(KeyCode::Char('x')));
        assert!(!app.ui.popup_visible());
        assert_eq!(app.store.tasks().len(), 1);
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let mut app = App::for_tests();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_panel_opens_and_closes() {
        let mut app = App::for_tests();
        handle_key(&mut app, key(KeyCode::Esc));
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert!(app.ui.show_help);

        // 帮助面板打开时 q 只关闭面板
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.ui.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_click_toggle_and_delete_buttons() {
        let mut app = App::for_tests();
        type_text(&mut app, "a");
        handle_key(&mut app, key(KeyCode::Enter));
        let id = app.store.tasks()[0].id;

        app.ui
            .click_areas
            .toggle_buttons
            .push((Rect::new(2, 10, 3, 1), id));
        app.ui
            .click_areas
            .delete_buttons
            .push((Rect::new(40, 10, 1, 1), id));

        handle_mouse(&mut app, click(3, 10));
        assert!(app.store.tasks()[0].completed);

        app.ui.dismiss_popup();
        handle_mouse(&mut app, click(40, 10));
        assert!(app.store.tasks().is_empty());
    }

    #[test]
    fn test_click_add_button_submits() {
        let mut app = App::for_tests();
        type_text(&mut app, "Walk dog");
        app.ui.click_areas.add_button = Some(Rect::new(70, 5, 5, 1));

        handle_mouse(&mut app, click(72, 5));
        assert_eq!(app.store.tasks().len(), 1);
    }
}
