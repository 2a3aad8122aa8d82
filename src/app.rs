use std::path::PathBuf;

use ratatui::widgets::ListState;
use tracing::{debug, info, warn};

use crate::storage::{self, config::Config};
use crate::store::{StoreEvent, TaskId, TaskListStore};
use crate::theme::{detect_system_theme, get_theme_colors, Theme};
use crate::ui_state::{UiState, TOAST_DURATION};

/// 输入模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// 列表导航
    Normal,
    /// 输入框获得焦点
    Editing,
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务 Store
    pub store: TaskListStore,
    /// 展示层状态
    pub ui: UiState,
    /// 当前输入模式
    pub mode: InputMode,
    /// 列表选择状态
    pub list_state: ListState,
    /// 当前生效配置
    pub config: Config,
    /// 主题变更写回的配置文件（None 表示不落盘）
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        let theme = Theme::from_name(&config.theme.name);
        let colors = get_theme_colors(theme);
        let ui = UiState::new(
            theme,
            colors,
            detect_system_theme(),
            config.popup_duration(),
        );

        Self {
            should_quit: false,
            store: TaskListStore::new(),
            ui,
            // 列表为空时输入框默认获得焦点
            mode: InputMode::Editing,
            list_state: ListState::default(),
            config,
            config_path,
        }
    }

    // ========== 输入框 ==========

    pub fn enter_edit_mode(&mut self) {
        self.mode = InputMode::Editing;
    }

    pub fn exit_edit_mode(&mut self) {
        self.mode = InputMode::Normal;
        self.ensure_selection();
    }

    pub fn input_char(&mut self, c: char) {
        self.store.push_pending_char(c);
    }

    pub fn input_backspace(&mut self) {
        self.store.pop_pending_char();
    }

    /// 提交草稿；空白草稿静默忽略
    pub fn submit_draft(&mut self) {
        if self.store.add_task().is_some() {
            self.ensure_selection();
        }
        self.dispatch_events();
    }

    // ========== 任务操作 ==========

    pub fn selected_task_id(&self) -> Option<TaskId> {
        let index = self.list_state.selected()?;
        self.store.tasks().get(index).map(|t| t.id)
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.toggle_task(id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.delete_task(id);
        }
    }

    pub fn toggle_task(&mut self, id: TaskId) {
        self.store.toggle_complete(id);
        self.dispatch_events();
    }

    pub fn delete_task(&mut self, id: TaskId) {
        self.store.delete_task(id);
        self.clamp_selection();
        self.dispatch_events();
    }

    /// 把 Store 事件转交给展示层
    fn dispatch_events(&mut self) {
        for event in self.store.take_events() {
            match event {
                StoreEvent::TaskAdded(id) => debug!(%id, "task added"),
                StoreEvent::TaskToggled { id, completed } => {
                    debug!(%id, completed, "task toggled")
                }
                StoreEvent::TaskDeleted(id) => debug!(%id, "task deleted"),
                StoreEvent::AllCompleted => {}
            }
            self.ui.observe(&event);
        }
    }

    // ========== 列表导航 ==========

    pub fn select(&mut self, index: usize) {
        if index < self.store.tasks().len() {
            self.list_state.select(Some(index));
        }
    }

    pub fn select_next(&mut self) {
        let len = self.store.tasks().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    pub fn select_previous(&mut self) {
        let len = self.store.tasks().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    /// 确保有选中项
    fn ensure_selection(&mut self) {
        if !self.store.tasks().is_empty() && self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }
    }

    /// 删除后修正选中索引
    fn clamp_selection(&mut self) {
        let len = self.store.tasks().len();
        match self.list_state.selected() {
            _ if len == 0 => {
                self.list_state.select(None);
                self.mode = InputMode::Editing;
            }
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    // ========== 主题 ==========

    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.ui.theme_selector_index = if self.ui.theme_selector_index == 0 {
            len - 1
        } else {
            self.ui.theme_selector_index - 1
        };
        // 实时预览
        self.apply_theme_at_index(self.ui.theme_selector_index);
    }

    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.ui.theme_selector_index = (self.ui.theme_selector_index + 1) % len;
        self.apply_theme_at_index(self.ui.theme_selector_index);
    }

    pub fn theme_selector_select(&mut self, index: usize) {
        if index < Theme::all().len() {
            self.ui.theme_selector_index = index;
            self.apply_theme_at_index(index);
        }
    }

    /// 确认选择并写回配置
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.ui.theme_selector_index);
        self.ui.show_theme_selector = false;

        let label = self.ui.theme.label();
        self.config.theme.name = label.to_string();
        // 只写回主题，命令行覆盖不落盘
        if let Some(path) = &self.config_path {
            let existing = if path.exists() {
                storage::load_toml::<Config>(path)
            } else {
                Ok(Config::default())
            };
            match existing {
                Ok(mut saved) => {
                    saved.theme.name = label.to_string();
                    if let Err(e) = storage::save_toml(path, &saved) {
                        warn!(error = %e, "failed to save theme");
                    }
                }
                // 文件无法解析时不覆盖，保留用户的其他设置
                Err(e) => warn!(
                    path = %path.display(),
                    error = %e,
                    "config file is invalid, theme not saved"
                ),
            }
        }
        info!(theme = label, "theme changed");
        self.ui.show_toast(format!("Theme: {}", label), TOAST_DURATION);
    }

    /// 取消选择，恢复打开前的主题
    pub fn theme_selector_cancel(&mut self) {
        let original = Theme::from_name(&self.config.theme.name);
        self.ui.set_theme(original, get_theme_colors(original));
        self.ui.show_theme_selector = false;
    }

    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.ui.set_theme(*theme, get_theme_colors(*theme));
        }
    }

    /// 检查系统主题变化（用于 Auto 模式）
    fn check_system_theme(&mut self) {
        if self.ui.theme != Theme::Auto {
            return;
        }

        let current_dark = detect_system_theme();
        if current_dark != self.ui.last_system_dark {
            self.ui.last_system_dark = current_dark;
            self.ui.colors = get_theme_colors(Theme::Auto);
        }
    }

    /// 每帧调用：清理过期 Toast/弹窗，跟随系统主题
    pub fn tick(&mut self) {
        self.ui.tick();
        self.check_system_theme();
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
impl App {
    /// 固定主题、不写配置的 App
    pub(crate) fn for_tests() -> Self {
        let mut config = Config::default();
        config.theme.name = "Dark".to_string();
        Self::new(config, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::for_tests()
    }

    fn add(app: &mut App, text: &str) {
        app.store.set_pending_text(text);
        app.submit_draft();
    }

    #[test]
    fn test_new_app_starts_in_editing_mode() {
        let app = test_app();
        assert_eq!(app.mode, InputMode::Editing);
        assert!(app.store.tasks().is_empty());
        assert_eq!(app.ui.theme, Theme::Dark);
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn test_submit_selects_first_task() {
        let mut app = test_app();
        add(&mut app, "Buy milk");
        assert_eq!(app.store.tasks().len(), 1);
        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(app.store.pending_text(), "");
    }

    #[test]
    fn test_submit_blank_keeps_draft() {
        let mut app = test_app();
        add(&mut app, "   ");
        assert!(app.store.tasks().is_empty());
        assert_eq!(app.store.pending_text(), "   ");
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn test_completing_all_shows_popup_once() {
        let mut app = test_app();
        add(&mut app, "Buy milk");
        add(&mut app, "Walk dog");

        app.select(0);
        app.toggle_selected();
        assert!(!app.ui.popup_visible());

        app.select(1);
        app.toggle_selected();
        assert!(app.ui.popup_visible());

        app.ui.dismiss_popup();
        app.toggle_task(app.store.tasks()[0].id);
        app.toggle_task(app.store.tasks()[0].id);
        assert!(app.ui.popup_visible());
    }

    #[test]
    fn test_delete_clamps_selection() {
        let mut app = test_app();
        add(&mut app, "a");
        add(&mut app, "b");
        app.exit_edit_mode();
        app.select(1);

        app.delete_selected();
        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(app.store.tasks()[0].text, "a");

        app.delete_selected();
        assert!(app.list_state.selected().is_none());
        assert_eq!(app.mode, InputMode::Editing);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = test_app();
        add(&mut app, "a");
        add(&mut app, "b");
        add(&mut app, "c");

        app.select(2);
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(2));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut app = test_app();
        add(&mut app, "a");
        app.select(5);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_theme_selector_cancel_restores_theme() {
        let mut app = test_app();
        app.ui.open_theme_selector();
        app.theme_selector_next();
        assert_ne!(app.ui.theme, Theme::Dark);

        app.theme_selector_cancel();
        assert_eq!(app.ui.theme, Theme::Dark);
        assert!(!app.ui.show_theme_selector);
    }

    #[test]
    fn test_theme_selector_confirm_saves_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut app = App::new(Config::default(), Some(path.clone()));

        app.ui.open_theme_selector();
        app.theme_selector_select(Theme::all().len() - 1);
        app.theme_selector_confirm();

        let saved = crate::storage::config::load_config_from(&path);
        assert_eq!(saved.theme.name, "Catppuccin");
        assert_eq!(app.ui.toast.as_ref().unwrap().message, "Theme: Catppuccin");
    }

    #[test]
    fn test_theme_confirm_keeps_invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let original = "[theme]\nname = \"Nord\"\n\n[popup]\nduration_secs = \"soon\"\n";
        std::fs::write(&path, original).unwrap();
        let mut app = App::new(Config::default(), Some(path.clone()));

        app.ui.open_theme_selector();
        app.theme_selector_select(Theme::all().len() - 1);
        app.theme_selector_confirm();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
        assert_eq!(app.ui.theme, Theme::Catppuccin);
    }

    #[test]
    fn test_completing_all_with_huge_popup_secs() {
        let config = Config::default().with_overrides(Some("Dark".into()), Some(u64::MAX));
        let mut app = App::new(config, None);

        add(&mut app, "Buy milk");
        app.toggle_task(app.store.tasks()[0].id);
        assert!(app.ui.popup_visible());
    }
}
