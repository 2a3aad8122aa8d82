//! UI 状态管理
//!
//! 管理所有与显示相关的状态：主题、颜色、Toast、完成弹窗、点击区域。
//! 完成弹窗只由 Store 的 `AllCompleted` 事件驱动，自动消失的计时也在这里，
//! Store 不参与。

use std::time::{Duration, Instant};

use tracing::debug;

use crate::store::StoreEvent;
use crate::theme::{Theme, ThemeColors};
use crate::ui::click_areas::ClickAreas;

/// 普通 Toast 显示时长
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// 单个 Toast 的最长显示时间
const MAX_TOAST_DURATION: Duration = Duration::from_secs(24 * 60 * 60);

/// Toast 消息（也用于完成弹窗的定时）
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration.min(MAX_TOAST_DURATION),
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI 状态
#[derive(Debug)]
pub struct UiState {
    /// Toast 提示
    pub toast: Option<Toast>,
    /// "全部完成" 弹窗
    pub completion_popup: Option<Toast>,
    /// 弹窗显示时长
    pub popup_duration: Duration,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 是否显示帮助面板
    pub show_help: bool,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    pub last_system_dark: bool,
    /// 可点击区域缓存（每帧渲染时填充）
    pub click_areas: ClickAreas,
}

impl UiState {
    pub fn new(
        theme: Theme,
        colors: ThemeColors,
        last_system_dark: bool,
        popup_duration: Duration,
    ) -> Self {
        Self {
            toast: None,
            completion_popup: None,
            popup_duration,
            theme,
            colors,
            show_theme_selector: false,
            theme_selector_index: 0,
            show_help: false,
            last_system_dark,
            click_areas: ClickAreas::default(),
        }
    }

    /// 响应 Store 事件
    pub fn observe(&mut self, event: &StoreEvent) {
        if let StoreEvent::AllCompleted = event {
            debug!(
                duration_ms = self.popup_duration.as_millis() as u64,
                "show completion popup"
            );
            self.completion_popup = Some(Toast::new(
                "All Tasks Completed!",
                self.popup_duration,
            ));
        }
    }

    pub fn popup_visible(&self) -> bool {
        self.completion_popup
            .as_ref()
            .is_some_and(|p| !p.is_expired())
    }

    pub fn dismiss_popup(&mut self) {
        self.completion_popup = None;
    }

    pub fn show_toast(&mut self, message: impl Into<String>, duration: Duration) {
        self.toast = Some(Toast::new(message, duration));
    }

    /// 清除过期的 Toast 与弹窗（主循环每帧调用）
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
        if self.completion_popup.as_ref().is_some_and(Toast::is_expired) {
            self.completion_popup = None;
        }
    }

    pub fn open_theme_selector(&mut self) {
        self.theme_selector_index = Theme::all()
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        self.show_theme_selector = true;
    }

    pub fn set_theme(&mut self, theme: Theme, colors: ThemeColors) {
        self.theme = theme;
        self.colors = colors;
    }
}

// ============================================================================
// Tests
// ============================================================================
