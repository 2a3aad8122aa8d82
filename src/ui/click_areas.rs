use ratatui::layout::Rect;

use crate::store::TaskId;

/// Dialog 底部按钮动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Confirm,
    Cancel,
}

/// 每帧渲染时缓存的可点击区域
#[derive(Debug, Default, Clone)]
pub struct ClickAreas {
    /// 输入框区域（点击进入编辑）
    pub input_area: Option<Rect>,
    /// `[+]` 添加按钮
    pub add_button: Option<Rect>,
    /// 任务行 (区域, 列表索引)
    pub task_rows: Vec<(Rect, usize)>,
    /// 勾选框 (区域, task id)
    pub toggle_buttons: Vec<(Rect, TaskId)>,
    /// 删除按钮 (区域, task id)
    pub delete_buttons: Vec<(Rect, TaskId)>,
    /// 任务列表区域（滚轮检测）
    pub list_area: Option<Rect>,
    /// 弹窗整体区域
    pub dialog_area: Option<Rect>,
    /// 弹窗内选项 (区域, 索引)
    pub dialog_items: Vec<(Rect, usize)>,
    /// 弹窗按钮
    pub dialog_buttons: Vec<(Rect, DialogAction)>,
}

impl ClickAreas {
    pub fn reset(&mut self) {
        self.input_area = None;
        self.add_button = None;
        self.task_rows.clear();
        self.toggle_buttons.clear();
        self.delete_buttons.clear();
        self.list_area = None;
        self.dialog_area = None;
        self.dialog_items.clear();
        self.dialog_buttons.clear();
    }
}

/// 检查坐标 (col, row) 是否在 Rect 内
pub fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// 查找命中的区域并返回其携带的值
pub fn hit<T: Copy>(areas: &[(Rect, T)], col: u16, row: u16) -> Option<T> {
    areas
        .iter()
        .find(|(rect, _)| contains(rect, col, row))
        .map(|(_, value)| *value)
}
