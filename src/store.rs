//! Task 列表状态
//!
//! 保存任务列表与输入草稿，提供增删改操作，并派生进度与"全部完成"信号。
//! 所有操作都是全函数：无效输入（空草稿、未知 id）静默忽略，不返回错误。

use std::fmt;

use chrono::{DateTime, Local};
use tracing::{debug, info};

/// Task 唯一标识（单调递增计数器，生命周期内不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 单个待办项
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Local>,
}

/// 进度快照
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub total_count: usize,
    pub completed_count: usize,
    /// 0.0 ~ 1.0，列表为空时为 0
    pub progress_ratio: f64,
}

impl Progress {
    /// 百分比（0 ~ 100），用于进度条标签
    pub fn percent(&self) -> u16 {
        (self.progress_ratio * 100.0).round() as u16
    }
}

/// Store 发出的事件，由展示层通过 `take_events` 消费
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    TaskAdded(TaskId),
    TaskToggled { id: TaskId, completed: bool },
    TaskDeleted(TaskId),
    /// 所有任务从"未全部完成"变为"全部完成"（仅上升沿）
    AllCompleted,
}

/// 任务列表 Store
#[derive(Debug)]
pub struct TaskListStore {
    pending_text: String,
    tasks: Vec<Task>,
    next_id: u64,
    events: Vec<StoreEvent>,
}

impl TaskListStore {
    pub fn new() -> Self {
        Self {
            pending_text: String::new(),
            tasks: Vec::new(),
            next_id: 1,
            events: Vec::new(),
        }
    }

    // ========== 读取 ==========

    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[cfg(test)]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn compute_progress(&self) -> Progress {
        let total_count = self.tasks.len();
        let completed_count = self.tasks.iter().filter(|t| t.completed).count();
        let progress_ratio = if total_count == 0 {
            0.0
        } else {
            completed_count as f64 / total_count as f64
        };

        Progress {
            total_count,
            completed_count,
            progress_ratio,
        }
    }

    pub fn is_all_completed(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|t| t.completed)
    }

    /// 取出并清空待处理事件
    pub fn take_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    // ========== 草稿 ==========

    pub fn set_pending_text(&mut self, text: impl Into<String>) {
        self.pending_text = text.into();
    }

    pub fn push_pending_char(&mut self, c: char) {
        let mut text = std::mem::take(&mut self.pending_text);
        text.push(c);
        self.set_pending_text(text);
    }

    pub fn pop_pending_char(&mut self) {
        let mut text = std::mem::take(&mut self.pending_text);
        text.pop();
        self.set_pending_text(text);
    }

    // ========== 变更 ==========

    /// 提交草稿为新任务，草稿为空白时不做任何事
    pub fn add_task(&mut self) -> Option<TaskId> {
        if self.pending_text.trim().is_empty() {
            return None;
        }

        let id = self.fresh_id();
        let text = std::mem::take(&mut self.pending_text);

        let rising = self.mutate(|tasks| {
            tasks.push(Task {
                id,
                text,
                completed: false,
                created_at: Local::now(),
            });
        });
        self.publish(StoreEvent::TaskAdded(id), rising);
        Some(id)
    }

    pub fn toggle_complete(&mut self, id: TaskId) {
        let mut toggled = None;
        let rising = self.mutate(|tasks| {
            if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
                task.completed = !task.completed;
                toggled = Some(task.completed);
            }
        });

        match toggled {
            Some(completed) => self.publish(StoreEvent::TaskToggled { id, completed }, rising),
            None => debug!(%id, "toggle ignored: unknown id"),
        }
    }

    pub fn delete_task(&mut self, id: TaskId) {
        let mut removed = false;
        let rising = self.mutate(|tasks| {
            let before = tasks.len();
            tasks.retain(|t| t.id != id);
            removed = tasks.len() != before;
        });

        if removed {
            self.publish(StoreEvent::TaskDeleted(id), rising);
        } else {
            debug!(%id, "delete ignored: unknown id");
        }
    }

    fn fresh_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    /// 执行一次变更，返回"全部完成"是否出现上升沿
    fn mutate(&mut self, f: impl FnOnce(&mut Vec<Task>)) -> bool {
        let was_all_completed = self.is_all_completed();
        f(&mut self.tasks);
        !was_all_completed && self.is_all_completed()
    }

    fn publish(&mut self, event: StoreEvent, rising: bool) {
        self.events.push(event);
        if rising {
            info!(total = self.tasks.len(), "all tasks completed");
            self.events.push(StoreEvent::AllCompleted);
        }
    }
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
