//! macOS 系统主题检测

use std::process::Command;

/// 检测系统是否为深色模式
///
/// 读取 macOS 的 AppleInterfaceStyle；其他平台上命令不存在，按浅色处理。
pub fn detect_system_theme() -> bool {
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(false)
}
