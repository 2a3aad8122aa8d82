//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),             // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48),   // 选中行背景
        logo: Color::Rgb(253, 224, 71),         // 黄色
        highlight: Color::Rgb(244, 114, 182),   // 粉色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),       // 灰色
        border: Color::Rgb(68, 68, 68),         // 深灰边框
        done: Color::Rgb(74, 222, 128),         // 绿色
        danger: Color::Rgb(239, 68, 68),        // 红色
        progress: Color::Rgb(96, 165, 250),     // 蓝色
        celebrate: Color::Rgb(45, 212, 191),    // 青色
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),           // 浅灰背景
        bg_secondary: Color::Rgb(230, 230, 230), // 选中行背景
        logo: Color::Rgb(168, 85, 247),          // 紫色
        highlight: Color::Rgb(219, 39, 119),     // 深粉
        text: Color::Rgb(30, 30, 30),            // 深灰文字
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        done: Color::Rgb(22, 163, 74),
        danger: Color::Rgb(200, 50, 50),
        progress: Color::Rgb(37, 99, 235),
        celebrate: Color::Rgb(13, 148, 136),
    }
}

/// Dracula 主题
pub fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),           // 背景色
        bg_secondary: Color::Rgb(68, 71, 90), // 选中行
        logo: Color::Rgb(189, 147, 249),      // 紫色
        highlight: Color::Rgb(255, 121, 198), // 粉色
        text: Color::Rgb(248, 248, 242),      // 前景色
        muted: Color::Rgb(98, 114, 164),      // 注释色
        border: Color::Rgb(68, 71, 90),
        done: Color::Rgb(80, 250, 123),
        danger: Color::Rgb(255, 85, 85),
        progress: Color::Rgb(139, 233, 253),
        celebrate: Color::Rgb(241, 250, 140),
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),           // polar night
        bg_secondary: Color::Rgb(59, 66, 82), // polar night lighter
        logo: Color::Rgb(136, 192, 208),      // frost
        highlight: Color::Rgb(129, 161, 193), // frost darker
        text: Color::Rgb(236, 239, 244),      // snow storm
        muted: Color::Rgb(76, 86, 106),
        border: Color::Rgb(59, 66, 82),
        done: Color::Rgb(163, 190, 140),      // aurora green
        danger: Color::Rgb(191, 97, 106),     // aurora red
        progress: Color::Rgb(136, 192, 208),
        celebrate: Color::Rgb(235, 203, 139), // aurora yellow
    }
}

/// Gruvbox 主题
pub fn gruvbox_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 40, 40),           // bg0
        bg_secondary: Color::Rgb(60, 56, 54), // bg1
        logo: Color::Rgb(250, 189, 47),       // yellow
        highlight: Color::Rgb(254, 128, 25),  // orange
        text: Color::Rgb(235, 219, 178),      // fg
        muted: Color::Rgb(146, 131, 116),     // gray
        border: Color::Rgb(80, 73, 69),
        done: Color::Rgb(184, 187, 38),
        danger: Color::Rgb(251, 73, 52),
        progress: Color::Rgb(131, 165, 152),
        celebrate: Color::Rgb(142, 192, 124),
    }
}

/// Tokyo Night 主题
pub fn tokyo_night_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(26, 27, 38),           // bg_dark
        bg_secondary: Color::Rgb(41, 46, 66), // bg_highlight
        logo: Color::Rgb(125, 207, 255),      // cyan
        highlight: Color::Rgb(187, 154, 247), // purple
        text: Color::Rgb(192, 202, 245),      // fg
        muted: Color::Rgb(86, 95, 137),       // comment
        border: Color::Rgb(41, 46, 66),
        done: Color::Rgb(158, 206, 106),
        danger: Color::Rgb(247, 118, 142),
        progress: Color::Rgb(125, 207, 255),
        celebrate: Color::Rgb(115, 218, 202),
    }
}

/// Catppuccin 主题
pub fn catppuccin_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(30, 30, 46),           // base
        bg_secondary: Color::Rgb(49, 50, 68), // surface0
        logo: Color::Rgb(203, 166, 247),      // mauve
        highlight: Color::Rgb(245, 194, 231), // pink
        text: Color::Rgb(205, 214, 244),      // text
        muted: Color::Rgb(127, 132, 156),     // overlay1
        border: Color::Rgb(69, 71, 90),       // surface1
        done: Color::Rgb(166, 227, 161),      // green
        danger: Color::Rgb(243, 139, 168),    // red
        progress: Color::Rgb(137, 180, 250),  // blue
        celebrate: Color::Rgb(148, 226, 213), // teal
    }
}
