//! `todo config` 子命令

use crate::error::Result;
use crate::storage::config::{config_path, Config};

/// 打印生效配置（含命令行覆盖）
pub fn execute(config: &Config) -> Result<()> {
    let path = config_path()?;
    println!("# {}", path.display());
    print!("{}", render(config)?);
    Ok(())
}

fn render(config: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_sections() {
        let text = render(&Config::default()).unwrap();
        assert!(text.contains("[theme]"));
        assert!(text.contains("name = \"Auto\""));
        assert!(text.contains("[popup]"));
        assert!(text.contains("duration_secs = 3"));
    }
}
