use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use std::path::Path;

use crate::canvas::Color;
use crate::renderer::FormatStyle;
use crate::utils::file_utils;

/// Settings read from `pixelgrid.config`. Unset keys fall back to the built-in defaults.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FileConfig {
    pub size: Option<usize>,
    pub fill: Option<Color>,
    pub style: Option<FormatStyle>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        match file_utils::read_optional_text(path)? {
            Some(content) => {
                Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// `key = value` per line; blank lines and `#` comments are skipped, unknown keys ignored
    pub fn parse(content: &str) -> Result<Self> {
        let mut config = Self::default();

        for (number, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((key, value)) = trimmed.split_once('=') else {
                bail!("line {}: expected `key = value`, got '{}'", number + 1, trimmed);
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "size" => {
                    let size = value
                        .parse::<usize>()
                        .with_context(|| format!("line {}: bad size '{}'", number + 1, value))?;
                    config.size = Some(size);
                }
                "fill" => {
                    let fill = value
                        .parse::<Color>()
                        .with_context(|| format!("line {}: bad fill '{}'", number + 1, value))?;
                    config.fill = Some(fill);
                }
                "style" => match FormatStyle::from_str(value, true) {
                    Ok(style) => config.style = Some(style),
                    Err(err) => bail!("line {}: bad style '{}': {}", number + 1, value, err),
                },
                _ => {
                    crate::utils::logger::debug(&format!("ignoring config key '{}'", key));
                }
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_all_keys() {
        let config = FileConfig::parse("# matrix\nsize = 8\nfill = Red\n\nstyle = c\n").unwrap();
        assert_eq!(config.size, Some(8));
        assert_eq!(config.fill, Some(Color::new(0xff0000).unwrap()));
        assert_eq!(config.style, Some(FormatStyle::C));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = FileConfig::parse("font-size = 2.5\n").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_bad_values_name_the_line() {
        let err = FileConfig::parse("size = 8\nfill = mauve\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));

        assert!(FileConfig::parse("size = -3").is_err());
        assert!(FileConfig::parse("style = json").is_err());
        assert!(FileConfig::parse("just words").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("pixelgrid_missing_test.config");
        let _ = fs::remove_file(&path);
        assert_eq!(FileConfig::load(&path).unwrap(), FileConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join("pixelgrid_load_test.config");
        fs::write(&path, "size = 12\n").unwrap();
        assert_eq!(FileConfig::load(&path).unwrap().size, Some(12));
        let _ = fs::remove_file(&path);
    }
}
