use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{HtmlBasicError, HtmlBasicResult};
use crate::style::{LinkStyle, Rgb};

const DEFAULT_LINE_HEIGHT: f64 = 5.0;

/// Render settings, loadable from YAML.
///
/// ```yaml
/// lineHeight: 6
/// link:
///   color: "#0000ff"
///   bold: true
///   underline: false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    pub line_height: f64,
    pub link: LinkConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            line_height: DEFAULT_LINE_HEIGHT,
            link: LinkConfig::default(),
        }
    }
}

/// Hyperlink appearance as written in a config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// `#rrggbb`
    pub color: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        LinkConfig {
            color: "#000080".to_string(),
            bold: false,
            italic: false,
            underline: true,
        }
    }
}

impl RenderConfig {
    pub fn from_yaml(yaml: &str) -> HtmlBasicResult<Self> {
        let config: RenderConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> HtmlBasicResult<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| HtmlBasicError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    pub fn validate(&self) -> HtmlBasicResult<()> {
        if !(self.line_height > 0.0) {
            return Err(HtmlBasicError::InvalidLineHeight {
                value: self.line_height,
            });
        }
        self.link.to_link_style()?;
        Ok(())
    }
}

impl LinkConfig {
    pub fn to_link_style(&self) -> HtmlBasicResult<LinkStyle> {
        Ok(LinkStyle {
            color: parse_hex_color(&self.color)?,
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
        })
    }
}

/// Parse a `#rrggbb` color.
pub fn parse_hex_color(value: &str) -> HtmlBasicResult<Rgb> {
    static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
    let hex_regex = HEX_COLOR_REGEX.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

    if !hex_regex.is_match(value) {
        return Err(HtmlBasicError::InvalidColor {
            value: value.to_string(),
            reason: "must be a hex color like #000080".to_string(),
        });
    }

    let channel = |i: usize| {
        u8::from_str_radix(&value[i..i + 2], 16).map_err(|e| HtmlBasicError::InvalidColor {
            value: value.to_string(),
            reason: e.to_string(),
        })
    };
    Ok(Rgb::new(channel(1)?, channel(3)?, channel(5)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_link_style_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.line_height, 5.0);
        assert_eq!(config.link.to_link_style().unwrap(), LinkStyle::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = RenderConfig::from_yaml("link:\n  bold: true\n").unwrap();
        assert_eq!(config.line_height, 5.0);
        let link = config.link.to_link_style().unwrap();
        assert!(link.bold);
        assert!(link.underline);
        assert_eq!(link.color, Rgb::new(0, 0, 128));
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "lineHeight: 7.5\nlink:\n  color: \"#FF8000\"\n  italic: true\n  underline: false\n";
        let config = RenderConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.line_height, 7.5);
        let link = config.link.to_link_style().unwrap();
        assert_eq!(link.color, Rgb::new(255, 128, 0));
        assert!(link.italic);
        assert!(!link.underline);
    }

    #[test]
    fn test_invalid_color_rejected() {
        let result = RenderConfig::from_yaml("link:\n  color: navy\n");
        assert!(matches!(result, Err(HtmlBasicError::InvalidColor { .. })));
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("#12345g").is_err());
    }

    #[test]
    fn test_non_positive_line_height_rejected() {
        let result = RenderConfig::from_yaml("lineHeight: 0\n");
        assert!(matches!(
            result,
            Err(HtmlBasicError::InvalidLineHeight { .. })
        ));
    }

    #[test]
    fn test_malformed_yaml_is_config_error() {
        let result = RenderConfig::from_yaml("lineHeight: [1, 2\n");
        assert!(matches!(result, Err(HtmlBasicError::ConfigError(_))));
    }
}
