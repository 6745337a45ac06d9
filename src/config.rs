use serde::*;
use std::f32::consts::PI;
use std::str::FromStr;

use crate::error::*;

/// Options shared by every lesson, passed from JavaScript as an optional JSON string.
///
/// Every field has a default, so `{}` (or no config at all) is valid.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LessonConfig {
    /// The id of the `<canvas>` element to draw into.
    pub canvas_id: String,
    /// One of `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    /// The shape colour; random when absent.
    pub color: Option<[f32; 4]>,
    pub shape: Shape,
    /// Radians added to the Z rotation each animation frame.
    pub rotation_step: f32,
}

impl Default for LessonConfig {
    fn default() -> Self {
        LessonConfig {
            canvas_id: "canvas".to_string(),
            log_level: "info".to_string(),
            color: None,
            shape: Shape::Triangle,
            rotation_step: PI / 2.0 / 70.0,
        }
    }
}

impl LessonConfig {
    pub fn from_json(json: &str) -> GlResult<Self> {
        let config: LessonConfig =
            serde_json::from_str(json).map_err(|e| GlError::Config(e.to_string()))?;
        config.level()?;
        Ok(config)
    }

    /// Parses `json` if present, else returns the defaults.
    pub fn from_optional_json(json: Option<String>) -> GlResult<Self> {
        match json {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }

    pub fn level(&self) -> GlResult<log::Level> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| GlError::Config(format!("unknown log level `{}`", self.log_level)))
    }
}

/// The geometry drawn by the rotating-shape lesson.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Triangle,
    Cube,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(LessonConfig::from_json("{}").unwrap(), LessonConfig::default());
        assert_eq!(LessonConfig::from_optional_json(None).unwrap(), LessonConfig::default());
        assert_eq!(
            LessonConfig::from_optional_json(Some("  ".to_string())).unwrap(),
            LessonConfig::default()
        );
    }

    #[test]
    fn fields_override_defaults() {
        let config = LessonConfig::from_json(
            r#"{"canvas_id": "c", "log_level": "debug", "color": [1, 0, 0, 1], "shape": "cube"}"#,
        )
        .unwrap();
        assert_eq!(config.canvas_id, "c");
        assert_eq!(config.level().unwrap(), log::Level::Debug);
        assert_eq!(config.color, Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(config.shape, Shape::Cube);
        assert!((config.rotation_step - PI / 140.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(LessonConfig::from_json("{"), Err(GlError::Config(_))));
        assert!(matches!(
            LessonConfig::from_json(r#"{"log_level": "loud"}"#),
            Err(GlError::Config(_))
        ));
        assert!(matches!(LessonConfig::from_json(r#"{"shape": "sphere"}"#), Err(GlError::Config(_))));
        assert!(matches!(LessonConfig::from_json(r#"{"colour": [0, 0, 0, 1]}"#), Err(GlError::Config(_))));
    }
}
