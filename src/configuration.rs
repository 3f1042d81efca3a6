use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;

use crate::quadratureerror::QuadratureError;
use crate::quadrature::romberg::MAX_LEVEL;

pub const DEFAULT_REFERENCE_LEVEL: usize = 12;
pub const DEFAULT_MAX_LEVEL: usize = 6;
pub const DEFAULT_DECIMALS: usize = 10;

#[derive(Deserialize)]
#[serde(default)]
struct ComparisonSettingsJsonProp {
    reference_level: usize,
    max_level: usize,
    decimals: usize
}

impl Default for ComparisonSettingsJsonProp {
    fn default() -> Self {
        ComparisonSettingsJsonProp {
            reference_level: DEFAULT_REFERENCE_LEVEL,
            max_level: DEFAULT_MAX_LEVEL,
            decimals: DEFAULT_DECIMALS
        }
    }
}

/// Run parameters of one comparison: the level of the reference Romberg
/// estimate, the deepest level shown in the table and the rendering
/// precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonSettings {
    reference_level: usize,
    max_level: usize,
    decimals: usize
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        ComparisonSettings {
            reference_level: DEFAULT_REFERENCE_LEVEL,
            max_level: DEFAULT_MAX_LEVEL,
            decimals: DEFAULT_DECIMALS
        }
    }
}

impl ComparisonSettings {
    pub fn new(reference_level: usize, max_level: usize, decimals: usize) -> Result<ComparisonSettings, QuadratureError> {
        let settings = ComparisonSettings { reference_level, max_level, decimals };
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<ComparisonSettings, QuadratureError> {
        let json_prop: ComparisonSettingsJsonProp = serde_json::from_value(json_value)?;
        ComparisonSettings::new(json_prop.reference_level, json_prop.max_level, json_prop.decimals)
    }

    pub fn from_reader(file_path: &str) -> Result<ComparisonSettings, QuadratureError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        ComparisonSettings::from_json(json_value)
    }

    pub fn validate(&self) -> Result<(), QuadratureError> {
        for level in [self.reference_level, self.max_level] {
            if level > MAX_LEVEL {
                return Err(QuadratureError::LevelTooDeep { level, limit: MAX_LEVEL });
            }
        }
        Ok(())
    }

    pub fn with_levels(&self, reference_level: Option<usize>, max_level: Option<usize>) -> Result<ComparisonSettings, QuadratureError> {
        ComparisonSettings::new(
            reference_level.unwrap_or(self.reference_level),
            max_level.unwrap_or(self.max_level),
            self.decimals
        )
    }

    pub fn reference_level(&self) -> usize {
        self.reference_level
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_match_reference_run() {
        let settings = ComparisonSettings::default();
        assert_eq!(settings.reference_level(), 12);
        assert_eq!(settings.max_level(), 6);
        assert_eq!(settings.decimals(), 10);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn missing_json_fields_fall_back_to_defaults() {
        let settings = ComparisonSettings::from_json(json!({ "max_level": 4 })).unwrap();
        assert_eq!(settings, ComparisonSettings::new(12, 4, 10).unwrap());
    }

    #[test]
    fn levels_are_bounded_independently() {
        assert!(ComparisonSettings::new(3, 6, 10).is_ok());
        assert!(matches!(
            ComparisonSettings::new(MAX_LEVEL + 1, 6, 10),
            Err(QuadratureError::LevelTooDeep { level, .. }) if level == MAX_LEVEL + 1
        ));
        assert!(matches!(
            ComparisonSettings::new(12, MAX_LEVEL + 1, 10),
            Err(QuadratureError::LevelTooDeep { level, .. }) if level == MAX_LEVEL + 1
        ));
    }

    #[test]
    fn overrides_keep_decimals() {
        let settings = ComparisonSettings::new(12, 6, 4).unwrap()
            .with_levels(Some(10), None)
            .unwrap();
        assert_eq!(settings, ComparisonSettings::new(10, 6, 4).unwrap());
    }

    #[test]
    fn reads_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "reference_level": 10, "max_level": 5, "decimals": 6 }}"#).unwrap();
        let path = file.path().to_str().unwrap().to_owned();
        assert_eq!(
            ComparisonSettings::from_reader(&path).unwrap(),
            ComparisonSettings::new(10, 5, 6).unwrap()
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            ComparisonSettings::from_reader("/nonexistent/quadcomp.json"),
            Err(QuadratureError::IOError(_))
        ));
    }
}
