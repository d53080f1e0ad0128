//! Flat `key=value` configuration files
//!
//! Vehicle definitions ship as plain text files with one `key=value` pair per
//! line. Lookups of absent keys yield an empty string; the typed getters turn
//! that into an error for numeric values so incomplete files fail at startup.

use std::collections::HashMap;
use std::path::Path;

use glam::Vec3;

use crate::core::error::Error;
use crate::core::types::Result;

/// Literal that stands for the zero vector in vector-valued keys.
pub const ZERO_VECTOR_SENTINEL: &str = "#";

/// Parsed key-value configuration
#[derive(Clone, Debug, Default)]
pub struct ConfigFile {
    values: HashMap<String, String>,
}

impl ConfigFile {
    /// Parse configuration text. Lines without `=` are ignored, the value is
    /// everything after the first `=`, and later duplicates win.
    pub fn parse(text: &str) -> Self {
        let values = text
            .lines()
            .filter_map(|line| {
                let (key, value) = line.split_once('=')?;
                let key = key.trim();
                (!key.is_empty()).then(|| (key.to_string(), value.trim().to_string()))
            })
            .collect();
        Self { values }
    }

    /// Load and parse a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::parse(&text);
        log::debug!("Loaded {} config keys from {}", config.len(), path.display());
        Ok(config)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Raw value, or the empty string when the key is absent
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn get_f32(&self, key: &str) -> Result<f32> {
        let value = self.get(key);
        value
            .parse::<f32>()
            .map_err(|e| Error::config(key, value, e))
    }

    pub fn get_i32(&self, key: &str) -> Result<i32> {
        let value = self.get(key);
        value
            .parse::<i32>()
            .map_err(|e| Error::config(key, value, e))
    }

    /// `true`/`1` are true; anything else, including an absent key, is false.
    pub fn get_bool(&self, key: &str) -> bool {
        let value = self.get(key);
        value.eq_ignore_ascii_case("true") || value == "1"
    }

    /// Comma-separated triple. Missing trailing components are zero, as is
    /// an absent key or the `#` sentinel.
    pub fn get_vec3(&self, key: &str) -> Result<Vec3> {
        let value = self.get(key);
        if value.is_empty() || value == ZERO_VECTOR_SENTINEL {
            return Ok(Vec3::ZERO);
        }

        let mut components = [0.0f32; 3];
        let mut parts = value.split(',');
        for slot in components.iter_mut() {
            let Some(part) = parts.next() else { break };
            *slot = part
                .trim()
                .parse::<f32>()
                .map_err(|e| Error::config(key, value, e))?;
        }
        if parts.next().is_some() {
            return Err(Error::config(key, value, "expected at most three components"));
        }

        Ok(Vec3::from_array(components))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
scale=0.1
independent_wheels=true
max_speed=0.1
left_head_light_pos=0.628, -2.731, 0.881
rear_left_wheel_pos=#
partial=1.5,2
broken=1.0,abc,2.0
this line is ignored

equation=a=b
";

    #[test]
    fn test_parse_basic_values() {
        let config = ConfigFile::parse(SAMPLE);
        assert_eq!(config.get("scale"), "0.1");
        assert!((config.get_f32("max_speed").unwrap() - 0.1).abs() < 1e-6);
        assert!(config.get_bool("independent_wheels"));
        assert_eq!(config.get("equation"), "a=b");
        assert!(!config.contains("this line is ignored"));
    }

    #[test]
    fn test_missing_key_is_empty_and_numeric_parse_fails() {
        let config = ConfigFile::parse(SAMPLE);
        assert_eq!(config.get("nope"), "");
        assert!(matches!(config.get_f32("nope"), Err(Error::Config { .. })));
        assert!(config.get_i32("nope").is_err());
        assert!(!config.get_bool("nope"));
    }

    #[test]
    fn test_vec3_values() {
        let config = ConfigFile::parse(SAMPLE);
        let v = config.get_vec3("left_head_light_pos").unwrap();
        assert!((v - Vec3::new(0.628, -2.731, 0.881)).length() < 1e-6);
        assert_eq!(config.get_vec3("rear_left_wheel_pos").unwrap(), Vec3::ZERO);
        assert_eq!(config.get_vec3("partial").unwrap(), Vec3::new(1.5, 2.0, 0.0));
        assert_eq!(config.get_vec3("absent").unwrap(), Vec3::ZERO);
        assert!(config.get_vec3("broken").is_err());
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let config = ConfigFile::parse("a=1\na=2\n");
        assert_eq!(config.get_i32("a").unwrap(), 2);
    }

    #[test]
    fn test_crlf_lines() {
        let config = ConfigFile::parse("scale=0.5\r\nmax_speed=1\r\n");
        assert_eq!(config.get_f32("scale").unwrap(), 0.5);
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SAMPLE}").unwrap();
        let config = ConfigFile::load(file.path()).unwrap();
        assert!(config.get_bool("independent_wheels"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigFile::load(dir.path().join("missing"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
