//! INI file configuration adapter.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.config
            .get(section, key)
            .as_ref()
            .and_then(|v| Self::parse_bool(v))
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn from_string_parses_config() {
        let content = "[data]\npath = trades.csv\nsynthetic = true\n\n[display]\ntop_trades = 5\n";
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(
            adapter.get_string("data", "path"),
            Some("trades.csv".to_string())
        );
        assert!(adapter.get_bool("data", "synthetic", false));
        assert_eq!(adapter.get_int("display", "top_trades", 10), 5);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let adapter = FileConfigAdapter::from_string("[data]\n").unwrap();
        assert_eq!(adapter.get_string("data", "path"), None);
        assert_eq!(adapter.get_int("display", "top_trades", 10), 10);
        assert!(!adapter.get_bool("data", "synthetic", false));
    }

    #[test]
    fn get_bool_accepts_known_spellings() {
        let adapter =
            FileConfigAdapter::from_string("[data]\na = true\nb = yes\nc = 1\nd = no\n").unwrap();
        assert!(adapter.get_bool("data", "a", false));
        assert!(adapter.get_bool("data", "b", false));
        assert!(adapter.get_bool("data", "c", false));
        assert!(!adapter.get_bool("data", "d", true));
    }

    #[test]
    fn get_bool_rejects_loose_spellings() {
        let adapter = FileConfigAdapter::from_string("[data]\na = t\nb = y\n").unwrap();
        assert!(!adapter.get_bool("data", "a", false));
        assert!(!adapter.get_bool("data", "b", false));
    }

    #[test]
    fn non_numeric_int_falls_back_to_default() {
        let adapter = FileConfigAdapter::from_string("[display]\ntop_trades = lots\n").unwrap();
        assert_eq!(adapter.get_int("display", "top_trades", 10), 10);
    }

    #[test]
    fn from_file_reads_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[data]\npath = /srv/trades.csv\n").unwrap();
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("data", "path"),
            Some("/srv/trades.csv".to_string())
        );
    }

    #[test]
    fn from_file_errors_for_missing_file() {
        assert!(FileConfigAdapter::from_file("/nonexistent/arkflow.ini").is_err());
    }
}
