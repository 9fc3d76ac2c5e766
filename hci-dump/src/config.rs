use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use fixedstr::str_format;

use crate::{debug, DumpError, MsgStr, MsgType};

pub const DEFAULT_SECTION: &str = "Global";
pub const DUMP_SECTION: &str = "MtkBtHciDump";
pub const KEY_ENABLE: &str = "MtkBtHciDump_enable";
pub const KEY_QUEUE_DEPTH: &str = "MtkBtHciDump_queue_depth";
pub const KEY_FILTER_FW_LOG: &str = "MtkBtHciDump_filter_fw_log";

pub const DEFAULT_QUEUE_DEPTH: usize = 256;

/// Read access to stack configuration values.
pub trait ConfigSource {
    fn get_str(&self, section: &str, key: &str) -> Option<&str>;

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        match self.get_str(section, key) {
            Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => true,
            Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => false,
            _ => default,
        }
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.get_str(section, key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

/// Stack configuration values held in memory, keyed by section then key.
///
/// Values are filled in by whoever owns the stack configuration; nothing here
/// reads or merges configuration files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackConfig {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl StackConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }
}

impl ConfigSource for StackConfig {
    fn get_str(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key).map(String::as_str)
    }
}

/// Settings of the dump pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DumpConfig {
    pub enabled: bool,
    pub queue_depth: usize,
    pub filter_fw_log: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            queue_depth: DEFAULT_QUEUE_DEPTH,
            filter_fw_log: true,
        }
    }
}

impl DumpConfig {
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self, DumpError> {
        let depth = source.get_int(DUMP_SECTION, KEY_QUEUE_DEPTH, DEFAULT_QUEUE_DEPTH as i64);
        if depth < 1 {
            return Err(DumpError::Config(MsgType(str_format!(
                MsgStr,
                "{} must be at least 1, got {}",
                KEY_QUEUE_DEPTH,
                depth
            ))));
        }
        let config = Self {
            enabled: source.get_bool(DUMP_SECTION, KEY_ENABLE, false),
            queue_depth: depth as usize,
            filter_fw_log: source.get_bool(DUMP_SECTION, KEY_FILTER_FW_LOG, true),
        };
        debug!(
            "hci dump enabled {} queue depth {} filter fw log {}",
            config.enabled, config.queue_depth, config.filter_fw_log
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump_section(entries: &[(&str, &str)]) -> StackConfig {
        let mut config = StackConfig::new();
        for (key, value) in entries {
            config.set(DUMP_SECTION, key, value);
        }
        config
    }

    #[test]
    fn reads_sections_and_defaults() {
        let mut config = dump_section(&[(KEY_ENABLE, "true"), (KEY_QUEUE_DEPTH, "16")]);
        config.set(DEFAULT_SECTION, "TraceLevel", "2");
        assert_eq!(config.get_str(DEFAULT_SECTION, "TraceLevel"), Some("2"));
        assert!(config.has_section(DUMP_SECTION));
        assert!(!config.has_section("Other"));
        assert!(config.get_bool(DUMP_SECTION, KEY_ENABLE, false));
        assert_eq!(config.get_int(DUMP_SECTION, "missing", 7), 7);
    }

    #[test]
    fn later_value_wins() {
        let mut config = dump_section(&[(KEY_ENABLE, "1"), (KEY_QUEUE_DEPTH, "16")]);
        config.set(DUMP_SECTION, KEY_ENABLE, "FALSE");
        let dump = DumpConfig::from_source(&config).unwrap();
        assert!(!dump.enabled);
        assert_eq!(dump.queue_depth, 16);
        assert!(dump.filter_fw_log);
    }

    #[test]
    fn unparsable_values_fall_back() {
        let config = dump_section(&[(KEY_ENABLE, "yes"), (KEY_QUEUE_DEPTH, "lots")]);
        assert_eq!(DumpConfig::from_source(&config).unwrap(), DumpConfig::default());
    }

    #[test]
    fn zero_depth_is_rejected() {
        let config = dump_section(&[(KEY_QUEUE_DEPTH, "0")]);
        assert!(matches!(DumpConfig::from_source(&config), Err(DumpError::Config(_))));
    }
}
