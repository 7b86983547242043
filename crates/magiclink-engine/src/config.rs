use serde::{Deserialize, Serialize};

/// Options for link detection.
///
/// `Copy` and immutable once built: every builder and rule holds its own
/// copy, so sessions on different threads share nothing mutable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// When true, display text for scheme-prefixed links omits the leading
    /// `scheme://`. The href is unaffected.
    pub hide_protocol: bool,
}

impl LinkConfig {
    pub fn new(hide_protocol: bool) -> Self {
        Self { hide_protocol }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_showing_protocol() {
        assert!(!LinkConfig::default().hide_protocol);
    }

    #[test]
    fn missing_field_uses_default() {
        let config: LinkConfig = toml::from_str("").unwrap();
        assert_eq!(config, LinkConfig::default());

        let config: LinkConfig = toml::from_str("hide_protocol = true").unwrap();
        assert!(config.hide_protocol);
    }
}
