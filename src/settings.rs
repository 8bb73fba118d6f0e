use std::collections::BTreeMap;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ClientError;

/// Immutable key/value configuration handed to a client at construction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Collects every environment variable starting with `prefix`.
    ///
    /// The prefix is stripped, the rest lowercased and `__` mapped to `.`,
    /// so `QBC_CLUSTER__NAME` becomes `cluster.name`. Variables that are not
    /// valid unicode are skipped.
    pub fn from_env(prefix: &str) -> Self {
        let vars = env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
        Self::from_pairs(prefix, vars)
    }

    fn from_pairs(prefix: &str, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut builder = Self::builder();
        for (key, value) in vars {
            if let Some(rest) = key.strip_prefix(prefix) {
                if rest.is_empty() {
                    continue;
                }
                builder = builder.put(rest.to_lowercase().replace("__", "."), value);
            }
        }
        builder.build()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn get_as<T: FromStr>(&self, key: &str) -> Result<Option<T>, ClientError> {
        match self.get(key) {
            Some(raw) => raw.parse().map(Some).map_err(|_| invalid(key, raw)),
            None => Ok(None),
        }
    }

    /// Reads a human readable duration such as `30s` or `1m 30s`.
    pub fn get_duration(&self, key: &str) -> Result<Option<Duration>, ClientError> {
        match self.get(key) {
            Some(raw) => humantime::parse_duration(raw)
                .map(Some)
                .map_err(|_| invalid(key, raw)),
            None => Ok(None),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn invalid(key: &str, value: &str) -> ClientError {
    ClientError::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[derive(Debug, Default)]
pub struct SettingsBuilder {
    values: BTreeMap<String, String>,
}

impl SettingsBuilder {
    pub fn put(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Settings {
        Settings {
            values: self.values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let settings = Settings::default();
        assert!(settings.is_empty());
        assert_eq!(settings.len(), 0);
        assert_eq!(settings.get("cluster.name"), None);
    }

    #[test]
    fn test_typed_getters() {
        let settings = Settings::builder()
            .put("search.default_size", "25")
            .put("search.timeout", "1m 30s")
            .put("broken", "nope")
            .build();

        assert_eq!(settings.get_as::<usize>("search.default_size").unwrap(), Some(25));
        assert_eq!(
            settings.get_duration("search.timeout").unwrap(),
            Some(Duration::from_secs(90))
        );
        assert_eq!(settings.get_as::<usize>("missing").unwrap(), None);

        let err = settings.get_as::<u32>("broken").unwrap_err();
        assert!(matches!(err, ClientError::InvalidSetting { ref key, .. } if key == "broken"));
        assert!(settings.get_duration("broken").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_from_env_skips_non_unicode_variables() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        env::set_var("QBC_SETTINGS_TEST_BINARY", OsStr::from_bytes(b"\xff\xfe"));
        env::set_var("SETTINGS_TEST_UNRELATED", OsStr::from_bytes(b"\xff\xfe"));
        env::set_var("QBC_SETTINGS_TEST_NAME", "logs");

        let settings = Settings::from_env("QBC_SETTINGS_TEST_");

        assert_eq!(settings.get("name"), Some("logs"));
        assert_eq!(settings.get("binary"), None);
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn test_from_prefixed_pairs() {
        let vars = vec![
            ("QBC_CLUSTER__NAME".to_string(), "logs".to_string()),
            ("QBC_NODE".to_string(), "n1".to_string()),
            ("QBC_".to_string(), "ignored".to_string()),
            ("PATH".to_string(), "/usr/bin".to_string()),
        ];
        let settings = Settings::from_pairs("QBC_", vars);

        assert_eq!(settings.len(), 2);
        assert_eq!(settings.get("cluster.name"), Some("logs"));
        assert_eq!(settings.get("node"), Some("n1"));
        let keys: Vec<_> = settings.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["cluster.name", "node"]);
    }
}
