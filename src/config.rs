use crate::constants::{DEFAULT_BIND_ADDR, ENV_PREFIX};
use crate::options::recognized_options;
use crate::settings::{setting_key, Settings};
use crate::util::parse_bool_loose;

pub(crate) struct AppConfig {
    pub(crate) bind: String,
    pub(crate) trust_proxy_headers: bool,
    /// Raw, not yet normalized, app settings.
    pub(crate) settings: Settings,
}

impl AppConfig {
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub(crate) fn from_env() -> Self {
        Self::from_vars(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    pub(crate) fn from_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut bind = None;
        let mut trust_proxy_headers = false;
        let mut settings = Settings::new();

        for (key, value) in vars {
            match key.as_str() {
                "BIND_ADDR" => bind = Some(value),
                "TRUST_PROXY_HEADERS" => trust_proxy_headers = parse_bool_loose(&value),
                _ => {
                    if let Some(suffix) = key
                        .strip_prefix(ENV_PREFIX)
                        .filter(|s| !s.is_empty())
                    {
                        settings.insert(setting_key(&option_name(suffix)), value.into());
                    }
                }
            }
        }

        Self {
            bind: bind
                .filter(|b| !b.is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            trust_proxy_headers,
            settings,
        }
    }
}

/// Map an env var suffix back to the option name, restoring mixed case for
/// known options (`SOCKETTEMPLATE` -> `socketTemplate`).
fn option_name(suffix: &str) -> String {
    recognized_options()
        .find(|name| name.eq_ignore_ascii_case(suffix))
        .map(str::to_string)
        .unwrap_or_else(|| suffix.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{get, SettingValue};

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_without_env() {
        let config = AppConfig::from_vars(Vec::new());
        assert_eq!(config.bind, "0.0.0.0:8080");
        assert!(!config.trust_proxy_headers);
        assert!(config.settings.is_empty());
    }

    #[test]
    fn reads_server_vars() {
        let config = AppConfig::from_vars(vars(&[
            ("BIND_ADDR", "127.0.0.1:6543"),
            ("TRUST_PROXY_HEADERS", "yes"),
        ]));
        assert_eq!(config.bind, "127.0.0.1:6543");
        assert!(config.trust_proxy_headers);
    }

    #[test]
    fn empty_bind_addr_uses_default() {
        let config = AppConfig::from_vars(vars(&[("BIND_ADDR", "")]));
        assert_eq!(config.bind, "0.0.0.0:8080");
    }

    #[test]
    fn maps_prefixed_vars_to_settings() {
        let config = AppConfig::from_vars(vars(&[
            ("JUJUGUI_SOCKETTEMPLATE", "/model/$uuid/api"),
            ("JUJUGUI_GTM_ENABLED", "true"),
            ("JUJUGUI_SANDBOX", "on"),
            ("JUJUGUI_EXTRA_THING", "x"),
            ("HOME", "/root"),
        ]));
        let settings = &config.settings;

        assert_eq!(
            get(settings, "socketTemplate"),
            Some(&SettingValue::from("/model/$uuid/api"))
        );
        assert_eq!(get(settings, "GTM_enabled"), Some(&SettingValue::from("true")));
        assert_eq!(get(settings, "sandbox"), Some(&SettingValue::from("on")));
        assert_eq!(get(settings, "extra_thing"), Some(&SettingValue::from("x")));
        assert_eq!(settings.len(), 4);
    }

    #[test]
    fn bare_prefix_is_ignored() {
        let config = AppConfig::from_vars(vars(&[("JUJUGUI_", "x")]));
        assert!(config.settings.is_empty());
        assert!(!config.settings.contains_key("jujugui."));
    }

    #[cfg(unix)]
    #[test]
    fn from_env_skips_non_utf8_vars() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let bad_value = "JUJUGUI_TEST_NON_UTF8_VALUE";
        std::env::set_var(bad_value, OsStr::from_bytes(b"\xff\xfe"));
        std::env::set_var(OsStr::from_bytes(b"UNRELATED_\xff"), "x");
        let config = AppConfig::from_env();
        std::env::remove_var(bad_value);
        std::env::remove_var(OsStr::from_bytes(b"UNRELATED_\xff"));

        assert!(!config
            .settings
            .contains_key(&setting_key("test_non_utf8_value")));
    }
}
