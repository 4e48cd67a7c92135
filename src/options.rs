//! Normalization of the GUI app settings.
//!
//! Every recognized option is guaranteed to be present after [`update`], with
//! absent or empty values replaced by the option's default.

use crate::constants::{
    DEFAULT_API_PATH, DEFAULT_CHARMSTORE_URL, DEFAULT_IDENTITY_PATH, DEFAULT_IDENTITY_URL,
    DEFAULT_SOCKET_TEMPLATE,
};
use crate::settings::{setting_key, SettingValue, Settings};

/// Options whose values are stored as given.
pub(crate) const VALUE_OPTIONS: &[&str] = &[
    "auth",
    "base_url",
    "charmstore_url",
    "api_path",
    "identity_url",
    "identity_path",
    "GTM_enabled",
    "password",
    "user",
    "socketTemplate",
    "jem_url",
];

/// Options coerced to booleans, with their defaults.
pub(crate) const BOOL_OPTIONS: &[(&str, bool)] = &[
    ("interactive_login", false),
    ("sandbox", false),
    ("raw", false),
    ("combine", true),
    ("gzip", true),
    ("insecure", false),
];

/// Normalize and update the app settings in place.
pub(crate) fn update(settings: &mut Settings) {
    update_one(settings, "auth", SettingValue::Null, identity);
    update_one(settings, "base_url", "".into(), identity);
    update_one(settings, "charmstore_url", DEFAULT_CHARMSTORE_URL.into(), identity);
    update_one(settings, "api_path", DEFAULT_API_PATH.into(), identity);
    update_one(settings, "identity_url", DEFAULT_IDENTITY_URL.into(), identity);
    update_one(settings, "identity_path", DEFAULT_IDENTITY_PATH.into(), identity);
    update_one(settings, "GTM_enabled", false.into(), identity);
    update_one(settings, "password", SettingValue::Null, identity);
    update_one(settings, "user", SettingValue::Null, identity);
    update_one(settings, "socketTemplate", DEFAULT_SOCKET_TEMPLATE.into(), identity);
    update_one(settings, "jem_url", SettingValue::Null, identity);
    for &(name, default) in BOOL_OPTIONS {
        update_bool(settings, name, default);
    }
}

/// All option names [`update`] guarantees to be present.
pub(crate) fn recognized_options() -> impl Iterator<Item = &'static str> {
    VALUE_OPTIONS
        .iter()
        .copied()
        .chain(BOOL_OPTIONS.iter().map(|&(name, _)| name))
}

/// Set `name` to its current value, or `default` when absent or empty, passed
/// through `convert`.
pub(crate) fn update_one(
    settings: &mut Settings,
    name: &str,
    default: SettingValue,
    convert: impl FnOnce(SettingValue) -> SettingValue,
) {
    let key = setting_key(name);
    let value = match settings.remove(&key) {
        Some(v) if !v.is_empty() => v,
        _ => default,
    };
    settings.insert(key, convert(value));
}

pub(crate) fn update_bool(settings: &mut Settings, name: &str, default: bool) {
    update_one(settings, name, default.into(), to_bool);
}

fn identity(value: SettingValue) -> SettingValue {
    value
}

fn to_bool(value: SettingValue) -> SettingValue {
    SettingValue::Bool(value.as_bool())
}
