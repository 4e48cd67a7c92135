use std::collections::BTreeMap;

use serde_json::Value;

use crate::constants::SETTINGS_PREFIX;
use crate::util::parse_bool_loose;

/// A raw or normalized app setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingValue {
    Null,
    Bool(bool),
    Str(String),
}

/// App settings keyed by their namespaced name (`jujugui.<option>`).
pub(crate) type Settings = BTreeMap<String, SettingValue>;

impl SettingValue {
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            SettingValue::Null => true,
            SettingValue::Str(s) => s.is_empty(),
            SettingValue::Bool(_) => false,
        }
    }

    pub(crate) fn as_bool(&self) -> bool {
        match self {
            SettingValue::Null => false,
            SettingValue::Bool(b) => *b,
            SettingValue::Str(s) => parse_bool_loose(s),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Str(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Str(value)
    }
}

impl From<&SettingValue> for Value {
    fn from(value: &SettingValue) -> Self {
        match value {
            SettingValue::Null => Value::Null,
            SettingValue::Bool(b) => Value::Bool(*b),
            SettingValue::Str(s) => Value::String(s.clone()),
        }
    }
}

pub(crate) fn setting_key(name: &str) -> String {
    format!("{SETTINGS_PREFIX}{name}")
}

pub(crate) fn get<'a>(settings: &'a Settings, name: &str) -> Option<&'a SettingValue> {
    settings.get(&setting_key(name))
}

pub(crate) fn get_str<'a>(settings: &'a Settings, name: &str) -> Option<&'a str> {
    match get(settings, name)? {
        SettingValue::Str(s) => Some(s.as_str()),
        _ => None,
    }
}

pub(crate) fn get_bool(settings: &Settings, name: &str) -> bool {
    get(settings, name).is_some_and(SettingValue::as_bool)
}
