use serde_json::{Map, Value};

use crate::error::AppError;
use crate::settings::{get, get_bool, Settings};

/// `juju_config` keys sourced from app settings, in output order.
const SETTING_KEYS: &[(&str, &str)] = &[
    ("baseUrl", "base_url"),
    ("charmstoreURL", "charmstore_url"),
    ("charmstoreAPIPath", "api_path"),
    ("identityURL", "identity_url"),
    ("identityAPIPath", "identity_path"),
    ("socketTemplate", "socketTemplate"),
];

const AUTH_KEYS: &[(&str, &str)] = &[
    ("jemURL", "jem_url"),
    ("auth", "auth"),
    ("user", "user"),
    ("password", "password"),
    ("GTM_enabled", "GTM_enabled"),
    ("interactiveLogin", "interactive_login"),
    ("sandbox", "sandbox"),
];

/// Build the `juju_config` object from normalized settings.
pub(crate) fn juju_config(settings: &Settings) -> Map<String, Value> {
    let mut config = Map::new();

    for &(key, name) in SETTING_KEYS {
        copy_setting(&mut config, settings, key, name);
    }
    let protocol = if get_bool(settings, "insecure") { "ws" } else { "wss" };
    config.insert("socket_protocol".to_string(), Value::from(protocol));
    for &(key, name) in AUTH_KEYS {
        copy_setting(&mut config, settings, key, name);
    }

    config.insert("html5".to_string(), Value::Bool(true));
    config.insert("container".to_string(), Value::from("#main"));
    config.insert("viewContainer".to_string(), Value::from("#main"));
    config.insert("consoleEnabled".to_string(), Value::Bool(true));
    config.insert("serverRouting".to_string(), Value::Bool(false));
    config
}

/// Render the `juju_config` script served to the browser.
pub(crate) fn render_config_js(settings: &Settings) -> Result<String, AppError> {
    let body = serde_json::to_string_pretty(&juju_config(settings))
        .map_err(|e| AppError::Internal(format!("Failed to encode juju_config: {e}")))?;
    Ok(format!("var juju_config = {body};\n"))
}

fn copy_setting(config: &mut Map<String, Value>, settings: &Settings, key: &str, name: &str) {
    let value = get(settings, name).map_or(Value::Null, Value::from);
    config.insert(key.to_string(), value);
}
