pub(crate) const SETTINGS_PREFIX: &str = "jujugui.";
pub(crate) const ENV_PREFIX: &str = "JUJUGUI_";

/// Base URL of the hosted Juju services, as a literal for `concat!`.
macro_rules! api_url {
    () => {
        "https://api.jujucharms.com/"
    };
}

pub(crate) const DEFAULT_CHARMSTORE_URL: &str = concat!(api_url!(), "charmstore/");
pub(crate) const DEFAULT_API_PATH: &str = "v4";
pub(crate) const DEFAULT_IDENTITY_URL: &str = concat!(api_url!(), "identity/");
pub(crate) const DEFAULT_IDENTITY_PATH: &str = "v1";
pub(crate) const DEFAULT_SOCKET_TEMPLATE: &str = "/environment/$uuid/api";

pub(crate) const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub(crate) const GLOBAL_RATE_LIMIT_RPS: u64 = 10;
pub(crate) const GLOBAL_RATE_LIMIT_BURST: u32 = 30;
