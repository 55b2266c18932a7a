//! Configuration for the Body Teardown Subsystem

use serde::{Deserialize, Serialize};

/// Teardown configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TeardownConfig {
    /// Suffix stripped from a body name to form its distant proxy key
    pub body_name_suffix: String,
    /// Proxy keys that differ from the body name, as `(body, proxy)`
    pub proxy_aliases: Vec<(String, String)>,
    /// Deactivate the first orbiter proxy mirroring a removed body
    pub deactivate_orbiter_proxies: bool,
    /// Schedule removal of distant proxies for every removed body
    pub schedule_distant_proxy_removal: bool,
}

impl Default for TeardownConfig {
    fn default() -> Self {
        Self {
            body_name_suffix: "_Body".to_string(),
            proxy_aliases: vec![
                ("TowerTwin".to_string(), "AshTwin".to_string()),
                ("CaveTwin".to_string(), "EmberTwin".to_string()),
            ],
            deactivate_orbiter_proxies: true,
            schedule_distant_proxy_removal: true,
        }
    }
}

impl TeardownConfig {
    /// Key under which the distant proxies of `body_name` are registered.
    pub fn distant_proxy_key(&self, body_name: &str) -> String {
        let base = body_name
            .strip_suffix(self.body_name_suffix.as_str())
            .unwrap_or(body_name);

        self.proxy_aliases
            .iter()
            .find(|(body, _)| body == base)
            .map(|(_, proxy)| proxy.clone())
            .unwrap_or_else(|| base.to_string())
    }
}
