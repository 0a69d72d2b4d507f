//! Configuration for the SmartSales service module

use serde::Deserialize;

/// SmartSales service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path prefix all routes are nested under
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,

    #[serde(default = "default_plugin_name")]
    pub plugin_name: String,

    #[serde(default = "default_plugin_version")]
    pub plugin_version: String,

    /// Public URL of the store
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Site name reported until one is stored
    #[serde(default = "default_site_name")]
    pub site_name: String,

    #[serde(default = "default_site_language")]
    pub site_language: String,

    /// Version of the host platform
    #[serde(default = "default_platform_version")]
    pub platform_version: String,

    /// Bearer token identities
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Static bearer-token identities
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    #[serde(default)]
    pub tokens: Vec<TokenIdentity>,
}

/// One token and the user it authenticates
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenIdentity {
    pub token: String,
    pub user_id: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            route_prefix: default_route_prefix(),
            plugin_name: default_plugin_name(),
            plugin_version: default_plugin_version(),
            site_url: default_site_url(),
            site_name: default_site_name(),
            site_language: default_site_language(),
            platform_version: default_platform_version(),
            auth: AuthConfig::default(),
        }
    }
}

fn default_route_prefix() -> String {
    "/ai-smart-sales/v1".to_string()
}

fn default_plugin_name() -> String {
    "AI Smart Sales".to_string()
}

fn default_plugin_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_site_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_site_name() -> String {
    "SmartSales Store".to_string()
}

fn default_site_language() -> String {
    "en-US".to_string()
}

fn default_platform_version() -> String {
    "unknown".to_string()
}
