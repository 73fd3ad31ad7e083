//! Top-level application schema
//!
//! `MobileApp` is the versioned, platform-neutral document handed to
//! rendering clients. It is constructed fresh on every export call and never
//! persisted or mutated by this crate; ownership passes entirely to the
//! caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::navigation::Navigation;
use crate::models::page::Page;
use crate::models::theme::ThemeConfig;

/// Schema version stamped on every compiled app.
///
/// Bump only when the output shape changes in a way renderers must detect.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Both theme variants, always present together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppTheme {
    pub light: ThemeConfig,
    pub dark: ThemeConfig,
}

/// API connectivity defaults for the rendering client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout: u64,
    pub retry_attempts: u32,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
            timeout: 30_000,
            retry_attempts: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthEndpoints {
    pub login: String,
    pub logout: String,
    pub refresh: String,
    pub profile: String,
}

/// Fixed authentication block. Clients authenticate against the same JWT
/// endpoints regardless of tenant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    #[serde(rename = "type")]
    pub auth_type: String,
    pub endpoints: AuthEndpoints,
    pub token_storage: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            auth_type: "jwt".to_string(),
            endpoints: AuthEndpoints {
                login: "/auth/login".to_string(),
                logout: "/auth/logout".to_string(),
                refresh: "/auth/refresh".to_string(),
                profile: "/auth/profile".to_string(),
            },
            token_storage: "secure".to_string(),
        }
    }
}

/// Client capability switches. Dark mode ships enabled, everything else off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub dark_mode: bool,
    pub offline_mode: bool,
    pub push_notifications: bool,
    pub analytics: bool,
    pub biometric_auth: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        FeatureFlags {
            dark_mode: true,
            offline_mode: false,
            push_notifications: false,
            analytics: false,
            biometric_auth: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocalizationConfig {
    pub default_locale: String,
    pub supported_locales: Vec<String>,
    pub fallback_locale: String,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        LocalizationConfig {
            default_locale: "en".to_string(),
            supported_locales: vec!["en".to_string()],
            fallback_locale: "en".to_string(),
        }
    }
}

/// The complete compiled application schema.
///
/// `content_hash` is `None` only while the hash itself is being computed;
/// every app handed to a caller carries `Some`. Hashing runs over the
/// serialized form without the hash field, so attaching the hash does not
/// invalidate it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MobileApp {
    pub schema_version: String,
    pub app_id: String,
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    pub theme: AppTheme,
    pub navigation: Navigation,
    pub pages: Vec<Page>,
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub features: FeatureFlags,
    pub localization: LocalizationConfig,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_defaults_are_jwt_with_fixed_endpoints() {
        let auth = AuthConfig::default();
        assert_eq!(auth.auth_type, "jwt");
        assert_eq!(auth.endpoints.login, "/auth/login");
        assert_eq!(auth.endpoints.profile, "/auth/profile");
        assert_eq!(auth.token_storage, "secure");
    }

    #[test]
    fn feature_defaults_enable_only_dark_mode() {
        let features = FeatureFlags::default();
        assert!(features.dark_mode);
        assert!(!features.offline_mode);
        assert!(!features.push_notifications);
        assert!(!features.analytics);
        assert!(!features.biometric_auth);
    }

    #[test]
    fn api_config_applies_fixed_timeouts() {
        let api = ApiConfig::new("/api");
        assert_eq!(api.timeout, 30_000);
        assert_eq!(api.retry_attempts, 3);
    }
}
