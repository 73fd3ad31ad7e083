//! App assembly and content hashing
//!
//! Composes converted pages, navigation and both theme variants with the
//! fixed api/auth/features/localization blocks into one [`MobileApp`], then
//! computes and attaches the content hash used for change detection.

use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::convert::navigation::build_navigation;
use crate::convert::page::convert_page;
use crate::convert::theme::build_theme;
use crate::document::{BrandingConfig, BuilderDocument};
use crate::export::ExportOptions;
use crate::models::{
    ApiConfig, AppTheme, AuthConfig, FeatureFlags, LocalizationConfig, MobileApp, ThemeMode,
    SCHEMA_VERSION,
};

/// Computes the content hash of an assembled app.
///
/// Hashes the canonical serialized form with `content_hash` unset, so the
/// stored hash never feeds back into itself. Identical content produces an
/// identical hash regardless of platform; any content change produces a
/// different one. The hash is a cache key for change detection, not an
/// integrity seal.
pub fn content_hash(app: &MobileApp) -> String {
    let mut subject = app.clone();
    subject.content_hash = None;
    let serialized = match serde_json::to_string(&subject) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to serialize app for hashing: {}", e);
            return String::new();
        }
    };
    let mut hasher = Sha256::new();
    hasher.update(serialized.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Assembles the complete app schema from a builder document.
///
/// Inactive pages are filtered out before conversion; they never appear in
/// the output in any form. `updated_at` comes from
/// [`ExportOptions::generated_at`] when set, letting callers pin the
/// timestamp for reproducible output, and defaults to the current time.
pub fn assemble_app(
    document: &BuilderDocument,
    branding: Option<&BrandingConfig>,
    options: &ExportOptions,
) -> MobileApp {
    let pages: Vec<_> = document
        .pages
        .iter()
        .filter(|page| page.is_active)
        .map(convert_page)
        .collect();

    let navigation = build_navigation(
        &document.sidebar_items,
        &pages,
        document.login_page.as_ref(),
        document.post_login_redirect.as_deref(),
    );

    let mut app = MobileApp {
        schema_version: SCHEMA_VERSION.to_string(),
        app_id: options.app_id.clone(),
        name: options.app_name.clone(),
        version: options.version.clone(),
        organization_id: options.organization_id.clone(),
        space_id: options.space_id.clone(),
        theme: AppTheme {
            light: build_theme(branding, ThemeMode::Light),
            dark: build_theme(branding, ThemeMode::Dark),
        },
        navigation,
        pages,
        api: ApiConfig::new(options.api_base_url.clone()),
        auth: AuthConfig::default(),
        features: FeatureFlags::default(),
        localization: LocalizationConfig::default(),
        updated_at: options.generated_at.unwrap_or_else(Utc::now),
        content_hash: None,
    };
    app.content_hash = Some(content_hash(&app));

    info!(
        "Assembled app schema '{}' with {} pages",
        app.app_id,
        app.pages.len()
    );
    app
}
