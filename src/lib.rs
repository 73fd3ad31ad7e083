//! Mobile Schema SDK - compiles page-builder documents into the canonical
//! mobile app schema
//!
//! Provides unified interfaces for:
//! - Parsing editor-authored builder documents and branding configuration
//! - Widget/page conversion into canonical components and pages
//! - Navigation, theme and app assembly with content hashing
//! - Export in full/page/component scopes behind a failure boundary
//! - Data binding construction (fluent builder + REST templates)
//!
//! The compiler is purely synchronous and stateless: every entry point is a
//! pure function of its inputs, safe to call concurrently.

pub mod binding;
pub mod convert;
pub mod document;
pub mod export;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use binding::{BindingError, DataBindingTemplates, DataSourceBuilder};
pub use convert::{
    assemble_app, build_navigation, build_theme, content_hash, convert_page, convert_widget,
    map_widget_type, normalize_style,
};
pub use document::{
    BrandingConfig, BuilderDocument, BuilderPage, GlobalStyling, LoginPageConfig, SidebarItem,
    Widget,
};
pub use export::{ExportError, ExportFormat, ExportOptions, ExportResult, SchemaExporter};
pub use validation::{validate_document, DocumentError, MAX_WIDGET_DEPTH};

// Re-export models
pub use models::{
    ApiConfig, AppTheme, AuthConfig, AuthEndpoints, BindingType, BottomTab, Component,
    ComponentType, DataBinding, FeatureFlags, LocalizationConfig, MobileApp, Navigation,
    NavigationBadge, NavigationItem, NavigationItemType, Page, PageHeader, Pagination, Style,
    StyleValue, ThemeBorderRadius, ThemeColors, ThemeConfig, ThemeMode, ThemeSpacing,
    ThemeTypography, SCHEMA_VERSION,
};
