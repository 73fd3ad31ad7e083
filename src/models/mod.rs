//! Models module for the SDK
//!
//! Defines the canonical mobile app schema structures produced by the
//! compilation pipeline. These are the platform-neutral types that native
//! renderers consume; they never reference the editor's widget format.

pub mod app;
pub mod binding;
pub mod component;
pub mod navigation;
pub mod page;
pub mod theme;

pub use app::{
    ApiConfig, AppTheme, AuthConfig, AuthEndpoints, FeatureFlags, LocalizationConfig, MobileApp,
    SCHEMA_VERSION,
};
pub use binding::{BindingType, DataBinding, Pagination};
pub use component::{Component, ComponentType, Style, StyleValue};
pub use navigation::{BottomTab, Navigation, NavigationBadge, NavigationItem, NavigationItemType};
pub use page::{Page, PageHeader};
pub use theme::{
    ThemeBorderRadius, ThemeColors, ThemeConfig, ThemeMode, ThemeSpacing, ThemeTypography,
};
