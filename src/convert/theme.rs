//! Theme synthesis
//!
//! Each compiled app carries two complete themes, light and dark, derived
//! independently from the same branding input. Branding overrides a narrow,
//! explicit field list on top of the built-in palette; it is never a deep
//! merge of arbitrary keys.

use crate::document::BrandingConfig;
use crate::models::{
    ThemeBorderRadius, ThemeColors, ThemeConfig, ThemeMode, ThemeSpacing, ThemeTypography,
};

/// Built-in theme for the requested mode. Palettes differ per mode;
/// typography, spacing and radius scales are shared.
pub fn default_theme(mode: ThemeMode) -> ThemeConfig {
    let colors = match mode {
        ThemeMode::Light => ThemeColors {
            primary: "#1976D2".to_string(),
            secondary: "#9C27B0".to_string(),
            background: "#FFFFFF".to_string(),
            surface: "#F5F5F5".to_string(),
            text: "#212121".to_string(),
            text_secondary: "#757575".to_string(),
            border: "#E0E0E0".to_string(),
            error: "#D32F2F".to_string(),
            warning: "#F57C00".to_string(),
            success: "#388E3C".to_string(),
            info: "#0288D1".to_string(),
        },
        ThemeMode::Dark => ThemeColors {
            primary: "#90CAF9".to_string(),
            secondary: "#CE93D8".to_string(),
            background: "#121212".to_string(),
            surface: "#1E1E1E".to_string(),
            text: "#FFFFFF".to_string(),
            text_secondary: "#B0B0B0".to_string(),
            border: "#333333".to_string(),
            error: "#EF5350".to_string(),
            warning: "#FFB74D".to_string(),
            success: "#66BB6A".to_string(),
            info: "#4FC3F7".to_string(),
        },
    };

    ThemeConfig {
        mode,
        colors,
        typography: ThemeTypography {
            font_family: "Roboto".to_string(),
            base_font_size: 14,
            heading_scale: 1.25,
        },
        spacing: ThemeSpacing { base: 8, scale: 1.5 },
        border_radius: ThemeBorderRadius {
            small: 4,
            medium: 8,
            large: 16,
            full: 9999,
        },
    }
}

fn override_color(target: &mut String, value: Option<&str>) {
    if let Some(color) = value.filter(|color| !color.is_empty()) {
        *target = color.to_string();
    }
}

/// Applies branding on top of the default theme for one mode.
///
/// The override list is exact: primary, secondary, background (from the
/// body background), surface (from the top-menu background), text (from the
/// body text color), error (from the danger color), warning, and the font
/// family from global styling. Every other field keeps its default.
pub fn build_theme(branding: Option<&BrandingConfig>, mode: ThemeMode) -> ThemeConfig {
    let mut theme = default_theme(mode);
    let Some(branding) = branding else {
        return theme;
    };

    override_color(&mut theme.colors.primary, branding.primary_color.as_deref());
    override_color(&mut theme.colors.secondary, branding.secondary_color.as_deref());
    override_color(&mut theme.colors.background, branding.body_background.as_deref());
    override_color(&mut theme.colors.surface, branding.top_menu_background.as_deref());
    override_color(&mut theme.colors.text, branding.body_text_color.as_deref());
    override_color(&mut theme.colors.error, branding.danger_color.as_deref());
    override_color(&mut theme.colors.warning, branding.warning_color.as_deref());

    if let Some(font_family) = branding
        .global_styling
        .as_ref()
        .and_then(|styling| styling.font_family.as_deref())
        .filter(|font| !font.is_empty())
    {
        theme.typography.font_family = font_family.to_string();
    }

    theme
}
