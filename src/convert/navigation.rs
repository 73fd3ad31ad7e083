//! Navigation synthesis
//!
//! Builds the app's navigation structure from the sidebar configuration and
//! the converted page list: drawer tree, initial page, optional login entry
//! and up to five bottom tabs.

use crate::document::{LoginPageConfig, SidebarItem};
use crate::models::{
    BottomTab, Navigation, NavigationBadge, NavigationItem, NavigationItemType, Page,
};

/// Rendering clients show at most this many bottom tabs.
pub const MAX_BOTTOM_TABS: usize = 5;

fn convert_sidebar_item(item: &SidebarItem) -> NavigationItem {
    let item_type = match item.item_type.as_str() {
        "divider" => NavigationItemType::Divider,
        "group" => NavigationItemType::Group,
        _ => NavigationItemType::Page,
    };
    let children: Vec<NavigationItem> = item.children.iter().map(convert_sidebar_item).collect();

    NavigationItem {
        id: item.id.clone(),
        item_type,
        label: item.name.clone(),
        icon: item.icon.clone(),
        page_id: item.page_id.clone(),
        children: if children.is_empty() { None } else { Some(children) },
        // Color alone produces a badge with empty text.
        // TODO: product decision pending on whether color-only items should
        // render a chip at all.
        badge: item
            .color
            .as_deref()
            .filter(|color| !color.is_empty())
            .map(|color| NavigationBadge {
                text: String::new(),
                color: color.to_string(),
            }),
    }
}

/// Synthesizes navigation from the sidebar and the converted pages.
///
/// The initial page is the post-login redirect when set and non-empty, else
/// the first page, else empty. `login_page` carries the literal route
/// `"login"` iff a login configuration was supplied; no page entity is
/// synthesized for it. Bottom tabs take the first [`MAX_BOTTOM_TABS`] pages
/// in page order and are omitted entirely when there are no pages.
pub fn build_navigation(
    sidebar_items: &[SidebarItem],
    pages: &[Page],
    login_page: Option<&LoginPageConfig>,
    post_login_redirect: Option<&str>,
) -> Navigation {
    let initial_page = post_login_redirect
        .filter(|id| !id.is_empty())
        .map(|id| id.to_string())
        .or_else(|| pages.first().map(|page| page.id.clone()))
        .unwrap_or_default();

    let bottom_tabs: Vec<BottomTab> = pages
        .iter()
        .take(MAX_BOTTOM_TABS)
        .map(|page| BottomTab {
            id: format!("tab-{}", page.id),
            label: page.title.clone(),
            icon: page.icon.clone(),
            page_id: page.id.clone(),
        })
        .collect();

    Navigation {
        initial_page,
        drawer: sidebar_items.iter().map(convert_sidebar_item).collect(),
        login_page: login_page.map(|_| "login".to_string()),
        bottom_tabs: if bottom_tabs.is_empty() { None } else { Some(bottom_tabs) },
    }
}
