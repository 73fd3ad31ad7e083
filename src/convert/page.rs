//! Page conversion

use crate::convert::component::convert_widget;
use crate::document::BuilderPage;
use crate::models::{Page, PageHeader};

/// Converts one builder page into a canonical page.
///
/// Top-level widgets convert in source order. The title falls back from
/// display name to name, the path from the source path to `/` + name.
/// Hidden pages convert without a header block; pages declaring a
/// permissions block (even an empty one) require authentication.
///
/// The activity filter is owned by the callers: this function converts
/// whatever page it is handed.
pub fn convert_page(page: &BuilderPage) -> Page {
    let title = page
        .display_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(&page.name)
        .to_string();
    let path = page
        .path
        .as_deref()
        .filter(|path| !path.is_empty())
        .map(|path| path.to_string())
        .unwrap_or_else(|| format!("/{}", page.name));

    let header = if page.is_hidden {
        None
    } else {
        Some(PageHeader {
            visible: true,
            title: Some(title.clone()),
            show_back_button: true,
        })
    };

    Page {
        id: page.id.clone(),
        name: page.name.clone(),
        title,
        description: page.description.clone(),
        path,
        icon: page.icon.clone(),
        components: page.widgets.iter().map(convert_widget).collect(),
        header,
        requires_auth: page.permissions.is_some(),
        permissions: page.permissions.clone(),
        created_at: page.created_at,
        updated_at: page.updated_at,
    }
}
