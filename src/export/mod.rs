//! Export pipeline
//!
//! Serializes a compiled schema for one of three scopes:
//! - `full` - the whole app
//! - `page` - a subset of pages selected by id
//! - `component` - every top-level widget flattened into one container
//!
//! The pipeline is a failure boundary: every error on any path is caught
//! and reported through [`ExportResult`], never propagated to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::convert::{assemble_app, convert_page, convert_widget};
use crate::document::{BrandingConfig, BuilderDocument};
use crate::models::{Component, ComponentType};
use crate::validation::{validate_document, DocumentError};

/// Export scope.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Full,
    Page,
    Component,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No pages found with the specified IDs")]
    PagesNotFound,

    #[error("Invalid document: {0}")]
    InvalidDocument(#[from] DocumentError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Options controlling one export call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub app_id: String,
    pub app_name: String,
    pub version: String,
    pub api_base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    pub format: ExportFormat,
    /// Page filter for [`ExportFormat::Page`]; ignored by other scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_ids: Option<Vec<String>>,
    pub minify: bool,
    /// Pins the generation timestamp; defaults to now. Pinning makes the
    /// output (and its content hash) reproducible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl ExportOptions {
    /// Creates options for a full, pretty-printed export with version
    /// `1.0.0` against the `/api` base URL.
    pub fn new(app_id: impl Into<String>, app_name: impl Into<String>) -> Self {
        ExportOptions {
            app_id: app_id.into(),
            app_name: app_name.into(),
            version: "1.0.0".to_string(),
            api_base_url: "/api".to_string(),
            organization_id: None,
            space_id: None,
            format: ExportFormat::Full,
            page_ids: None,
            minify: false,
            generated_at: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_api_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    pub fn with_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    pub fn with_space(mut self, space_id: impl Into<String>) -> Self {
        self.space_id = Some(space_id.into());
        self
    }

    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_page_ids(mut self, page_ids: Vec<String>) -> Self {
        self.page_ids = Some(page_ids);
        self
    }

    /// Serializes without whitespace.
    pub fn minified(mut self) -> Self {
        self.minify = true;
        self
    }

    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }
}

/// Outcome envelope of one export call.
///
/// `data` carries the serialized JSON on success; `size` is its length in
/// characters. On failure `data` is absent, `size` is zero and `error`
/// explains what went wrong.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    pub format: ExportFormat,
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Schema exporter
pub struct SchemaExporter;

impl SchemaExporter {
    /// Exports a builder document in the scope selected by `options`.
    ///
    /// Callers must check [`ExportResult::success`]; this function never
    /// returns an error. Structural validation runs first, so hostile
    /// nesting or duplicate page ids surface as failure results rather
    /// than stack exhaustion or garbage output.
    ///
    /// # Arguments
    /// * `document` - The page-builder document to compile
    /// * `branding` - Optional tenant branding overlaid onto the themes
    /// * `options` - Scope, identity and serialization options
    ///
    /// # Returns
    /// The export outcome with the serialized schema on success
    ///
    /// # Example
    /// ```
    /// use mobile_schema_sdk::document::{BuilderDocument, BuilderPage};
    /// use mobile_schema_sdk::export::{ExportOptions, SchemaExporter};
    ///
    /// let document = BuilderDocument {
    ///     pages: vec![BuilderPage::new("p1", "home")],
    ///     ..Default::default()
    /// };
    /// let options = ExportOptions::new("app-1", "Field App");
    /// let result = SchemaExporter::export(&document, None, &options);
    /// assert!(result.success);
    /// ```
    pub fn export(
        document: &BuilderDocument,
        branding: Option<&BrandingConfig>,
        options: &ExportOptions,
    ) -> ExportResult {
        match Self::render(document, branding, options) {
            Ok(data) => {
                let size = data.chars().count();
                debug!("Exported {:?} scope ({} characters)", options.format, size);
                ExportResult {
                    success: true,
                    data: Some(data),
                    format: options.format,
                    size,
                    error: None,
                }
            }
            Err(e) => {
                warn!("Schema export failed: {}", e);
                ExportResult {
                    success: false,
                    data: None,
                    format: options.format,
                    size: 0,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    fn render(
        document: &BuilderDocument,
        branding: Option<&BrandingConfig>,
        options: &ExportOptions,
    ) -> Result<String, ExportError> {
        validate_document(document)?;

        let value = match options.format {
            ExportFormat::Full => serde_json::to_value(assemble_app(document, branding, options))?,
            ExportFormat::Page => Self::render_pages(document, branding, options)?,
            ExportFormat::Component => serde_json::to_value(Self::flatten_components(document))?,
        };

        let data = if options.minify {
            serde_json::to_string(&value)?
        } else {
            serde_json::to_string_pretty(&value)?
        };
        Ok(data)
    }

    // A single matching page exports as a bare Page; several export as a
    // full app whose pages are just the matches. Callers discriminate by
    // shape.
    fn render_pages(
        document: &BuilderDocument,
        branding: Option<&BrandingConfig>,
        options: &ExportOptions,
    ) -> Result<Value, ExportError> {
        let requested = options.page_ids.as_deref().unwrap_or_default();
        let matching: Vec<&_> = document
            .pages
            .iter()
            .filter(|page| page.is_active && requested.contains(&page.id))
            .collect();

        if matching.is_empty() {
            return Err(ExportError::PagesNotFound);
        }
        if matching.len() == 1 {
            return Ok(serde_json::to_value(convert_page(matching[0]))?);
        }

        let subset = BuilderDocument {
            pages: matching.into_iter().cloned().collect(),
            ..document.clone()
        };
        Ok(serde_json::to_value(assemble_app(&subset, branding, options))?)
    }

    fn flatten_components(document: &BuilderDocument) -> Component {
        let children: Vec<Component> = document
            .pages
            .iter()
            .filter(|page| page.is_active)
            .flat_map(|page| page.widgets.iter().map(convert_widget))
            .collect();

        let mut root = Component::new("root", ComponentType::Container, "Components");
        if !children.is_empty() {
            root.children = Some(children);
        }
        root
    }
}
