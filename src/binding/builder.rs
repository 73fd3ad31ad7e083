//! Fluent data binding construction

use std::collections::BTreeMap;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{BindingType, DataBinding, Pagination};

/// Contract violation while finalizing a binding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    #[error("Binding type is required")]
    MissingType,

    #[error("Binding source is required")]
    MissingSource,
}

/// Fluent builder for [`DataBinding`].
///
/// A binding has many optional, interdependent fields; the builder collects
/// them one call at a time and [`build`](Self::build) enforces the one hard
/// precondition: `binding_type` and `source` must both be set. When no id is
/// supplied, a deterministic UUID v5 is derived from the type and source so
/// the same binding always gets the same id.
///
/// # Example
/// ```
/// use mobile_schema_sdk::binding::DataSourceBuilder;
/// use mobile_schema_sdk::models::BindingType;
///
/// let binding = DataSourceBuilder::new()
///     .binding_type(BindingType::Api)
///     .source("/api/tickets")
///     .method("GET")
///     .response_path("data")
///     .cache(300)
///     .offset_pagination(20)
///     .build()
///     .unwrap();
/// assert_eq!(binding.source.as_deref(), Some("/api/tickets"));
/// assert_eq!(binding.cache, Some(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataSourceBuilder {
    id: Option<String>,
    binding_type: Option<BindingType>,
    source: Option<String>,
    method: Option<String>,
    headers: BTreeMap<String, String>,
    response_path: Option<String>,
    cache: Option<bool>,
    cache_ttl: Option<u64>,
    refresh_interval: Option<u64>,
    pagination: Option<Pagination>,
    transform: Option<String>,
}

impl DataSourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit binding id, overriding the derived one.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn binding_type(mut self, binding_type: BindingType) -> Self {
        self.binding_type = Some(binding_type);
        self
    }

    /// Sets the data source: an endpoint path for `api` bindings, a key or
    /// name for the other binding types.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Adds one HTTP header. Repeated calls accumulate.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the path at which the payload sits inside the response body.
    pub fn response_path(mut self, path: impl Into<String>) -> Self {
        self.response_path = Some(path.into());
        self
    }

    /// Enables caching with the given time-to-live in seconds.
    pub fn cache(mut self, ttl_secs: u64) -> Self {
        self.cache = Some(true);
        self.cache_ttl = Some(ttl_secs);
        self
    }

    /// Asks the client to re-fetch every `interval_ms` milliseconds.
    pub fn refresh_every(mut self, interval_ms: u64) -> Self {
        self.refresh_interval = Some(interval_ms);
        self
    }

    pub fn offset_pagination(mut self, page_size: u32) -> Self {
        self.pagination = Some(Pagination::offset(page_size));
        self
    }

    pub fn page_pagination(mut self, page_size: u32) -> Self {
        self.pagination = Some(Pagination::page(page_size));
        self
    }

    pub fn cursor_pagination(mut self, page_size: u32, cursor_path: impl Into<String>) -> Self {
        self.pagination = Some(Pagination::cursor(page_size, cursor_path));
        self
    }

    /// Names a client-side transform to apply to the fetched data.
    pub fn transform(mut self, expression: impl Into<String>) -> Self {
        self.transform = Some(expression.into());
        self
    }

    /// Finalizes the binding.
    ///
    /// # Returns
    /// The built binding, or a [`BindingError`] when `binding_type` or
    /// `source` was never supplied
    pub fn build(self) -> Result<DataBinding, BindingError> {
        let binding_type = self.binding_type.ok_or(BindingError::MissingType)?;
        let source = self.source.ok_or(BindingError::MissingSource)?;
        let id = self.id.unwrap_or_else(|| {
            let key = format!("{}:{}", binding_type.as_str(), source);
            Uuid::new_v5(&Uuid::NAMESPACE_DNS, key.as_bytes()).to_string()
        });

        Ok(DataBinding {
            id,
            binding_type,
            source: Some(source),
            method: self.method,
            headers: if self.headers.is_empty() {
                None
            } else {
                Some(self.headers)
            },
            response_path: self.response_path,
            cache: self.cache,
            cache_ttl: self.cache_ttl,
            refresh_interval: self.refresh_interval,
            pagination: self.pagination,
            transform: self.transform,
        })
    }
}
