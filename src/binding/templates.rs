//! Canned data bindings
//!
//! Templates for the conventional REST naming scheme used by the backing
//! API: a model named `tickets` is served at `/api/tickets`, detail at
//! `/api/tickets/:id`, search at `/api/tickets/search`. List-shaped
//! responses wrap their payload in a `data` envelope.

use crate::models::{BindingType, DataBinding, Pagination};

/// Factory for the standard binding shapes.
pub struct DataBindingTemplates;

impl DataBindingTemplates {
    /// List binding: `GET /api/{model}`, offset pagination, 20 per page.
    ///
    /// # Example
    /// ```
    /// use mobile_schema_sdk::binding::DataBindingTemplates;
    ///
    /// let binding = DataBindingTemplates::list("tickets");
    /// assert_eq!(binding.id, "tickets-list");
    /// assert_eq!(binding.source.as_deref(), Some("/api/tickets"));
    /// ```
    pub fn list(model: &str) -> DataBinding {
        let mut binding = DataBinding::new(format!("{}-list", model), BindingType::Api);
        binding.source = Some(format!("/api/{}", model));
        binding.method = Some("GET".to_string());
        binding.response_path = Some("data".to_string());
        binding.pagination = Some(Pagination::offset(20));
        binding
    }

    /// Detail binding: `GET /api/{model}/:id`.
    pub fn detail(model: &str) -> DataBinding {
        let mut binding = DataBinding::new(format!("{}-detail", model), BindingType::Api);
        binding.source = Some(format!("/api/{}/:id", model));
        binding.method = Some("GET".to_string());
        binding.response_path = Some("data".to_string());
        binding
    }

    /// Form submission binding: `POST /api/{model}`.
    pub fn form(model: &str) -> DataBinding {
        let mut binding = DataBinding::new(format!("{}-form", model), BindingType::Api);
        binding.source = Some(format!("/api/{}", model));
        binding.method = Some("POST".to_string());
        binding
    }

    /// Search binding: `GET /api/{model}/search`, page pagination, 20 per
    /// page.
    pub fn search(model: &str) -> DataBinding {
        let mut binding = DataBinding::new(format!("{}-search", model), BindingType::Api);
        binding.source = Some(format!("/api/{}/search", model));
        binding.method = Some("GET".to_string());
        binding.response_path = Some("data".to_string());
        binding.pagination = Some(Pagination::page(20));
        binding
    }

    /// Inline data binding referencing a named static dataset.
    pub fn static_data(name: &str) -> DataBinding {
        let mut binding = DataBinding::new(format!("{}-static", name), BindingType::Static);
        binding.source = Some(name.to_string());
        binding
    }

    /// Binding resolved from the client's runtime context (current user,
    /// tenant, locale).
    pub fn context(key: &str) -> DataBinding {
        let mut binding = DataBinding::new(format!("{}-context", key), BindingType::Context);
        binding.source = Some(key.to_string());
        binding
    }

    /// Binding resolved from a navigation parameter.
    pub fn parameter(name: &str) -> DataBinding {
        let mut binding = DataBinding::new(format!("{}-parameter", name), BindingType::Parameter);
        binding.source = Some(name.to_string());
        binding
    }
}
