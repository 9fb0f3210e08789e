//! Route Configuration
//!
//! Endpoint paths and forgery-token conventions. Every field has a default
//! so the page only needs to override what differs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteConfig {
    /// Absolute origin prepended to every path (empty = paths used as-is)
    pub base_url: String,
    pub reading_path: String,
    pub finalize_path: String,
    pub lookup_path: String,
    /// Cookie holding the forgery-prevention token
    pub csrf_cookie: String,
    /// Request header the token is sent in
    pub csrf_header: String,
    /// Action of the route-edit form; the form is hidden when absent
    pub edit_action: Option<String>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            reading_path: "/guardar-lectura/".to_string(),
            finalize_path: "/finalizar-ruta/".to_string(),
            lookup_path: "/buscar-usuario/".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            edit_action: None,
        }
    }
}

impl RouteConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Join `base_url` and `path` with exactly one slash between them
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}
