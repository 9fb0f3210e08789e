//! Route Draft
//!
//! Checks run before the route-edit form is posted.

use crate::error::{RouteError, RouteResult};

pub const MIN_ROUTE_ACCOUNTS: usize = 2;
pub const ROUTE_NAME_REQUIRED: &str = "Por favor, ingrese un nombre para la ruta";
pub const ROUTE_TOO_SHORT: &str = "Una ruta debe contener al menos dos usuarios";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDraft {
    pub name: String,
    /// Account ids in visiting order
    pub order: Vec<String>,
}

impl RouteDraft {
    pub fn new<I, S>(name: impl Into<String>, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            order: order.into_iter().map(Into::into).collect(),
        }
    }

    pub fn validate(&self) -> RouteResult<()> {
        if self.name.trim().is_empty() {
            return Err(RouteError::Validation(ROUTE_NAME_REQUIRED.to_string()));
        }
        if self.order.len() < MIN_ROUTE_ACCOUNTS {
            return Err(RouteError::Validation(ROUTE_TOO_SHORT.to_string()));
        }
        Ok(())
    }

    /// Value of the hidden order field: comma-separated ids
    pub fn order_field(&self) -> String {
        self.order.join(",")
    }
}
