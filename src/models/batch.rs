use serde::Serialize;

use super::{is_valid_first_name, is_valid_last_name, is_valid_phone};

/// A candidate contact awaiting validation.
///
/// Console input only carries (name, phone); CSV rows may also carry a last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone: String,
}

impl BatchEntry {
    pub fn new(first_name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: None,
            phone: phone.into(),
        }
    }

    pub fn with_last_name(mut self, last_name: Option<String>) -> Self {
        self.last_name = last_name;
        self
    }

    pub fn is_valid(&self) -> bool {
        is_valid_phone(&self.phone)
            && is_valid_first_name(&self.first_name)
            && self.last_name.as_deref().map_or(true, is_valid_last_name)
    }
}

/// Outcome of one bulk operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub accepted_count: usize,
    /// Rejected entries as (name, phone), in input order.
    pub rejected: Vec<(String, String)>,
}

impl BatchResult {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}
