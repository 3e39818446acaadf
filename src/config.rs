//! Endpoint Configuration
//!
//! The remote table is addressed by a bearer token, a base id, and a table
//! id, baked in at compile time (the CSR build has no runtime environment).

use crate::api::ApiError;

pub const API_ROOT: &str = "https://api.airtable.com/v0";

/// Addressing for the remote todo table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub token: &'static str,
    pub base_id: &'static str,
    pub table_id: &'static str,
}

impl TableConfig {
    /// Read the three addressing values from compile-time env vars
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self {
            token: option_env!("AIRTABLE_TOKEN").ok_or(ApiError::MissingConfig("AIRTABLE_TOKEN"))?,
            base_id: option_env!("AIRTABLE_BASE_ID")
                .ok_or(ApiError::MissingConfig("AIRTABLE_BASE_ID"))?,
            table_id: option_env!("AIRTABLE_TABLE_ID")
                .ok_or(ApiError::MissingConfig("AIRTABLE_TABLE_ID"))?,
        })
    }

    /// Collection endpoint for the configured table
    pub fn endpoint(&self) -> String {
        format!("{}/{}/{}", API_ROOT, self.base_id, self.table_id)
    }

    /// Value for the Authorization header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config() -> TableConfig {
        TableConfig {
            token: "pat123",
            base_id: "appXYZ",
            table_id: "tblTodos",
        }
    }

    #[test]
    fn test_endpoint_joins_base_and_table() {
        let config = make_config();
        assert_eq!(
            config.endpoint(),
            "https://api.airtable.com/v0/appXYZ/tblTodos"
        );
    }

    #[test]
    fn test_bearer_header_value() {
        assert_eq!(make_config().bearer(), "Bearer pat123");
    }
}
