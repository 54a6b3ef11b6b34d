use serde::Serialize;
use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "Name, email, and home country are required";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";

/// Per-field messages for a registration that lacks required input.
/// Fields that were supplied serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingFields {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub home_country: Option<&'static str>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Name, email, and home country are required")]
    MissingFields(MissingFields),
    #[error("Invalid email format")]
    InvalidEmail,
}
