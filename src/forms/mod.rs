//! Form definitions backing the customer routes.

use thiserror::Error;

pub mod customers;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("malformed form body: {0}")]
    Malformed(#[from] serde::de::value::Error),

    #[error("invalid company id")]
    InvalidCompanyId,

    #[error("invalid employee id")]
    InvalidEmployeeId,
}
