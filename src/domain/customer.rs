use serde::{Deserialize, Serialize};

use crate::domain::types::{CompanyId, CustomerId};

/// Sales contact tied to exactly one company.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: CompanyId,
}

/// Customer row joined with the display name of its company.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CustomerWithCompany {
    #[serde(flatten)]
    pub customer: Customer,
    pub company_name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: CompanyId,
}

impl NewCustomer {
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        rating: i32,
        company_id: CompanyId,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            rating,
            company_id,
        }
    }
}

/// Editable fields of an existing customer.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UpdateCustomer {
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: CompanyId,
}

impl UpdateCustomer {
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        rating: i32,
        company_id: CompanyId,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            rating,
            company_id,
        }
    }
}

/// Result of a guarded customer delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustomerDeletion {
    /// The customer row was removed.
    Deleted,
    /// At least one employee still holds a sales relationship with the customer.
    InSalesRelationship,
}
