use serde::{Deserialize, Serialize};

use crate::domain::types::CompanyId;

/// Organization a customer belongs to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub company_id: CompanyId,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCompany {
    pub name: String,
}

impl NewCompany {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
