use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerId, EmployeeId};

/// Staff member that may hold sales relationships with customers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
}

impl NewEmployee {
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Sales relationship between an employee and a customer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeCustomer {
    pub employee_id: EmployeeId,
    pub customer_id: CustomerId,
}
