//! Customer create/edit form parsing.
//!
//! Browsers submit a multi-select as repeated `employees` keys: none when
//! nothing is selected, one when a single employee is picked, many otherwise.
//! [`CustomerForm`] always deserializes that field into a list.

use serde::Deserialize;

use crate::{
    domain::{
        customer::{NewCustomer, UpdateCustomer},
        types::{CompanyId, EmployeeId},
    },
    forms::FormError,
};

/// Raw urlencoded body of the create and edit forms.
#[derive(Debug, Deserialize)]
pub struct CustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: i32,
    #[serde(default)]
    pub employees: Vec<i32>,
}

impl CustomerForm {
    /// Parses an `application/x-www-form-urlencoded` body.
    pub fn from_bytes(body: &[u8]) -> Result<Self, FormError> {
        Ok(serde_html_form::from_bytes(body)?)
    }
}

/// Typed customer fields plus the deduplicated set of employees to link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerPayload {
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: CompanyId,
    pub employee_ids: Vec<EmployeeId>,
}

impl TryFrom<CustomerForm> for CustomerPayload {
    type Error = FormError;

    fn try_from(form: CustomerForm) -> Result<Self, Self::Error> {
        let company_id =
            CompanyId::new(form.company_id).map_err(|_| FormError::InvalidCompanyId)?;

        let mut employee_ids = form
            .employees
            .into_iter()
            .map(|id| EmployeeId::new(id).map_err(|_| FormError::InvalidEmployeeId))
            .collect::<Result<Vec<EmployeeId>, FormError>>()?;
        employee_ids.sort_unstable();
        employee_ids.dedup();

        Ok(Self {
            first_name: form.first_name,
            last_name: form.last_name,
            rating: form.rating,
            company_id,
            employee_ids,
        })
    }
}

impl CustomerPayload {
    pub fn into_new_customer(self) -> (NewCustomer, Vec<EmployeeId>) {
        let customer = NewCustomer::new(
            self.first_name,
            self.last_name,
            self.rating,
            self.company_id,
        );
        (customer, self.employee_ids)
    }

    pub fn into_update_customer(self) -> (UpdateCustomer, Vec<EmployeeId>) {
        let customer = UpdateCustomer::new(
            self.first_name,
            self.last_name,
            self.rating,
            self.company_id,
        );
        (customer, self.employee_ids)
    }
}
