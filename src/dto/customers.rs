//! DTOs used by the customer pages.

use crate::domain::company::Company;
use crate::domain::customer::{Customer, CustomerWithCompany};
use crate::domain::employee::Employee;
use crate::domain::types::EmployeeId;

/// Data required to render the customers list.
#[derive(Debug)]
pub struct CustomersPageData {
    /// Customers joined with their company name, ordered by first name.
    pub customers: Vec<CustomerWithCompany>,
}

/// Options for the company selector and employee multi-select.
#[derive(Debug)]
pub struct CreateCustomerPageData {
    pub companies: Vec<Company>,
    pub employees: Vec<Employee>,
}

/// Data required to render the edit form with current selections.
#[derive(Debug)]
pub struct EditCustomerPageData {
    pub customer: Customer,
    pub companies: Vec<Company>,
    pub employees: Vec<Employee>,
    /// Employees currently in a sales relationship with the customer.
    pub employee_ids: Vec<EmployeeId>,
}

/// Data displayed on the delete confirmation page.
#[derive(Debug)]
pub struct DeleteCustomerPageData {
    pub customer: Customer,
}
