//! Persistence boundary for customers, companies and employees.
//!
//! Services depend on the reader/writer traits only; [`DieselRepository`] is
//! the production implementation backed by the SQLite pool.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::company::{Company, NewCompany};
use crate::domain::customer::{
    Customer, CustomerDeletion, CustomerWithCompany, NewCustomer, UpdateCustomer,
};
use crate::domain::employee::{Employee, NewEmployee};
use crate::domain::types::{CustomerId, EmployeeId};
use crate::repository::errors::RepositoryResult;

pub mod company;
pub mod customer;
pub mod employee;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed repository sharing a connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
    /// All customers with their company name, ordered by first name.
    fn list_customers(&self) -> RepositoryResult<Vec<CustomerWithCompany>>;
    fn list_customer_employee_ids(&self, id: CustomerId) -> RepositoryResult<Vec<EmployeeId>>;
}

pub trait CustomerWriter {
    /// Inserts the customer and its sales relationships atomically.
    fn create_customer(
        &self,
        new_customer: &NewCustomer,
        employee_ids: &[EmployeeId],
    ) -> RepositoryResult<Customer>;
    /// Updates the customer and replaces its sales relationships atomically.
    fn update_customer(
        &self,
        id: CustomerId,
        updates: &UpdateCustomer,
        employee_ids: &[EmployeeId],
    ) -> RepositoryResult<Customer>;
    /// Deletes the customer unless an employee still references it.
    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<CustomerDeletion>;
}

pub trait CompanyReader {
    fn list_companies(&self) -> RepositoryResult<Vec<Company>>;
}

pub trait CompanyWriter {
    fn create_company(&self, new_company: &NewCompany) -> RepositoryResult<Company>;
}

pub trait EmployeeReader {
    fn list_employees(&self) -> RepositoryResult<Vec<Employee>>;
}

pub trait EmployeeWriter {
    fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
}
