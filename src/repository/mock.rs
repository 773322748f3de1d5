//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::company::{Company, NewCompany};
use crate::domain::customer::{
    Customer, CustomerDeletion, CustomerWithCompany, NewCustomer, UpdateCustomer,
};
use crate::domain::employee::{Employee, NewEmployee};
use crate::domain::types::{CustomerId, EmployeeId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CompanyReader, CompanyWriter, CustomerReader, CustomerWriter, EmployeeReader, EmployeeWriter,
};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
        fn list_customers(&self) -> RepositoryResult<Vec<CustomerWithCompany>>;
        fn list_customer_employee_ids(&self, id: CustomerId) -> RepositoryResult<Vec<EmployeeId>>;
    }

    impl CustomerWriter for Repository {
        fn create_customer(
            &self,
            new_customer: &NewCustomer,
            employee_ids: &[EmployeeId],
        ) -> RepositoryResult<Customer>;
        fn update_customer(
            &self,
            id: CustomerId,
            updates: &UpdateCustomer,
            employee_ids: &[EmployeeId],
        ) -> RepositoryResult<Customer>;
        fn delete_customer(&self, id: CustomerId) -> RepositoryResult<CustomerDeletion>;
    }

    impl CompanyReader for Repository {
        fn list_companies(&self) -> RepositoryResult<Vec<Company>>;
    }

    impl CompanyWriter for Repository {
        fn create_company(&self, new_company: &NewCompany) -> RepositoryResult<Company>;
    }

    impl EmployeeReader for Repository {
        fn list_employees(&self) -> RepositoryResult<Vec<Employee>>;
    }

    impl EmployeeWriter for Repository {
        fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
    }
}
