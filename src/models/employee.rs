//! Diesel models representing employees and their sales relationships.

use diesel::prelude::*;

use crate::domain::employee::{
    Employee as DomainEmployee, EmployeeCustomer as DomainEmployeeCustomer,
    NewEmployee as DomainNewEmployee,
};
use crate::domain::types::{CustomerId, EmployeeId, TypeConstraintError};
use crate::models::customer::Customer;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::employees)]
#[diesel(primary_key(employee_id))]
/// Diesel model for [`crate::domain::employee::Employee`].
pub struct Employee {
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::employees)]
/// Insertable form of [`Employee`].
pub struct NewEmployee<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

#[derive(Debug, Clone, Queryable, Associations, Identifiable)]
#[diesel(primary_key(employee_id, customer_id))]
#[diesel(belongs_to(Employee, foreign_key = employee_id))]
#[diesel(belongs_to(Customer, foreign_key = customer_id))]
#[diesel(table_name = crate::schema::employee_customer)]
/// Association table linking employees to the customers they sell to.
pub struct EmployeeCustomer {
    pub employee_id: i32,
    pub customer_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::employee_customer)]
/// Insertable variant of [`EmployeeCustomer`].
pub struct NewEmployeeCustomer {
    pub employee_id: i32,
    pub customer_id: i32,
}

impl TryFrom<Employee> for DomainEmployee {
    type Error = TypeConstraintError;

    fn try_from(employee: Employee) -> Result<Self, Self::Error> {
        Ok(Self {
            employee_id: EmployeeId::try_from(employee.employee_id)?,
            first_name: employee.first_name,
            last_name: employee.last_name,
        })
    }
}

impl<'a> From<&'a DomainNewEmployee> for NewEmployee<'a> {
    fn from(employee: &'a DomainNewEmployee) -> Self {
        Self {
            first_name: employee.first_name.as_str(),
            last_name: employee.last_name.as_str(),
        }
    }
}

impl TryFrom<EmployeeCustomer> for DomainEmployeeCustomer {
    type Error = TypeConstraintError;

    fn try_from(link: EmployeeCustomer) -> Result<Self, Self::Error> {
        Ok(Self {
            employee_id: EmployeeId::try_from(link.employee_id)?,
            customer_id: CustomerId::try_from(link.customer_id)?,
        })
    }
}

impl From<DomainEmployeeCustomer> for NewEmployeeCustomer {
    fn from(link: DomainEmployeeCustomer) -> Self {
        Self {
            employee_id: link.employee_id.get(),
            customer_id: link.customer_id.get(),
        }
    }
}
