//! Diesel models representing customers.

use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};
use crate::domain::types::{CompanyId, CustomerId, TypeConstraintError};
use crate::models::company::Company;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(primary_key(customer_id))]
#[diesel(belongs_to(Company, foreign_key = company_id))]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub rating: i32,
    pub company_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
/// Data used when updating a [`Customer`] record.
pub struct UpdateCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub rating: i32,
    pub company_id: i32,
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(customer: Customer) -> Result<Self, Self::Error> {
        Ok(Self {
            customer_id: CustomerId::try_from(customer.customer_id)?,
            first_name: customer.first_name,
            last_name: customer.last_name,
            rating: customer.rating,
            company_id: CompanyId::try_from(customer.company_id)?,
        })
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainNewCustomer) -> Self {
        Self {
            first_name: customer.first_name.as_str(),
            last_name: customer.last_name.as_str(),
            rating: customer.rating,
            company_id: customer.company_id.get(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCustomer> for UpdateCustomer<'a> {
    fn from(customer: &'a DomainUpdateCustomer) -> Self {
        Self {
            first_name: customer.first_name.as_str(),
            last_name: customer.last_name.as_str(),
            rating: customer.rating,
            company_id: customer.company_id.get(),
        }
    }
}
