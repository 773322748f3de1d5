//! Services handling the customer list, create, edit and delete workflows.

use crate::domain::customer::{Customer, CustomerDeletion};
use crate::domain::types::CustomerId;
use crate::dto::customers::{
    CreateCustomerPageData, CustomersPageData, DeleteCustomerPageData, EditCustomerPageData,
};
use crate::forms::customers::{CustomerForm, CustomerPayload};
use crate::repository::{CompanyReader, CustomerReader, CustomerWriter, EmployeeReader};
use crate::services::{ServiceError, ServiceResult};

/// Message returned when a delete is refused because of a sales relationship.
pub const SALES_RELATIONSHIP_CONFLICT: &str =
    "Unable to delete because the customer is in a sales relationship of an employee";

/// Path ids that can never exist are reported the same way as missing rows.
fn parse_customer_id(raw: i32) -> ServiceResult<CustomerId> {
    CustomerId::new(raw).map_err(|_| ServiceError::NotFound)
}

fn parse_form(body: &[u8]) -> ServiceResult<CustomerPayload> {
    let form = CustomerForm::from_bytes(body).map_err(|err| {
        log::error!("Failed to parse customer form: {err}");
        err
    })?;
    Ok(CustomerPayload::try_from(form)?)
}

/// Loads all customers with their company names.
pub fn list_customers<R>(repo: &R) -> ServiceResult<CustomersPageData>
where
    R: CustomerReader + ?Sized,
{
    let customers = repo.list_customers()?;
    Ok(CustomersPageData { customers })
}

/// Loads the companies and employees offered by the create form.
pub fn load_create_page<R>(repo: &R) -> ServiceResult<CreateCustomerPageData>
where
    R: CompanyReader + EmployeeReader + ?Sized,
{
    let companies = repo.list_companies()?;
    let employees = repo.list_employees()?;
    Ok(CreateCustomerPageData {
        companies,
        employees,
    })
}

/// Parses the submitted form and persists the customer with its employees.
pub fn create_customer<R>(repo: &R, body: &[u8]) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    let (new_customer, employee_ids) = parse_form(body)?.into_new_customer();

    let customer = repo
        .create_customer(&new_customer, &employee_ids)
        .map_err(|err| {
            log::error!("Failed to create customer: {err}");
            err
        })?;

    log::info!(
        "Created customer {} with {} sales relationship(s)",
        customer.customer_id,
        employee_ids.len()
    );
    Ok(customer)
}

/// Loads the customer together with every option and current selection of the edit form.
pub fn load_edit_page<R>(repo: &R, customer_id: i32) -> ServiceResult<EditCustomerPageData>
where
    R: CustomerReader + CompanyReader + EmployeeReader + ?Sized,
{
    let id = parse_customer_id(customer_id)?;

    let customer = repo.get_customer_by_id(id)?.ok_or(ServiceError::NotFound)?;
    let companies = repo.list_companies()?;
    let employees = repo.list_employees()?;
    let employee_ids = repo.list_customer_employee_ids(id)?;

    Ok(EditCustomerPageData {
        customer,
        companies,
        employees,
        employee_ids,
    })
}

/// Applies the submitted fields and replaces the customer's sales relationships.
pub fn update_customer<R>(repo: &R, customer_id: i32, body: &[u8]) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    let id = parse_customer_id(customer_id)?;
    let (updates, employee_ids) = parse_form(body)?.into_update_customer();

    let customer = repo.update_customer(id, &updates, &employee_ids)?;
    Ok(customer)
}

/// Loads the customer shown on the delete confirmation page.
pub fn load_delete_page<R>(repo: &R, customer_id: i32) -> ServiceResult<DeleteCustomerPageData>
where
    R: CustomerReader + ?Sized,
{
    let id = parse_customer_id(customer_id)?;
    let customer = repo.get_customer_by_id(id)?.ok_or(ServiceError::NotFound)?;
    Ok(DeleteCustomerPageData { customer })
}

/// Deletes the customer unless an employee still holds a sales relationship with it.
pub fn delete_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<()>
where
    R: CustomerWriter + ?Sized,
{
    let id = parse_customer_id(customer_id)?;

    match repo.delete_customer(id)? {
        CustomerDeletion::Deleted => {
            log::info!("Deleted customer {id}");
            Ok(())
        }
        CustomerDeletion::InSalesRelationship => {
            log::warn!("Refused to delete customer {id}: sales relationship exists");
            Err(ServiceError::Conflict(SALES_RELATIONSHIP_CONFLICT.to_string()))
        }
    }
}
