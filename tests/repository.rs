use pushkind_customers::domain::customer::{CustomerDeletion, NewCustomer, UpdateCustomer};
use pushkind_customers::domain::types::{CompanyId, CustomerId, EmployeeId};
use pushkind_customers::repository::errors::RepositoryError;
use pushkind_customers::repository::{
    CompanyReader, CustomerReader, CustomerWriter, EmployeeReader,
};

mod common;

fn employee_ids(ids: &[i32]) -> Vec<EmployeeId> {
    ids.iter().map(|id| EmployeeId::new(*id).unwrap()).collect()
}

#[test]
fn test_company_and_employee_listing() {
    let test_db = common::TestDb::new("test_company_and_employee_listing.db");
    let repo = test_db.repo();

    common::create_company(&repo, "Zenith");
    common::create_company(&repo, "Acme");
    common::create_employee(&repo, "Sam", "Seller");

    let companies = repo.list_companies().unwrap();
    let names = companies.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Acme", "Zenith"]);

    let employees = repo.list_employees().unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].first_name, "Sam");
}

#[test]
fn test_customer_listing_joins_company_and_orders_by_first_name() {
    let test_db = common::TestDb::new("test_customer_listing.db");
    let repo = test_db.repo();
    let acme = common::create_company(&repo, "Acme");
    let globex = common::create_company(&repo, "Globex");

    repo.create_customer(&NewCustomer::new("Zoe", "Last", 1, acme.company_id), &[])
        .unwrap();
    repo.create_customer(&NewCustomer::new("Adam", "First", 3, globex.company_id), &[])
        .unwrap();

    let customers = repo.list_customers().unwrap();
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].customer.first_name, "Adam");
    assert_eq!(customers[0].company_name, "Globex");
    assert_eq!(customers[1].customer.first_name, "Zoe");
    assert_eq!(customers[1].company_name, "Acme");
}

#[test]
fn test_customer_create_with_employees() {
    let test_db = common::TestDb::new("test_customer_create_with_employees.db");
    let repo = test_db.repo();
    let acme = common::create_company(&repo, "Acme");
    let sam = common::create_employee(&repo, "Sam", "Seller");
    let kim = common::create_employee(&repo, "Kim", "Closer");

    let customer = repo
        .create_customer(
            &NewCustomer::new("Jane", "Doe", 5, acme.company_id),
            &[sam.employee_id, kim.employee_id],
        )
        .unwrap();

    let fetched = repo.get_customer_by_id(customer.customer_id).unwrap().unwrap();
    assert_eq!(fetched, customer);
    assert_eq!(fetched.rating, 5);

    let mut linked = repo.list_customer_employee_ids(customer.customer_id).unwrap();
    linked.sort();
    let mut expected = vec![sam.employee_id, kim.employee_id];
    expected.sort();
    assert_eq!(linked, expected);
}

#[test]
fn test_customer_create_with_unknown_company_fails() {
    let test_db = common::TestDb::new("test_customer_unknown_company.db");
    let repo = test_db.repo();

    let result = repo.create_customer(
        &NewCustomer::new("Jane", "Doe", 5, CompanyId::new(99).unwrap()),
        &[],
    );
    assert!(result.is_err());
    assert!(repo.list_customers().unwrap().is_empty());
}

#[test]
fn test_customer_create_rolls_back_on_unknown_employee() {
    let test_db = common::TestDb::new("test_customer_create_rollback.db");
    let repo = test_db.repo();
    let acme = common::create_company(&repo, "Acme");

    let result = repo.create_customer(
        &NewCustomer::new("Jane", "Doe", 5, acme.company_id),
        &employee_ids(&[42]),
    );
    assert!(result.is_err());
    assert!(repo.list_customers().unwrap().is_empty());
}

#[test]
fn test_customer_update_replaces_employees() {
    let test_db = common::TestDb::new("test_customer_update_replaces.db");
    let repo = test_db.repo();
    let acme = common::create_company(&repo, "Acme");
    let globex = common::create_company(&repo, "Globex");
    let e1 = common::create_employee(&repo, "One", "Employee");
    let e2 = common::create_employee(&repo, "Two", "Employee");
    let e3 = common::create_employee(&repo, "Three", "Employee");

    let customer = repo
        .create_customer(
            &NewCustomer::new("Jane", "Doe", 5, acme.company_id),
            &[e1.employee_id],
        )
        .unwrap();

    let updates = UpdateCustomer::new("Janet", "Doe-Smith", 4, globex.company_id);
    repo.update_customer(
        customer.customer_id,
        &updates,
        &[e2.employee_id, e3.employee_id],
    )
    .unwrap();
    let mut linked = repo.list_customer_employee_ids(customer.customer_id).unwrap();
    linked.sort();
    assert_eq!(linked, vec![e2.employee_id, e3.employee_id]);

    let updated = repo
        .update_customer(customer.customer_id, &updates, &[e3.employee_id])
        .unwrap();
    assert_eq!(
        repo.list_customer_employee_ids(customer.customer_id).unwrap(),
        vec![e3.employee_id]
    );

    assert_eq!(updated.first_name, "Janet");
    assert_eq!(updated.last_name, "Doe-Smith");
    assert_eq!(updated.rating, 4);
    assert_eq!(updated.company_id, globex.company_id);

    // Submitting identical values again leaves the stored row unchanged.
    let again = repo
        .update_customer(customer.customer_id, &updates, &[e3.employee_id])
        .unwrap();
    assert_eq!(again, updated);
    assert_eq!(
        repo.get_customer_by_id(customer.customer_id).unwrap(),
        Some(updated)
    );

    repo.update_customer(customer.customer_id, &updates, &[])
        .unwrap();
    assert!(
        repo.list_customer_employee_ids(customer.customer_id)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_customer_update_missing_is_not_found() {
    let test_db = common::TestDb::new("test_customer_update_missing.db");
    let repo = test_db.repo();
    let acme = common::create_company(&repo, "Acme");

    let result = repo.update_customer(
        CustomerId::new(77).unwrap(),
        &UpdateCustomer::new("Ghost", "Customer", 1, acme.company_id),
        &[],
    );
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[test]
fn test_customer_delete_guarded_by_sales_relationship() {
    let test_db = common::TestDb::new("test_customer_delete_guard.db");
    let repo = test_db.repo();
    let acme = common::create_company(&repo, "Acme");
    let sam = common::create_employee(&repo, "Sam", "Seller");

    let linked = repo
        .create_customer(
            &NewCustomer::new("Jane", "Doe", 5, acme.company_id),
            &[sam.employee_id],
        )
        .unwrap();
    let unlinked = repo
        .create_customer(&NewCustomer::new("John", "Roe", 2, acme.company_id), &[])
        .unwrap();

    assert_eq!(
        repo.delete_customer(linked.customer_id).unwrap(),
        CustomerDeletion::InSalesRelationship
    );
    assert!(repo.get_customer_by_id(linked.customer_id).unwrap().is_some());

    assert_eq!(
        repo.delete_customer(unlinked.customer_id).unwrap(),
        CustomerDeletion::Deleted
    );
    assert!(repo.get_customer_by_id(unlinked.customer_id).unwrap().is_none());

    // Once the relationship is removed the customer can be deleted.
    repo.update_customer(
        linked.customer_id,
        &UpdateCustomer::new("Jane", "Doe", 5, acme.company_id),
        &[],
    )
    .unwrap();
    assert_eq!(
        repo.delete_customer(linked.customer_id).unwrap(),
        CustomerDeletion::Deleted
    );
    assert!(repo.list_customers().unwrap().is_empty());
}

#[test]
fn test_customer_delete_missing_is_not_found() {
    let test_db = common::TestDb::new("test_customer_delete_missing.db");
    let repo = test_db.repo();

    let result = repo.delete_customer(CustomerId::new(5).unwrap());
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}
