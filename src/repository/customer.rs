//! Repository implementation for customers and their sales relationships.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::{
        customer::{Customer, CustomerDeletion, CustomerWithCompany, NewCustomer, UpdateCustomer},
        employee::EmployeeCustomer,
        types::{CustomerId, EmployeeId},
    },
    models::{
        customer::{
            Customer as DbCustomer, NewCustomer as DbNewCustomer,
            UpdateCustomer as DbUpdateCustomer,
        },
        employee::{
            EmployeeCustomer as DbEmployeeCustomer,
            NewEmployeeCustomer as DbNewEmployeeCustomer,
        },
    },
    repository::{
        CustomerReader, CustomerWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

/// Inserts one relationship row per employee for the given customer.
fn insert_sales_relationships(
    conn: &mut SqliteConnection,
    customer_id: CustomerId,
    employee_ids: &[EmployeeId],
) -> QueryResult<usize> {
    use crate::schema::employee_customer;

    if employee_ids.is_empty() {
        return Ok(0);
    }

    let links = employee_ids
        .iter()
        .map(|&employee_id| {
            DbNewEmployeeCustomer::from(EmployeeCustomer {
                employee_id,
                customer_id,
            })
        })
        .collect::<Vec<_>>();

    diesel::insert_into(employee_customer::table)
        .values(&links)
        .execute(conn)
}

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let db_customer = customers::table
            .find(id.get())
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        db_customer
            .map(|customer| Customer::try_from(customer).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_customers(&self) -> RepositoryResult<Vec<CustomerWithCompany>> {
        use crate::schema::{companies, customers};

        let mut conn = self.conn()?;
        let rows = customers::table
            .inner_join(companies::table)
            .order(customers::first_name.asc())
            .select((customers::all_columns, companies::name))
            .load::<(DbCustomer, String)>(&mut conn)?;

        rows.into_iter()
            .map(|(customer, company_name)| -> RepositoryResult<CustomerWithCompany> {
                Ok(CustomerWithCompany {
                    customer: Customer::try_from(customer)?,
                    company_name,
                })
            })
            .collect()
    }

    fn list_customer_employee_ids(&self, id: CustomerId) -> RepositoryResult<Vec<EmployeeId>> {
        use crate::schema::employee_customer;

        let mut conn = self.conn()?;
        let links = employee_customer::table
            .filter(employee_customer::customer_id.eq(id.get()))
            .order(employee_customer::employee_id.asc())
            .load::<DbEmployeeCustomer>(&mut conn)?;

        links
            .into_iter()
            .map(|link| {
                EmployeeCustomer::try_from(link)
                    .map(|link| link.employee_id)
                    .map_err(RepositoryError::from)
            })
            .collect()
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(
        &self,
        new_customer: &NewCustomer,
        employee_ids: &[EmployeeId],
    ) -> RepositoryResult<Customer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let db_new_customer: DbNewCustomer = new_customer.into();

        let db_customer = conn
            .transaction::<DbCustomer, RepositoryError, _>(|conn| {
                let created = diesel::insert_into(customers::table)
                    .values(&db_new_customer)
                    .get_result::<DbCustomer>(conn)?;

                let customer_id = CustomerId::new(created.customer_id)?;
                insert_sales_relationships(conn, customer_id, employee_ids)?;

                Ok(created)
            })?;

        Ok(Customer::try_from(db_customer)?)
    }

    fn update_customer(
        &self,
        id: CustomerId,
        updates: &UpdateCustomer,
        employee_ids: &[EmployeeId],
    ) -> RepositoryResult<Customer> {
        use crate::schema::{customers, employee_customer};

        let mut conn = self.conn()?;
        let db_updates: DbUpdateCustomer = updates.into();

        let db_customer = conn
            .transaction::<DbCustomer, RepositoryError, _>(|conn| {
                let updated = diesel::update(customers::table.find(id.get()))
                    .set(&db_updates)
                    .get_result::<DbCustomer>(conn)?;

                diesel::delete(
                    employee_customer::table.filter(employee_customer::customer_id.eq(id.get())),
                )
                .execute(conn)?;

                insert_sales_relationships(conn, id, employee_ids)?;

                Ok(updated)
            })?;

        Ok(Customer::try_from(db_customer)?)
    }

    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<CustomerDeletion> {
        use crate::schema::{customers, employee_customer};

        let mut conn = self.conn()?;

        let deletion = conn.transaction::<CustomerDeletion, RepositoryError, _>(|conn| {
            let relationships: i64 = employee_customer::table
                .filter(employee_customer::customer_id.eq(id.get()))
                .count()
                .get_result(conn)?;

            if relationships > 0 {
                return Ok(CustomerDeletion::InSalesRelationship);
            }

            let deleted = diesel::delete(customers::table.find(id.get())).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(CustomerDeletion::Deleted)
        })?;

        Ok(deletion)
    }
}
