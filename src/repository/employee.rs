//! Repository implementation for employees.

use diesel::prelude::*;

use crate::{
    domain::employee::{Employee, NewEmployee},
    models::employee::{Employee as DbEmployee, NewEmployee as DbNewEmployee},
    repository::{
        DieselRepository, EmployeeReader, EmployeeWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl EmployeeReader for DieselRepository {
    fn list_employees(&self) -> RepositoryResult<Vec<Employee>> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let db_employees = employees::table
            .order((employees::first_name.asc(), employees::last_name.asc()))
            .load::<DbEmployee>(&mut conn)?;

        db_employees
            .into_iter()
            .map(|employee| Employee::try_from(employee).map_err(RepositoryError::from))
            .collect()
    }
}

impl EmployeeWriter for DieselRepository {
    fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let db_new_employee: DbNewEmployee = new_employee.into();

        let db_employee = diesel::insert_into(employees::table)
            .values(&db_new_employee)
            .get_result::<DbEmployee>(&mut conn)?;

        Ok(Employee::try_from(db_employee)?)
    }
}
