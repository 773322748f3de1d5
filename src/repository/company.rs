//! Repository implementation for companies.

use diesel::prelude::*;

use crate::{
    domain::company::{Company, NewCompany},
    models::company::{Company as DbCompany, NewCompany as DbNewCompany},
    repository::{
        CompanyReader, CompanyWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl CompanyReader for DieselRepository {
    fn list_companies(&self) -> RepositoryResult<Vec<Company>> {
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let db_companies = companies::table
            .order(companies::name.asc())
            .load::<DbCompany>(&mut conn)?;

        db_companies
            .into_iter()
            .map(|company| Company::try_from(company).map_err(RepositoryError::from))
            .collect()
    }
}

impl CompanyWriter for DieselRepository {
    fn create_company(&self, new_company: &NewCompany) -> RepositoryResult<Company> {
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let db_new_company: DbNewCompany = new_company.into();

        let db_company = diesel::insert_into(companies::table)
            .values(&db_new_company)
            .get_result::<DbCompany>(&mut conn)?;

        Ok(Company::try_from(db_company)?)
    }
}
