//! Diesel models representing companies.

use diesel::prelude::*;

use crate::domain::company::{Company as DomainCompany, NewCompany as DomainNewCompany};
use crate::domain::types::{CompanyId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::companies)]
#[diesel(primary_key(company_id))]
/// Diesel model for [`crate::domain::company::Company`].
pub struct Company {
    pub company_id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::companies)]
/// Insertable form of [`Company`].
pub struct NewCompany<'a> {
    pub name: &'a str,
}

impl TryFrom<Company> for DomainCompany {
    type Error = TypeConstraintError;

    fn try_from(company: Company) -> Result<Self, Self::Error> {
        Ok(Self {
            company_id: CompanyId::try_from(company.company_id)?,
            name: company.name,
        })
    }
}

impl<'a> From<&'a DomainNewCompany> for NewCompany<'a> {
    fn from(company: &'a DomainNewCompany) -> Self {
        Self {
            name: company.name.as_str(),
        }
    }
}
