#![allow(dead_code)]

use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_customers::db::{DbPool, establish_connection_pool};
use pushkind_customers::domain::company::{Company, NewCompany};
use pushkind_customers::domain::employee::{Employee, NewEmployee};
use pushkind_customers::repository::{CompanyWriter, DieselRepository, EmployeeWriter};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("temp path is valid utf-8");

        let pool = establish_connection_pool(url).expect("failed to create pool");
        {
            let mut pooled = pool.get().expect("failed to get connection");
            let conn: &mut SqliteConnection = &mut pooled;
            conn.run_pending_migrations(MIGRATIONS)
                .expect("failed to run migrations");
        }

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

pub fn create_company(repo: &DieselRepository, name: &str) -> Company {
    repo.create_company(&NewCompany::new(name))
        .expect("company created")
}

pub fn create_employee(repo: &DieselRepository, first_name: &str, last_name: &str) -> Employee {
    repo.create_employee(&NewEmployee::new(first_name, last_name))
        .expect("employee created")
}
