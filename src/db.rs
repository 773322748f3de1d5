//! SQLite pool for the customer directory.
//!
//! Each pooled connection runs the [`SqlitePragmas`] script on checkout.
//! `customers.company_id` and both `employee_customer` columns are plain SQLite
//! references, so they are only enforced while `foreign_keys` is on; that
//! pragma is always part of the script.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use log::error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Pragmas applied to every connection handed out by the pool.
#[derive(Debug, Clone)]
pub struct SqlitePragmas {
    /// Switch the journal to WAL so list pages can read while a form is saved.
    pub wal: bool,
    /// How long a writer waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl Default for SqlitePragmas {
    fn default() -> Self {
        Self {
            wal: true,
            busy_timeout: Duration::from_secs(30),
        }
    }
}

impl SqlitePragmas {
    /// The batch of `PRAGMA` statements executed on checkout.
    pub fn script(&self) -> String {
        let mut script = String::from("PRAGMA foreign_keys = ON;");
        if self.wal {
            script.push_str(" PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;");
        }
        script.push_str(&format!(
            " PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ));
        script
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&self.script())
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build the pool behind [`crate::repository::DieselRepository`].
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas::default()))
        .build(manager)
}

/// Check out a connection, logging when the pool cannot provide one.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().inspect_err(|e| {
        error!("Failed to get connection from pool: {e}");
    })
}
