use crate::configuration::DatabaseSettings;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Handle on the graph store, handed to every extension.
///
/// The pool is lazy: nothing connects until the first query, so an
/// extension that never touches the database never opens a connection.
#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn connect_lazy(configuration: &DatabaseSettings) -> Self {
        let pool = PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_secs(2))
            .connect_lazy_with(configuration.connection_options());
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
