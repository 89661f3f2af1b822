use log::LevelFilter;
use sqlx::{
    any::{AnyConnectOptions, AnyPoolOptions},
    AnyPool, ConnectOptions, Executor,
};
use std::str::FromStr;

mod holiday_headers;
mod holiday_ranges;

pub struct Database {
    pub(crate) pool: AnyPool,
}

impl Database {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        // Ensure drivers are installed for AnyPool
        sqlx::any::install_default_drivers();

        let mut connect_options = AnyConnectOptions::from_str(database_url)?;

        connect_options = connect_options
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, std::time::Duration::from_secs(1));

        // SQLite enforces foreign keys per connection, and the header/range
        // cascade depends on it, so the PRAGMAs run on every pooled connection.
        let is_sqlite = database_url.starts_with("sqlite");
        let pool = AnyPoolOptions::new()
            .max_connections(20)
            .min_connections(5)
            .after_connect(move |conn, _meta| {
                Box::pin(async move {
                    if is_sqlite {
                        (&mut *conn).execute("PRAGMA journal_mode = WAL;").await?;
                        (&mut *conn).execute("PRAGMA busy_timeout = 5000;").await?;
                        (&mut *conn).execute("PRAGMA synchronous = NORMAL;").await?;
                        (&mut *conn).execute("PRAGMA foreign_keys = ON;").await?;
                    }
                    Ok(())
                })
            })
            .connect_with(connect_options)
            .await?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("migrations/sqlite").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
        }
    }
}
