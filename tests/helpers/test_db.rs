use sap_holiday_api::database::Database;

pub async fn setup_test_db() -> Database {
    // Install drivers for AnyPool (required for tests)
    sqlx::any::install_default_drivers();

    // File-based SQLite with a unique name per test for parallel execution
    use uuid::Uuid;
    let temp_file = std::env::temp_dir().join(format!("holiday_test_{}.db", Uuid::new_v4()));
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.display());

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to run migrations");

    db
}

/// Connects to a fresh database file without running migrations, for
/// exercising the missing-table error path.
pub async fn setup_unmigrated_db() -> Database {
    sqlx::any::install_default_drivers();

    use uuid::Uuid;
    let temp_file = std::env::temp_dir().join(format!("holiday_bare_{}.db", Uuid::new_v4()));
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.display());

    Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database")
}

pub async fn teardown_test_db(db: Database) {
    // Close the connection; the file lives in the OS temp directory
    drop(db);
}
