use sp_db::LocalDatabase;

/// In-memory database with migrations run
pub async fn create_test_db() -> LocalDatabase {
    LocalDatabase::open_in_memory()
        .await
        .expect("Failed to create test database")
}
