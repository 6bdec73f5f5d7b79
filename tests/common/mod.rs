use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use unistay::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A throwaway SQLite database with all migrations applied. The backing
/// files live in a temporary directory that is removed on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temporary directory");
        let database_url = dir.path().join(name);
        let pool = establish_connection_pool(database_url.to_str().expect("non-utf8 path"))
            .expect("failed to build connection pool");
        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
