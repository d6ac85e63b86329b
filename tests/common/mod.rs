use roster::db::sqlite_service::SqliteService;
use std::sync::Arc;
use tempfile::TempDir;

pub mod client;

pub struct TestContext {
    pub db: Arc<SqliteService>,
    // Each test gets its own database file; dropping the dir removes it.
    pub _dir: TempDir,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}/roster.db?mode=rwc", dir.path().display());

        let db = Arc::new(
            SqliteService::new(&db_url)
                .await
                .expect("Failed to initialize SqliteService"),
        );

        TestContext { db, _dir: dir }
    }
}

// Test data helpers
pub mod test_data {
    use roster::types::person::RPersonCreate;
    use roster::types::team::RTeamCreate;

    pub fn sample_person() -> RPersonCreate {
        RPersonCreate {
            name: "Bob".to_string(),
            age: 25,
            team_id: 0,
        }
    }

    #[allow(dead_code)]
    pub fn sample_person_in_team(name: &str, team_id: i32) -> RPersonCreate {
        RPersonCreate {
            name: name.to_string(),
            age: 30,
            team_id,
        }
    }

    #[allow(dead_code)]
    pub fn sample_team(name: &str) -> RTeamCreate {
        RTeamCreate {
            name: name.to_string(),
        }
    }
}
