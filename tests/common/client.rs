use actix_web::{web, App};
use roster::db::sqlite_service::SqliteService;
use roster::types::person::Person;
use std::sync::Arc;

pub struct TestClient {
    pub db: Arc<SqliteService>,
}

impl TestClient {
    pub fn new(db: Arc<SqliteService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(roster::routes::configure_routes)
    }

    /// Creates a person through the store layer, skipping HTTP.
    #[allow(dead_code)]
    pub async fn create_test_person(&self, name: &str, age: i32, team_id: i32) -> Person {
        self.db
            .create_person(roster::types::person::RPersonCreate {
                name: name.to_string(),
                age,
                team_id,
            })
            .await
            .expect("Failed to create person")
    }

    #[allow(dead_code)]
    pub async fn create_test_team(&self, name: &str) -> i32 {
        self.db
            .create_team(name.to_string())
            .await
            .expect("Failed to create team")
            .id
    }
}
