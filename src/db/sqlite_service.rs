use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::info;

#[derive(Clone)]
pub struct SqliteService {
    pub db: DatabaseConnection,
}

impl SqliteService {
    pub async fn new(url: &str) -> Result<Self, DbErr> {
        info!("Connecting to SQLite...");
        let db = Database::connect(url).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Schema ready.");
        Ok(Self { db })
    }
}
