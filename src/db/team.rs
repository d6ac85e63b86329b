use crate::db::sqlite_service::SqliteService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::team::{ActiveModel as TeamActive, Entity as TeamEntity, Model as TeamModel};
use sea_orm::{DbErr, EntityTrait, Set};

impl SqliteService {
    pub async fn create_team(&self, name: String) -> Result<TeamModel, AppError> {
        let now = Utc::now();
        let res = TeamEntity::insert(TeamActive {
            name: Set(name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;
        self.get_team(res.last_insert_id).await
    }

    pub async fn get_team(&self, id: i32) -> Result<TeamModel, AppError> {
        Ok(TeamEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Team not found".into()))?)
    }
}
