use actix_web::{post, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::{RTeamCreate, TeamCreateRes};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    data: web::Json<RTeamCreate>,
) -> ApiResult<TeamCreateRes> {
    let team = db.create_team(data.name.clone()).await?;
    Ok(ApiResponse::Created(TeamCreateRes {
        id: team.id,
        message: format!("Team {} has been created.", team.name),
    }))
}
