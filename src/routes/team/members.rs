use actix_web::{get, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::person::Person;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}/members")]
async fn members(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<i32>,
) -> ApiResult<Vec<Person>> {
    let team_id = path.into_inner();
    // 404 for a team that does not exist, even when it would simply have no
    // members.
    db.get_team(team_id).await?;
    Ok(ApiResponse::Ok(
        db.list_people_with_teams(Some(team_id)).await?,
    ))
}
