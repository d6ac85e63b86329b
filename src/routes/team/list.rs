use actix_web::{get, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::person::Person;
use crate::types::response::{ApiResponse, ApiResult};

/// Everyone, with their team embedded where one is assigned.
#[get("/all")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
) -> ApiResult<Vec<Person>> {
    Ok(ApiResponse::Ok(db.list_people_with_teams(None).await?))
}
