use actix_web::{post, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::person::{Person, RPersonCreate};
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    body: web::Json<RPersonCreate>,
) -> ApiResult<Person> {
    let created = db.create_person(body.into_inner()).await?;
    Ok(ApiResponse::Created(created))
}
