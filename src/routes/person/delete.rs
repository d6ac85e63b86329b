use actix_web::{delete, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};

#[delete("/{uid}")]
async fn delete(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<String>,
) -> ApiResult<MessageRes> {
    let uid = path.into_inner();
    db.delete_person_by_uid(&uid).await?;
    Ok(ApiResponse::Ok(MessageRes {
        message: "deleted".to_string(),
    }))
}
