use actix_web::{put, web};
use std::sync::Arc;

use crate::db::person::UpdateOutcome;
use crate::db::sqlite_service::SqliteService;
use crate::types::person::RPersonUpdate;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};

#[put("/{uid}")]
async fn update(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<String>,
    body: web::Json<RPersonUpdate>,
) -> ApiResult<MessageRes> {
    let uid = path.into_inner();
    let message = match db.update_person_fields(&uid, body.into_inner()).await? {
        UpdateOutcome::Updated => "updated",
        UpdateOutcome::Unchanged => "nothing to change",
    };
    Ok(ApiResponse::Ok(MessageRes {
        message: message.to_string(),
    }))
}
