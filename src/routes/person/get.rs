use actix_web::{get, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::person::Person;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{uid}")]
async fn get(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
    path: web::Path<String>,
) -> ApiResult<Person> {
    let uid = path.into_inner();
    let row = db.get_person_by_uid(&uid).await?;
    Ok(ApiResponse::Ok(Person::from_row(row)))
}
