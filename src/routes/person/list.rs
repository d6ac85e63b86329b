use actix_web::{get, web};
use std::sync::Arc;

use crate::db::sqlite_service::SqliteService;
use crate::types::person::Person;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/all")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<SqliteService>>,
) -> ApiResult<Vec<Person>> {
    let people = db
        .list_people()
        .await?
        .into_iter()
        .map(Person::from_row)
        .collect();
    Ok(ApiResponse::Ok(people))
}
