use actix_web::web;

pub mod health;
pub mod person;
pub mod team;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/person")
            .service(person::create::create)
            // "/all" has to land before the "/{uid}" matcher
            .service(person::list::list)
            .service(person::get::get)
            .service(person::update::update)
            .service(person::delete::delete),
    );
    cfg.service(
        web::scope("/team")
            .service(team::create::create)
            .service(team::list::list)
            .service(team::members::members),
    );
}
