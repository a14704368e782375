use actix_web::web;

pub mod account;
pub mod category;
pub mod home;
pub mod post;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home::index);
    cfg.service(
        web::scope("/v1")
            .service(account::register::register)
            .service(account::login::login)
            .service(category::list)
            .service(category::get_by_id)
            .service(category::create)
            .service(category::update)
            .service(category::delete)
            .service(post::list)
            .service(post::list_by_category)
            .service(post::get_by_id),
    );
}
