use actix_web::{get, HttpResponse};

#[get("/")]
async fn index(_req: actix_web::HttpRequest) -> HttpResponse {
    HttpResponse::Ok().body("lock and load")
}
