use actix_web::HttpResponse;

// handler for health check get requests - answers even when no extension
// is mounted, and never touches the database
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish() // an OK status Http response with an empty body
}
