use actix_web::{web, HttpResponse, Responder};

/// GET /health - Liveness probe
/// Returns 200 if the application is alive (can respond to requests)
/// Does not check the provider
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("ok")
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
