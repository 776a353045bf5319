//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 고객, 도서, 구매 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 고객 CRUD 및 이메일 사용 가능 여부 API
//! - 도서 판매 등록/조회/취소 API
//! - 구매 API
//! - JSON 본문 파싱 실패를 `ML-001` 에러 본문으로 통일
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(registry.clone())
//!     .configure(configure_all_routes);
//! ```

use crate::core::errors::AppError;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_customer_routes(cfg);
    configure_book_routes(cfg);
    configure_purchase_routes(cfg);
}

/// 잘못된 JSON 본문을 `400`, `ML-001` 응답으로 변환합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("요청 본문 파싱 실패: {}", err);
        AppError::invalid_field("body", err.to_string()).into()
    })
}

/// 고객 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/v1/customers?name=` - 목록 조회
/// - `POST /api/v1/customers` - 등록
/// - `GET /api/v1/customers/email-available?email=` - 이메일 사용 가능 여부
/// - `GET /api/v1/customers/{id}` - 조회
/// - `PUT /api/v1/customers/{id}` - 수정
/// - `DELETE /api/v1/customers/{id}` - 소프트 삭제
/// - `GET /api/v1/customers/{id}/purchases` - 구매 내역
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/customers \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Maicon","email":"maicon@bookstore.dev","password":"s3cret"}'
///
/// curl "http://localhost:8080/api/v1/customers?name=Ma"
/// ```
fn configure_customer_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/customers")
            .service(handlers::customers::list_customers)
            .service(handlers::customers::create_customer)
            // {id}보다 먼저 등록
            .service(handlers::customers::email_available)
            .service(handlers::customers::get_customer)
            .service(handlers::customers::update_customer)
            .service(handlers::customers::delete_customer)
            .service(handlers::customers::list_customer_purchases),
    );
}

fn configure_book_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/books")
            .service(handlers::books::create_book)
            .service(handlers::books::list_active_books)
            .service(handlers::books::get_book)
            .service(handlers::books::cancel_book),
    );
}

fn configure_purchase_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/purchases").service(handlers::purchases::create_purchase));
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "bookstore_customer_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
