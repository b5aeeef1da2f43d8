use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::Next;
use actix_web::{Error, HttpResponse};

use crate::application::use_cases::admin_gate::authorize;
use crate::domain::credentials::challenge_header;

pub const AUTH_REQUIRED_BODY: &str = "Auth Required";

/// Basic-auth gate for the admin area. Register with `middleware::from_fn(admin_gate)`.
pub async fn admin_gate(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody + 'static>, Error> {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if authorize(req.path(), authorization).is_allowed() {
        return next
            .call(req)
            .await
            .map(ServiceResponse::map_into_left_body);
    }

    let response = HttpResponse::Unauthorized()
        .insert_header((header::WWW_AUTHENTICATE, challenge_header()))
        .body(AUTH_REQUIRED_BODY);
    Ok(req.into_response(response).map_into_right_body())
}
