use axum::{extract::State, response::IntoResponse, Extension, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::sync::Arc;
use crate::dto::auth_dto::LoginRequest;
use crate::handler::validate_payload;
use crate::service::auth_service::{AuthService, AuthServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub struct AuthHandlerState {
    pub auth_service: Arc<AuthServiceImpl>,
    pub cookie_name: String,
    pub cookie_secure: bool,
}

fn session_cookie(state: &AuthHandlerState, value: String) -> Cookie<'static> {
    Cookie::build((state.cookie_name.clone(), value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.cookie_secure)
        .build()
}

pub async fn login_handler(
    State(state): State<Arc<AuthHandlerState>>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    validate_payload(&payload)?;
    let response = state.auth_service.login(&payload.email, &payload.password).await?;

    let mut cookie = session_cookie(&state, response.token.clone());
    cookie.set_max_age(time::Duration::seconds(response.expires_in));
    Ok((jar.add(cookie), Json(response)))
}

pub async fn logout_handler(
    State(state): State<Arc<AuthHandlerState>>,
    jar: CookieJar,
) -> impl IntoResponse {
    // Sent unconditionally so clients without the cookie still get the expiry.
    let mut cookie = session_cookie(&state, String::new());
    cookie.make_removal();
    (jar.add(cookie), Json(serde_json::json!({ "success": true })))
}

pub async fn me_handler(
    State(state): State<Arc<AuthHandlerState>>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(state.auth_service.session(&claims).await?))
}
