use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use axum::http::header::AUTHORIZATION;
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tracing::{debug, warn};
use crate::util::error::{HandlerError, HandlerErrorKind};
use crate::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";

pub struct AdminAuthState {
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
    pub cookie_name: String,
    /// Least privileged role let through; `admin` passes every check
    pub required_role: &'static str,
}

impl AdminAuthState {
    pub fn new(jwt_utils: Arc<JwtTokenUtilsImpl>, required_role: &'static str) -> Self {
        let cookie_name = jwt_utils.jwt_config.cookie_name.clone();
        AdminAuthState { jwt_utils, cookie_name, required_role }
    }

    /// `Authorization: Bearer` first, then the session cookie. An explicit header
    /// must not be shadowed by a stale cookie left in the browser.
    fn token_from_request(&self, req: &Request<Body>) -> Option<String> {
        let bearer = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| self.jwt_utils.extract_token_from_header(header).ok());
        if bearer.is_some() {
            return bearer;
        }

        let jar = CookieJar::from_headers(req.headers());
        jar.get(&self.cookie_name)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    }
}

pub async fn admin_auth(
    State(state): State<Arc<AdminAuthState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, HandlerError> {
    let token = state
        .token_from_request(&req)
        .ok_or_else(|| HandlerError::unauthorized("Authentication required"))?;

    let claims = state.jwt_utils.validate_session_token(&token).map_err(|e| {
        debug!("Rejected session token: {}", e);
        HandlerError::unauthorized("Invalid or expired session")
    })?;

    if !state.jwt_utils.check_role_permission(&claims.role, state.required_role) {
        warn!(user = %claims.sub, role = %claims.role, "Role not allowed for {}", req.uri().path());
        return Err(HandlerError::new(HandlerErrorKind::Forbidden, "Insufficient permissions"));
    }

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
