use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

use crate::api::auth::dto::{AuthResponse, LoginRequest, RegisterRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security;
use crate::api::tags::ApiTags;
use crate::config::auth_config::AuthConfig;

pub struct AuthApi {
    register_use_case: Arc<dyn RegisterUserUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
}

impl AuthApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUserUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
        }
    }
}

fn token_error() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "InternalError".to_string(),
        message: "auth.token_encode_failed".to_string(),
    })
}

/// Account registration and login
#[OpenApi]
impl AuthApi {
    /// Register an account
    ///
    /// New accounts are regular customers. The response carries a bearer
    /// token, so the client is signed in immediately.
    #[oai(path = "/api/auth/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterResponse {
        let user = match self
            .register_use_case
            .execute(RegisterUserParams {
                email: body.0.email,
                password: body.0.password,
            })
            .await
        {
            Ok(user) => user,
            Err(err) => {
                let (status, json) = err.into_error_response();
                return match status.as_u16() {
                    400 => RegisterResponse::BadRequest(json),
                    409 => RegisterResponse::Conflict(json),
                    _ => RegisterResponse::InternalError(json),
                };
            }
        };

        match security::issue_token(&user, &AuthConfig::from_env()) {
            Ok(token) => RegisterResponse::Created(Json(AuthResponse {
                token,
                user: user.into(),
            })),
            Err(e) => {
                tracing::error!("Token issuance failed: {e}");
                RegisterResponse::InternalError(token_error())
            }
        }
    }

    /// Log in
    #[oai(path = "/api/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        let user = match self
            .login_use_case
            .execute(LoginParams {
                email: body.0.email,
                password: body.0.password,
            })
            .await
        {
            Ok(user) => user,
            Err(err) => {
                let (status, json) = err.into_error_response();
                return match status.as_u16() {
                    401 => LoginResponse::Unauthorized(json),
                    _ => LoginResponse::InternalError(json),
                };
            }
        };

        match security::issue_token(&user, &AuthConfig::from_env()) {
            Ok(token) => LoginResponse::Ok(Json(AuthResponse {
                token,
                user: user.into(),
            })),
            Err(e) => {
                tracing::error!("Token issuance failed: {e}");
                LoginResponse::InternalError(token_error())
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<AuthResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<AuthResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
