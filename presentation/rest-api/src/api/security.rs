use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;

use crate::config::auth_config::AuthConfig;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    admin: bool,
    iat: u64,
    exp: u64,
}

/// Identity extracted from a validated bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub is_admin: bool,
}

/// Signs a token for a freshly registered or logged-in user.
pub fn issue_token(user: &User, config: &AuthConfig) -> Result<String, String> {
    let now = Utc::now().timestamp().max(0) as u64;
    let claims = Claims {
        sub: user.id.to_string(),
        admin: user.is_admin,
        iat: now,
        exp: now + config.token_ttl_secs,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.token_secret.as_bytes()),
    )
    .map_err(|e| format!("auth.token_encode_failed: {e}"))
}

fn decode_token(token: &str, config: &AuthConfig) -> Result<AuthenticatedUser, String> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.token_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    let user_id =
        UserId::parse(&token_data.claims.sub).map_err(|_| "auth.invalid_subject".to_string())?;

    Ok(AuthenticatedUser {
        user_id,
        is_admin: token_data.claims.admin,
    })
}

/// Bearer token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
pub struct BearerAuth(pub AuthenticatedUser);

async fn bearer_checker(
    _req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<AuthenticatedUser> {
    let config = AuthConfig::from_env();
    match decode_token(&bearer.token, &config) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn config() -> AuthConfig {
        AuthConfig {
            token_secret: "test-secret".to_string(),
            token_ttl_secs: 3600,
        }
    }

    fn user(is_admin: bool) -> User {
        User::from_repository(
            Uuid::new_v4(),
            "ada@example.com".to_string(),
            "hash".to_string(),
            is_admin,
            Utc::now(),
        )
    }

    #[test]
    fn should_round_trip_identity_through_a_token() {
        let user = user(false);
        let token = issue_token(&user, &config()).unwrap();

        let identity = decode_token(&token, &config()).unwrap();
        assert_eq!(identity.user_id.as_uuid(), user.id);
        assert!(!identity.is_admin);
    }

    #[test]
    fn should_carry_the_admin_claim() {
        let token = issue_token(&user(true), &config()).unwrap();
        assert!(decode_token(&token, &config()).unwrap().is_admin);
    }

    #[test]
    fn should_reject_token_signed_with_another_secret() {
        let token = issue_token(&user(false), &config()).unwrap();

        let other = AuthConfig {
            token_secret: "other-secret".to_string(),
            token_ttl_secs: 3600,
        };
        let result = decode_token(&token, &other);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("auth.token_validation_failed"));
    }

    #[test]
    fn should_reject_expired_token() {
        let now = Utc::now().timestamp().max(0) as u64;
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            admin: false,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config().token_secret.as_bytes()),
        )
        .unwrap();

        assert!(decode_token(&token, &config()).is_err());
    }

    #[test]
    fn should_reject_malformed_token() {
        let result = decode_token("not-a-jwt", &config());
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_token_whose_subject_is_not_a_uuid() {
        let now = Utc::now().timestamp().max(0) as u64;
        let claims = Claims {
            sub: "user-42".to_string(),
            admin: false,
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config().token_secret.as_bytes()),
        )
        .unwrap();

        let result = decode_token(&token, &config());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("auth.invalid_subject"));
    }
}
