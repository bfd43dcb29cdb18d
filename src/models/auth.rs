//! Session identity carried in a signed JWT via `actix-identity`.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::{FromRequest, HttpRequest, web};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::user::User;
use crate::models::config::ServerConfig;

/// Session lifetime before a fresh sign-in is required.
const SESSION_TTL_DAYS: i64 = 7;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    /// User id as string (JWT subject).
    pub sub: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    pub exp: usize,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn new(user: &User, roles: Vec<String>) -> Self {
        let exp = Utc::now() + Duration::days(SESSION_TTL_DAYS);
        Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            roles,
            exp: exp.timestamp() as usize,
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }

    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let Some(config) = req.app_data::<web::Data<ServerConfig>>() else {
            return ready(Err(ErrorInternalServerError("server config missing")));
        };

        let identity = match Identity::from_request(req, payload).into_inner() {
            Ok(identity) => identity,
            Err(_) => return ready(Err(ErrorUnauthorized("not signed in"))),
        };

        let token = match identity.id() {
            Ok(token) => token,
            Err(_) => return ready(Err(ErrorUnauthorized("not signed in"))),
        };

        // Any decode failure (tampered, expired, wrong secret) denies access.
        match AuthenticatedUser::from_jwt(&token, &config.secret) {
            Ok(user) => ready(Ok(user)),
            Err(_) => ready(Err(ErrorUnauthorized("invalid session"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let now = Utc::now().naive_utc();
        User {
            id: 42,
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password_hash: "x".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn claims_round_trip_through_jwt() {
        let claims = AuthenticatedUser::new(&sample_user(), vec!["admin".to_string()]);
        let token = claims.to_jwt("secret").unwrap();
        let decoded = AuthenticatedUser::from_jwt(&token, "secret").unwrap();
        assert_eq!(decoded, claims);
        assert_eq!(decoded.user_id(), Some(42));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let claims = AuthenticatedUser::new(&sample_user(), vec![]);
        let token = claims.to_jwt("secret").unwrap();
        assert!(AuthenticatedUser::from_jwt(&token, "other").is_err());
    }
}
