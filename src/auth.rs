use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest, web};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::ServerConfig;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::profile::Profile;

/// Session token lifetime.
const TOKEN_TTL_DAYS: i64 = 7;

/// Builds and signs the session token stored in the identity cookie.
pub fn issue_token(profile: &Profile, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = Utc::now() + Duration::days(TOKEN_TTL_DAYS);
    let claims = AuthenticatedUser {
        sub: profile.id.to_string(),
        email: profile.email.clone(),
        name: profile.full_name.clone(),
        role: profile.role,
        exp: exp.timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verifies a session token and returns its claims.
pub fn decode_token(token: &str, secret: &str) -> Result<AuthenticatedUser, jsonwebtoken::errors::Error> {
    decode::<AuthenticatedUser>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    /// Extracts the signed-in user from the identity cookie. Any failure
    /// (no session, missing config, stale or tampered token) yields 401 so the
    /// redirect middleware can send the visitor back to the login page.
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = match Identity::from_request(req, payload).into_inner() {
            Ok(identity) => identity,
            Err(_) => return ready(Err(ErrorUnauthorized("not signed in"))),
        };
        let token = match identity.id() {
            Ok(token) => token,
            Err(_) => return ready(Err(ErrorUnauthorized("not signed in"))),
        };
        let Some(config) = req.app_data::<web::Data<ServerConfig>>() else {
            return ready(Err(ErrorUnauthorized("server configuration missing")));
        };
        match decode_token(&token, &config.secret) {
            Ok(user) => ready(Ok(user)),
            Err(_) => ready(Err(ErrorUnauthorized("session expired"))),
        }
    }
}
