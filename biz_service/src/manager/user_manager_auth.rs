use crate::biz_service::user_service::UserService;
use crate::entitys::user_entity::{NewUser, UserInfo, UserProfile};
use async_trait::async_trait;
use common::errors::AppError;
use common::UserId;
use jsonwebtoken::{DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use utoipa::ToSchema;

/// Bearer tokens expire a fixed 24 hours after issue.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Same text for unknown user and wrong password.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Signed token payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub user_id: UserId,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

/// The authenticated identity of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub user: UserProfile,
}

pub struct UserManagerAuth {
    pub(crate) users: Arc<UserService>,
    pub(crate) encoding: EncodingKey,
    pub(crate) decoding: DecodingKey,
}

impl UserManagerAuth {
    pub fn new(users: Arc<UserService>, jwt_secret: &str) -> Self {
        Self {
            users,
            encoding: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(jwt_secret.as_bytes()),
        }
    }
}

impl fmt::Debug for UserManagerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserManagerAuth").finish_non_exhaustive()
    }
}

#[async_trait]
pub trait UserManagerAuthOpt: Send + Sync {
    /// Creates the account and signs a first token.
    async fn register(&self, new_user: NewUser) -> Result<AuthSession, AppError>;

    /// Verifies credentials; unknown user and bad password fail identically.
    async fn login(&self, username: &str, password: &str) -> Result<AuthSession, AppError>;

    /// Replaces the password after checking the current one.
    async fn change_password(&self, principal: &Principal, old_password: &str, new_password: &str) -> Result<(), AppError>;

    fn build_token(&self, user: &UserInfo) -> Result<String, AppError>;

    /// Signature and expiry check only; the caller decides whether the user still exists.
    fn verify_token(&self, token: &str) -> Result<Principal, AppError>;

    /// Resolves a bearer token to a principal whose account still exists.
    async fn authenticate(&self, token: &str) -> Result<Principal, AppError>;
}
