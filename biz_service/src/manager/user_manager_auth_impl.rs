use crate::entitys::user_entity::{NewUser, UserInfo, UserProfile};
use crate::manager::user_manager_auth::{
    AuthSession, INVALID_CREDENTIALS, Principal, TOKEN_TTL_HOURS, TokenClaims, UserManagerAuth, UserManagerAuthOpt,
};
use async_trait::async_trait;
use chrono::Duration;
use common::errors::AppError;
use common::util::common_utils::{hash_password, verify_password};
use common::util::date_util::now;
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};
use log::{info, warn};
use once_cell::sync::Lazy;

/// Verified against when the username is unknown so both failure paths cost the same.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| hash_password("dummy-password-0").unwrap_or_default());

async fn hash_blocking(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await.map_err(|e| AppError::Internal(e.to_string()))?
}

async fn verify_blocking(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await.map_err(|e| AppError::Internal(e.to_string()))?
}

impl UserManagerAuth {
    fn session(&self, user: &UserInfo) -> Result<AuthSession, AppError> {
        Ok(AuthSession { token: self.build_token(user)?, user: UserProfile::from(user) })
    }
}

#[async_trait]
impl UserManagerAuthOpt for UserManagerAuth {
    async fn register(&self, new_user: NewUser) -> Result<AuthSession, AppError> {
        if self.users.find_by_username(&new_user.username).await?.is_some() {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
        let password = hash_blocking(new_user.password.clone()).await?;
        let user = UserInfo {
            id: 0,
            username: new_user.username,
            password,
            email: new_user.email,
            full_name: new_user.full_name,
            title: new_user.title,
            phone: new_user.phone,
            telegram_chat_id: None,
            whatsapp_number: None,
            created_at: now(),
        };
        // the username index makes the final decision under concurrent registrations
        let user = self.users.create(user).await?;
        info!("user registered: id={} username={}", user.id, user.username);
        self.session(&user)
    }

    async fn login(&self, username: &str, password: &str) -> Result<AuthSession, AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            let _ = verify_blocking(password.to_string(), DUMMY_HASH.clone()).await;
            warn!("login failed: unknown username");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };
        if !verify_blocking(password.to_string(), user.password.clone()).await? {
            warn!("login failed: bad password for user id={}", user.id);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }
        self.session(&user)
    }

    async fn change_password(&self, principal: &Principal, old_password: &str, new_password: &str) -> Result<(), AppError> {
        let user = self.users.find_by_id(principal.user_id).await?.ok_or(AppError::NotFound)?;
        if !verify_blocking(old_password.to_string(), user.password.clone()).await? {
            return Err(AppError::Validation("Current password is incorrect".to_string()));
        }
        let hash = hash_blocking(new_password.to_string()).await?;
        self.users.set_password(user.id, hash).await?.ok_or(AppError::NotFound)?;
        info!("password changed for user id={}", user.id);
        Ok(())
    }

    fn build_token(&self, user: &UserInfo) -> Result<String, AppError> {
        let issued = now();
        let claims = TokenClaims {
            user_id: user.id,
            username: user.username.clone(),
            iat: issued.timestamp(),
            exp: (issued + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| AppError::Internal(format!("token encode: {}", e)))
    }

    fn verify_token(&self, token: &str) -> Result<Principal, AppError> {
        let data = decode::<TokenClaims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;
        Ok(Principal { user_id: data.claims.user_id, username: data.claims.username })
    }

    async fn authenticate(&self, token: &str) -> Result<Principal, AppError> {
        let principal = self.verify_token(token)?;
        match self.users.find_by_id(principal.user_id).await? {
            Some(user) if user.username == principal.username => Ok(principal),
            _ => Err(AppError::Unauthorized("Invalid or expired token".to_string())),
        }
    }
}
