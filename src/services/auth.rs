//! Authentication service: the login contract, its two backends, and session
//! token validation.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::{AppConfig, AuthMode, DemoCredentials};
use crate::errors::AppError;
use crate::models::user::{LoginResponse, SessionUser, User};

const DEMO_USER_ID: &str = "1";
const DEMO_EMAIL: &str = "admin@example.com";
const DEMO_AVATAR: &str = "https://i.pravatar.cc/100?img=3";

/// JWT claims embedded in database-backed session tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub user_id: String,
    pub email: String,
    pub avatar: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

/// Login backend selected by `AUTH_MODE`.
#[derive(Debug, Clone)]
pub enum Authenticator {
    /// Fixed demo account; issues the configured demo token.
    Static(DemoCredentials),
    /// `users` table with argon2 hashes; issues HS256 JWTs.
    Database {
        pool: PgPool,
        jwt_secret: String,
        expiry_secs: i64,
    },
}

impl Authenticator {
    pub fn from_config(config: &AppConfig, pool: &PgPool) -> Self {
        match config.auth_mode {
            AuthMode::Static => Self::Static(config.demo.clone()),
            AuthMode::Database => Self::Database {
                pool: pool.clone(),
                jwt_secret: config.jwt_secret.clone(),
                expiry_secs: config.jwt_access_token_expiry_secs,
            },
        }
    }

    /// Check credentials and hand back a session token plus user.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<LoginResponse, AppError> {
        match self {
            Self::Static(demo) => {
                if identifier != demo.username || password != demo.password {
                    return Err(AppError::InvalidCredentials);
                }
                Ok(LoginResponse {
                    token: demo.token.clone(),
                    user: demo_user(demo),
                })
            }
            Self::Database {
                pool,
                jwt_secret,
                expiry_secs,
            } => {
                let user = login_with_database(pool, identifier, password).await?;
                let token = generate_token(&user, jwt_secret, *expiry_secs)?;
                Ok(LoginResponse {
                    token,
                    user: SessionUser::from(&user),
                })
            }
        }
    }

    /// Resolve a bearer token to the session user it belongs to.
    pub fn verify(&self, token: &str) -> Result<SessionUser, AppError> {
        match self {
            Self::Static(demo) if token == demo.token => Ok(demo_user(demo)),
            Self::Static(_) => Err(AppError::Unauthorized),
            Self::Database { jwt_secret, .. } => {
                let claims = validate_token(token, jwt_secret)?;
                Ok(SessionUser {
                    id: claims.user_id,
                    username: claims.sub,
                    email: claims.email,
                    avatar: claims.avatar,
                })
            }
        }
    }
}

fn demo_user(demo: &DemoCredentials) -> SessionUser {
    SessionUser {
        id: DEMO_USER_ID.to_string(),
        username: demo.username.clone(),
        email: DEMO_EMAIL.to_string(),
        avatar: Some(DEMO_AVATAR.to_string()),
    }
}

/// Hash a plaintext password with argon2id.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {e}")))
}

/// Verify a plaintext password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("Invalid hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Sign a session token for `user`.
pub fn generate_token(user: &User, jwt_secret: &str, expiry_secs: i64) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.username.clone(),
        user_id: user.id.to_string(),
        email: user.email.clone(),
        avatar: user.avatar_url.clone(),
        exp: (now + Duration::seconds(expiry_secs)).timestamp(),
        iat: now.timestamp(),
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token generation failed: {e}")))
}

/// Validate a JWT and return the claims.
pub fn validate_token(token: &str, jwt_secret: &str) -> Result<Claims, AppError> {
    let decoding_key = DecodingKey::from_secret(jwt_secret.as_bytes());
    jsonwebtoken::decode::<Claims>(token, &decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized)
}

/// Look a user up by username or email and check the password.
async fn login_with_database(
    pool: &PgPool,
    identifier: &str,
    password: &str,
) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT * FROM users WHERE username = $1 OR lower(email) = lower($1) LIMIT 1",
    )
    .bind(identifier)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::InvalidCredentials)?;

    if !user.is_active || !verify_password(password, &user.password_hash)? {
        tracing::info!(user = %user.username, "Rejected login attempt");
        return Err(AppError::InvalidCredentials);
    }

    sqlx::query("UPDATE users SET last_login = NOW() WHERE id = $1")
        .bind(user.id)
        .execute(pool)
        .await?;

    Ok(user)
}

/// Insert an account with a freshly hashed password.
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    email: &str,
    password: &str,
    avatar_url: Option<&str>,
) -> Result<User, AppError> {
    let password_hash = hash_password(password)?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, email, password_hash, avatar_url)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (username) DO UPDATE
            SET password_hash = EXCLUDED.password_hash, updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(Uuid::now_v7())
    .bind(username)
    .bind(email)
    .bind(&password_hash)
    .bind(avatar_url)
    .fetch_one(pool)
    .await?;

    Ok(user)
}
