use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;

/// Время жизни access token
const ACCESS_TOKEN_LIFETIME_HOURS: i64 = 24;

const SECRET_KEY: &str = "jwt_secret";

static JWT_SECRET: OnceCell<String> = OnceCell::new();

/// Claims для пользователя, выпущенные в момент `now`
fn claims_for(user_id: &str, username: &str, is_admin: bool, now: chrono::DateTime<Utc>) -> TokenClaims {
    TokenClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        is_admin,
        exp: (now + chrono::Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    }
}

fn encode_claims(secret: &str, claims: &TokenClaims) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

fn decode_claims(secret: &str, token: &str) -> Result<TokenClaims> {
    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;
    Ok(data.claims)
}

/// Generate JWT access token with 24 hours lifetime
pub async fn generate_access_token(user_id: &str, username: &str, is_admin: bool) -> Result<String> {
    let secret = get_jwt_secret().await?;
    encode_claims(&secret, &claims_for(user_id, username, is_admin, Utc::now()))
}

/// Validate JWT token and extract claims
pub async fn validate_token(token: &str) -> Result<TokenClaims> {
    let secret = get_jwt_secret().await?;
    decode_claims(&secret, token)
}

/// Секрет читается из sys_settings один раз; при первом запуске генерируется и сохраняется
async fn get_jwt_secret() -> Result<String> {
    if let Some(secret) = JWT_SECRET.get() {
        return Ok(secret.clone());
    }
    let secret = match get_jwt_secret_from_db().await? {
        Some(secret) => secret,
        None => {
            let secret = generate_jwt_secret();
            save_jwt_secret_to_db(&secret).await?;
            tracing::info!("Generated new JWT secret");
            secret
        }
    };
    Ok(JWT_SECRET.get_or_init(|| secret).clone())
}

/// 256 бит случайных данных в base64
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

async fn get_jwt_secret_from_db() -> Result<Option<String>> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            [SECRET_KEY.into()],
        ))
        .await?;

    match row {
        Some(row) => Ok(Some(row.try_get("", "value")?)),
        None => Ok(None),
    }
}

async fn save_jwt_secret_to_db(secret: &str) -> Result<()> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let now = Utc::now().to_rfc3339();
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT OR REPLACE INTO sys_settings (key, value, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                SECRET_KEY.into(),
                secret.to_string().into(),
                "Auto-generated JWT secret for authentication".into(),
                now.clone().into(),
                now.into(),
            ],
        ))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_with_same_secret() {
        let secret = generate_jwt_secret();
        let claims = claims_for("u1", "admin", true, Utc::now());
        let token = encode_claims(&secret, &claims).unwrap();

        let decoded = decode_claims(&secret, &token).unwrap();
        assert_eq!(decoded.sub, "u1");
        assert_eq!(decoded.username, "admin");
        assert!(decoded.is_admin);
        assert!(decoded.exp > decoded.iat);
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let claims = claims_for("u1", "admin", false, Utc::now());
        let token = encode_claims("one-secret", &claims).unwrap();
        assert!(decode_claims("another-secret", &token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let issued = Utc::now() - chrono::Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS + 1);
        let token = encode_claims("s", &claims_for("u1", "admin", false, issued)).unwrap();
        assert!(decode_claims("s", &token).is_err());
    }
}
