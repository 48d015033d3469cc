use anyhow::Result;
use chrono::Utc;

use super::repository::{self, User};
use crate::system::auth::password;

/// Создаёт пользователя, возвращает его id
pub async fn create(
    username: &str,
    password: &str,
    full_name: Option<String>,
    is_admin: bool,
) -> Result<String> {
    let username = username.trim();
    if username.is_empty() {
        return Err(anyhow::anyhow!("Username cannot be empty"));
    }
    if repository::get_by_username(username).await?.is_some() {
        return Err(anyhow::anyhow!("Username already exists"));
    }
    if password.is_empty() {
        return Err(anyhow::anyhow!("Password cannot be empty"));
    }

    let password_hash = password::hash_password(password)?;
    let now = Utc::now().to_rfc3339();
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
        full_name,
        is_active: true,
        is_admin,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    };

    repository::create_with_password(&user, &password_hash).await?;
    Ok(user.id)
}

pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    repository::get_by_id(id).await
}

/// Пользователь, если логин и пароль верны и учётная запись активна
pub async fn verify_credentials(username: &str, password: &str) -> Result<Option<User>> {
    let Some(user) = repository::get_by_username(username.trim()).await? else {
        return Ok(None);
    };
    if !user.is_active {
        tracing::warn!("Login attempt for inactive user {}", user.username);
        return Ok(None);
    }
    let Some(hash) = repository::get_password_hash(&user.id).await? else {
        return Ok(None);
    };
    if !password::verify_password(password, &hash)? {
        return Ok(None);
    }

    repository::update_last_login(&user.id).await?;
    Ok(Some(user))
}
