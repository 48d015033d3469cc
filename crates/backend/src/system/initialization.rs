use anyhow::Result;

use crate::shared::config::AuthConfig;
use crate::system::users::{repository, service};

/// Ensure admin user exists (create if table is empty)
pub async fn ensure_admin_user_exists(auth: &AuthConfig) -> Result<()> {
    if repository::count_users().await? > 0 {
        return Ok(());
    }

    tracing::info!("No users found. Creating default admin user...");
    let admin_id = service::create(
        &auth.admin_username,
        &auth.admin_password,
        Some("Administrator".to_string()),
        true,
    )
    .await?;

    tracing::warn!(
        "Default admin user '{}' created (id {}). Change the password in config.toml",
        auth.admin_username,
        admin_id
    );
    Ok(())
}
