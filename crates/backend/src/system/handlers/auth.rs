use axum::extract::Json;
use contracts::domain::common::ApiResponse;
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::api::{respond, ServiceError, ServiceResult};
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::jwt;
use crate::system::users::{repository::User, service as user_service};

const INVALID_CREDENTIALS: &str = "Invalid username or password";

fn user_info(user: User) -> UserInfo {
    UserInfo {
        id: user.id,
        username: user.username,
        full_name: user.full_name,
        is_admin: user.is_admin,
    }
}

async fn authenticate(request: LoginRequest) -> ServiceResult<LoginResponse> {
    let user = user_service::verify_credentials(&request.username, &request.password)
        .await?
        .ok_or_else(|| ServiceError::Validation(INVALID_CREDENTIALS.into()))?;

    let access_token = jwt::generate_access_token(&user.id, &user.username, user.is_admin).await?;
    tracing::info!("User {} logged in", user.username);

    Ok(LoginResponse {
        access_token,
        user: user_info(user),
    })
}

/// POST /api/system/auth/login
///
/// Неверный логин или пароль отдаётся в конверте, а не кодом 401
pub async fn login(Json(request): Json<LoginRequest>) -> Json<ApiResponse<LoginResponse>> {
    respond(authenticate(request).await)
}

/// GET /api/system/auth/me (protected by middleware)
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Json<ApiResponse<UserInfo>> {
    let result = match user_service::get_by_id(&claims.sub).await {
        Ok(Some(user)) if user.is_active => Ok(user_info(user)),
        Ok(_) => Err(ServiceError::NotFound("User")),
        Err(e) => Err(e.into()),
    };
    respond(result)
}
