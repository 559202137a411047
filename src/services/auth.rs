//! Auth services - Autenticação e cadastro de operadores do painel

use crate::core::{AppError, AppState, encode_jwt};
use crate::dtos::{CreateUserDTO, UserDTO};
use crate::entities::User;
use crate::repositories::{Create, Delete};
use axum::{
    Extension,
    extract::{Json, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

/// DTO de login (só username e senha)
#[derive(serde::Deserialize)]
pub struct LoginDTO {
    pub username: String,
    pub password: String,
}

pub async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>, // JSON body
) -> Result<impl IntoResponse, AppError> {
    // 1. Buscar o usuário pelo username
    // 2. Se não existe, UNAUTHORIZED genérico (não revelar qual campo errou)
    // 3. Conferir a senha contra o hash bcrypt
    // 4. Gerar o token JWT com id, username e o segredo
    // 5. Montar cookie HttpOnly + header Authorization (Bearer) com validade de 24h
    // 6. Retornar StatusCode::OK com os headers

    let user = match state.user.find_by_username(&body.username).await? {
        Some(user) => user,
        None => {
            warn!("Login attempt with unknown username");
            return Err(AppError::unauthorized("Username or password are not correct."));
        }
    };

    if !user.verify_password(&body.password) {
        warn!("Login attempt with wrong password for user {}", user.user_id);
        return Err(AppError::unauthorized("Username or password are not correct."));
    }

    let token = encode_jwt(user.username, user.user_id, &state.jwt_secret)?;

    let cookie_value = format!(
        "token={}; HttpOnly; Secure; SameSite=Lax; Max-Age={}",
        token,
        24 * 60 * 60
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        "Set-Cookie",
        HeaderValue::from_str(&cookie_value)
            .map_err(|_| AppError::internal_server_error("Failed to build cookie header"))?,
    );
    headers.insert(
        "Authorization",
        HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| AppError::internal_server_error("Failed to build auth header"))?,
    );

    info!("User {} logged in", user.user_id);
    Ok((StatusCode::OK, headers))
}

pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUserDTO>, // JSON body
) -> Result<Json<UserDTO>, AppError> {
    // 1. Validar o DTO com validator (formato e tamanho de username/senha)
    // 2. Conferir se o username já existe -> CONFLICT
    // 3. Gerar o hash da senha
    // 4. Persistir e devolver o UserDTO (sem o hash)

    body.validate()?;

    if state.user.find_by_username(&body.username).await?.is_some() {
        return Err(AppError::conflict("Username already exists"));
    }

    let password_hash = User::hash_password(&body.password)
        .map_err(|_| AppError::internal_server_error("Failed to hash password"))?;

    let new_user = CreateUserDTO {
        username: body.username,
        password: password_hash,
    };

    let created_user = state.user.create(&new_user).await?;

    info!("User {} registered", created_user.user_id);
    Ok(Json(UserDTO::from(created_user)))
}

pub async fn delete_my_account(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<StatusCode, AppError> {
    // soft delete: anonimiza o username e zera a senha; histórico de
    // disparos e memberships ficam intactos
    state.user.delete(&current_user.user_id).await?;

    info!("User {} deleted their account", current_user.user_id);
    Ok(StatusCode::NO_CONTENT)
}
