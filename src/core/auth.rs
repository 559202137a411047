use crate::core::{AppError, AppState};
use crate::entities::{OrgMember, User, UserRole};
use crate::repositories::Read;
use axum::extract::State;
use axum::{Error, body::Body, extract::Request, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

// struct que codifica o conteúdo do token jwt
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize, // Expiry time of the token
    pub iat: usize, // Issued at time of the token
    pub id: i32,
    pub username: String,
}

#[instrument(skip(secret), fields(username = %username, id = %id))]
pub fn encode_jwt(username: String, id: i32, secret: &str) -> Result<String, Error> {
    debug!("Encoding JWT token for user");
    let now = Utc::now();
    let expire: chrono::TimeDelta = Duration::hours(24);
    let exp: usize = (now + expire).timestamp() as usize;
    let iat: usize = now.timestamp() as usize;
    let claim = Claims {
        iat,
        exp,
        username,
        id,
    };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| {
        error!("Failed to encode JWT token: {:?}", e);
        Error::new("Error in encoding jwt token")
    })
}

#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(jwt_token: &str, secret: &str) -> Result<TokenData<Claims>, Error> {
    debug!("Decoding JWT token");
    decode(
        jwt_token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|e| {
        error!("Failed to decode JWT token: {:?}", e);
        Error::new("Error in decoding jwt token")
    })
}

/// Middleware de autenticação: valida o Bearer token e insere o User
/// corrente nas Extensions da request
#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let auth_header = match req.headers().get(http::header::AUTHORIZATION) {
        Some(header) => header.to_str().map_err(|_| {
            warn!("Invalid authorization header format");
            AppError::forbidden("Empty header is not allowed")
        })?,
        None => {
            warn!("Missing authorization header");
            return Err(AppError::forbidden("Please add the JWT token to the header"));
        }
    };

    let mut header = auth_header.split_whitespace();
    let (_bearer, token) = (header.next(), header.next());
    let token = token.ok_or_else(|| {
        warn!("Malformed authorization header");
        AppError::forbidden("Expected header in the form 'Bearer <token>'")
    })?;

    let token_data = match decode_jwt(token, &state.jwt_secret) {
        Ok(data) => data,
        Err(_) => {
            warn!("Failed to decode JWT token");
            return Err(AppError::unauthorized("Unable to decode token"));
        }
    };

    // Busca o usuário no banco: token válido de conta removida não passa
    let current_user = match state.user.find_by_username(&token_data.claims.username).await? {
        Some(user) => {
            info!("User authenticated: {}", user.username);
            user
        }
        None => {
            warn!("User not found in database: {}", token_data.claims.username);
            return Err(AppError::unauthorized("You are not an authorized user"));
        }
    };
    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

/// Middleware que verifica que o usuário corrente é membro da
/// organização do path. Extrai org_id do path, confere a membership e
/// insere o OrgMember nas Extensions.
#[instrument(skip(state, req, next))]
pub async fn org_membership_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running org membership middleware");
    // 1. Usuário corrente vem da Extension (inserido pelo authentication_middleware)
    let current_user = req
        .extensions()
        .get::<User>()
        .ok_or_else(|| {
            warn!("User not found in request extensions");
            AppError::unauthorized("User not authenticated")
        })?
        .clone();

    // 2. org_id é o primeiro segmento numérico do path (/orgs/{org_id}/...)
    let org_id: i32 = req
        .uri()
        .path()
        .split('/')
        .find_map(|segment| segment.parse::<i32>().ok())
        .ok_or_else(|| {
            warn!("Org ID not found in path: {}", req.uri().path());
            AppError::bad_request("Organization ID not found in path")
        })?;

    debug!(
        "Checking membership for user {} in org {}",
        current_user.user_id, org_id
    );

    // 3. Membership via chave composta
    let membership = state
        .member
        .read(&(current_user.user_id, org_id))
        .await?
        .ok_or_else(|| {
            warn!(
                "User {} is not a member of org {}",
                current_user.user_id, org_id
            );
            AppError::forbidden("You are not a member of this organization")
        })?;

    info!(
        "User {} verified as member of org {}",
        current_user.user_id, org_id
    );

    // 4. OrgMember fica disponível para os handlers
    req.extensions_mut().insert(membership);

    Ok(next.run(req).await)
}

/// Helper que verifica se o membro tem um dos papéis exigidos
///
/// # Returns
/// * `Ok(())` se o papel é permitido
/// * `Err(AppError)` caso contrário
#[instrument(skip(membership))]
pub fn require_role(membership: &OrgMember, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    debug!(
        "Checking role requirements for user {} in org {}",
        membership.user_id, membership.org_id
    );

    if !allowed_roles.contains(&membership.user_role) {
        warn!(
            "User {} has insufficient role {:?}, required one of: {:?}",
            membership.user_id, membership.user_role, allowed_roles
        );
        return Err(AppError::forbidden("Insufficient role").with_details(format!(
            "This action requires one of the following roles: {:?}",
            allowed_roles
        )));
    }

    Ok(())
}
