//! Handlers for the `/auth` resource (register, login, me, profile).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use opsboard_core::departments::is_valid_department;
use opsboard_core::error::CoreError;
use opsboard_core::roles::ROLE_EMPLOYEE;
use opsboard_db::models::user::{CreateUser, UpdateProfile, UserResponse};
use opsboard_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub phone: String,
    pub department: String,
    pub password: String,
}

/// Request body for `POST /api/auth/login`.
///
/// `username` matches against either the display name or the phone number.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create an employee account and return a token for the new user.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    // 1. Validate the registration payload.
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name must not be empty".into(),
        )));
    }
    if input.phone.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Phone must not be empty".into(),
        )));
    }
    if !is_valid_department(&input.department) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown department: {}",
            input.department
        ))));
    }
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // 2. Hash the credential; plaintext is never stored.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // 3. Reject an already-registered phone up front. Two registrations
    //    racing past this check still collide on uq_users_phone, which the
    //    error layer also reports as a conflict.
    let phone = input.phone.trim().to_string();
    if UserRepo::find_by_phone(&state.pool, &phone).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Phone number already registered".into(),
        )));
    }

    // 4. Insert.
    let create = CreateUser {
        name: input.name.trim().to_string(),
        phone,
        department: input.department,
        role: ROLE_EMPLOYEE.to_string(),
        password_hash,
    };
    let user = UserRepo::create(&state.pool, &create).await?;

    // 5. Issue a token for the fresh account.
    let token = generate_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

/// POST /api/auth/login
///
/// Authenticate with display name or phone plus password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Find user by name or phone.
    let user = UserRepo::find_by_name_or_phone(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    // 2. Verify password.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    // 3. On success: stamp last_login_at.
    UserRepo::record_login(&state.pool, user.id).await?;

    // 4. Generate token.
    let token = generate_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// GET /api/auth/me
///
/// Return the caller's current profile, stats included.
pub async fn me(State(state): State<AppState>, caller: AuthUser) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, caller.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: caller.id,
        }))?;
    Ok(Json(user.into()))
}

/// PUT /api/auth/profile
///
/// Update the caller's own profile. Changing department requires admin.
pub async fn update_profile(
    State(state): State<AppState>,
    caller: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<UserResponse>> {
    if let Some(ref name) = input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Name must not be empty".into(),
            )));
        }
    }

    if let Some(ref department) = input.department {
        if !caller.is_admin() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Only admins may change department".into(),
            )));
        }
        if !is_valid_department(department) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown department: {department}"
            ))));
        }
    }

    let user = UserRepo::update_profile(&state.pool, caller.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: caller.id,
        }))?;
    Ok(Json(user.into()))
}
