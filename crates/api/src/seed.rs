//! Startup provisioning of the configured admin account.
//!
//! The admin is an ordinary row in the user store, created once at boot when
//! absent. The auth gate has no special-case identity: admin requests are
//! authorized purely by the role on the stored record.

use opsboard_core::roles::ROLE_ADMIN;
use opsboard_db::models::user::CreateUser;
use opsboard_db::repositories::UserRepo;
use opsboard_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminSeed;
use crate::error::{AppError, AppResult};

/// Ensure the configured admin account exists, creating it when absent.
///
/// Matching is by phone (the unique handle); an existing row is left
/// untouched so a changed `ADMIN_PASSWORD` never silently rewrites a live
/// credential.
pub async fn ensure_admin_account(pool: &DbPool, seed: &AdminSeed) -> AppResult<()> {
    if let Some(existing) = UserRepo::find_by_name_or_phone(pool, &seed.phone).await? {
        tracing::debug!(user_id = existing.id, "Admin account already provisioned");
        return Ok(());
    }

    let password_hash = hash_password(&seed.password)
        .map_err(|e| AppError::InternalError(format!("Admin password hashing error: {e}")))?;

    let input = CreateUser {
        name: seed.name.clone(),
        phone: seed.phone.clone(),
        department: "Operations".to_string(),
        role: ROLE_ADMIN.to_string(),
        password_hash,
    };
    let user = UserRepo::create(pool, &input).await?;
    tracing::info!(user_id = user.id, name = %user.name, "Provisioned admin account");
    Ok(())
}
