//! Mint a development access token.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tracing::info;

use servis_auth::jwt::JwtEncoder;
use servis_core::config::AppConfig;
use servis_core::error::AppError;
use servis_core::types::UserId;
use servis_entity::user::UserRole;

use crate::output::{self, OutputFormat};

/// Arguments for the token command
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// User id to put in `sub`
    #[arg(long)]
    pub user_id: UserId,

    /// CUSTOMER, TECHNICIAN or ADMIN
    #[arg(long)]
    pub role: UserRole,

    /// Display name
    #[arg(long, default_value = "Servis User")]
    pub name: String,
}

#[derive(Debug, Serialize, Tabled)]
struct TokenRow {
    user_id: String,
    role: String,
    expires_at: String,
    token: String,
}

/// Sign a token with the configured secret and print it.
pub fn execute(args: &TokenArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let issued = JwtEncoder::new(&config.auth).issue(args.user_id, args.role, &args.name)?;

    info!(user_id = %args.user_id, role = %args.role, "Issued development token");

    output::print_item(
        &TokenRow {
            user_id: args.user_id.to_string(),
            role: args.role.to_string(),
            expires_at: issued.expires_at.to_rfc3339(),
            token: issued.token,
        },
        format,
    );
    Ok(())
}
