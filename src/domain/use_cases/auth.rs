use validator::Validate;

use crate::entities::token::{AuthResponse, LoginRequest};
use crate::errors::AuthError;
use crate::infrastructure::auth::jwt::JwtService;
use crate::infrastructure::auth::password::verify_password;
use crate::settings::AppConfig;

/// Checks logins against the single operator account provisioned in
/// configuration and issues short-lived access tokens. There is no
/// self-service registration; the password hash is managed out of band.
#[derive(Clone)]
pub struct AdminAuthHandler {
    jwt_service: JwtService,
    admin_email: String,
    admin_password_hash: String,
    token_ttl_minutes: i64,
}

impl AdminAuthHandler {
    pub fn new(config: &AppConfig) -> Self {
        AdminAuthHandler {
            jwt_service: JwtService::new(config),
            admin_email: config.admin_email.to_lowercase(),
            admin_password_hash: config.admin_password_hash.clone(),
            token_ttl_minutes: config.jwt_expiration_minutes,
        }
    }

    pub fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        request.validate().map_err(|_| AuthError::MissingCredentials)?;

        if !request.email.trim().eq_ignore_ascii_case(&self.admin_email) {
            return Err(AuthError::WrongCredentials);
        }

        if !verify_password(&request.password, &self.admin_password_hash)? {
            return Err(AuthError::WrongCredentials);
        }

        let access_token = self.jwt_service.create_jwt(&self.admin_email)?;

        Ok(AuthResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_ttl_minutes * 60,
        })
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}
