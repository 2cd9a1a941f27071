use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, TokenData, Validation};

use crate::entities::token::{Claims, TokenType};
use crate::errors::AuthError;
use crate::settings::{AppConfig, JwtKeys};

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    access_expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            access_expiration: Duration::minutes(config.jwt_expiration_minutes),
        }
    }

    pub fn create_jwt(&self, email: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = (now + self.access_expiration).timestamp() as usize;

        let claims = Claims {
            sub: email.to_string(),
            email: email.to_string(),
            admin: true,
            exp,
            iat: now.timestamp() as usize,
            token_type: TokenType::Access,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding).map_err(AuthError::from)
    }

    pub fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;

        decode::<Claims>(token, &self.keys.decoding, &validation).map_err(AuthError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service(minutes: i64) -> JwtService {
        let mut config: AppConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        config.jwt_secret = "another_sufficiently_long_test_secret_!!".into();
        config.jwt_expiration_minutes = minutes;
        JwtService::new(&config)
    }

    #[test]
    fn round_trips_claims() {
        let service = test_service(15);
        let token = service.create_jwt("owner@example.com").unwrap();
        let claims = service.decode_jwt(&token).unwrap().claims;
        assert_eq!(claims.sub, "owner@example.com");
        assert!(claims.admin);
        assert_eq!(claims.token_type, TokenType::Access);
    }

    #[test]
    fn rejects_expired_token() {
        let service = test_service(-5);
        let token = service.create_jwt("owner@example.com").unwrap();
        assert!(matches!(
            service.decode_jwt(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn rejects_garbage_token() {
        let service = test_service(15);
        assert!(matches!(
            service.decode_jwt("not.a.token"),
            Err(AuthError::InvalidToken)
        ));
    }
}
