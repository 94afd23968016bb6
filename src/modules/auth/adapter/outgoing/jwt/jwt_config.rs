use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,  // Expiration in seconds
    pub refresh_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    fn parse_expiry(key: &str, default: i64) -> Result<i64, String> {
        match env::var(key) {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("Invalid {} value: {}", key, raw)),
            Err(_) => Ok(default),
        }
    }

    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| "JWT_SECRET must be set".to_string())?;

        // HS256 wants at least 32 bytes of key
        if secret_key.len() < 32 {
            return Err(
                "JWT_SECRET must be at least 32 characters long for HS256 algorithm".to_string(),
            );
        }

        let access_token_expiry = Self::parse_expiry("JWT_ACCESS_EXPIRY", 86400)?;
        let refresh_token_expiry = Self::parse_expiry("JWT_REFRESH_EXPIRY", 604800)?;

        if access_token_expiry <= 0 {
            return Err("JWT_ACCESS_EXPIRY must be a positive number of seconds".to_string());
        }

        if refresh_token_expiry <= access_token_expiry {
            return Err("JWT_REFRESH_EXPIRY must be greater than JWT_ACCESS_EXPIRY".to_string());
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "hospital-api".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}
