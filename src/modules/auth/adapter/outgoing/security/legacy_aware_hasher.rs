use async_trait::async_trait;

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

use super::argon2_hasher::Argon2Hasher;
use super::bcrypt_hasher::BcryptHasher;

/// New hashes are Argon2id. Stored bcrypt hashes still verify.
#[derive(Clone)]
pub struct LegacyAwareHasher {
    primary: Argon2Hasher,
    legacy: BcryptHasher,
}

impl LegacyAwareHasher {
    pub fn new(primary: Argon2Hasher, legacy: BcryptHasher) -> Self {
        Self { primary, legacy }
    }
}

#[async_trait]
impl PasswordHasher for LegacyAwareHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.primary.hash_password(password).await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if BcryptHasher::is_bcrypt_hash(hash) {
            self.legacy.verify_password(password, hash).await
        } else {
            self.primary.verify_password(password, hash).await
        }
    }
}
