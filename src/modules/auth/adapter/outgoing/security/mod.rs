pub mod argon2_hasher;
pub mod bcrypt_hasher;
pub mod legacy_aware_hasher;

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::BcryptHasher;
pub use legacy_aware_hasher::LegacyAwareHasher;
