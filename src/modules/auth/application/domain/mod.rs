pub mod entities;
pub mod otp;
