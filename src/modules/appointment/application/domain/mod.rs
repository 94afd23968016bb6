pub mod entities;
pub mod slot_policy;
