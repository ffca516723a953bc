//! Entities - Character definitions decoded from documents

mod role;

pub use role::{normalize_role_id, Role};
