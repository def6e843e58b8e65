//! Services for the admin.

pub mod auth;
pub mod storage;

pub use auth::{AuthError, verify_admin_password};
pub use storage::{MediaStorage, StorageError, UploadedMedia};
