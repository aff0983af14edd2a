pub mod api;
pub mod client;

pub use client::{AuthBackend, AuthClient, AuthError, DEFAULT_BASE_URL};
