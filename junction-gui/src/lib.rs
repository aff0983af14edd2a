pub mod auth;
pub mod dashboard;
pub mod dir;
pub mod gui;
pub mod home;
pub mod logger;
pub mod services;
pub mod session;
pub mod utils;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
