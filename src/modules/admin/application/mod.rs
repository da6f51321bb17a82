pub mod admin_use_cases;
pub mod ports;
pub mod service;

pub use admin_use_cases::AdminUseCases;
