//! Application Port Interfaces
//!
//! Contracts the application layer offers to outer layers (UI, scheduler,
//! session bootstrap).

pub mod services;

pub use services::NotificationSyncServiceInterface;
