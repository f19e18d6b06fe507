//! Notification service implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`HttpNotificationService`] | REST API over reqwest |
//! | [`InMemoryNotificationService`] | Server-side semantics in process, with failure injection |

#[cfg(feature = "remote-http")]
pub mod http;
#[cfg(feature = "remote-memory")]
pub mod in_memory;

#[cfg(feature = "remote-http")]
pub use http::HttpNotificationService;
#[cfg(feature = "remote-memory")]
pub use in_memory::{InMemoryNotificationService, InjectedFailure};
