//! Africa's Talking Voice API client for Rust
//!
//! This crate has two halves:
//! - [`VoiceSession`] builds the XML voice actions the call-control server
//!   executes during a call (`Say`, `Play`, `GetDigits`, `Dial`, ...)
//! - [`VoiceClient`] places calls, uploads media and queries call queues over
//!   HTTP, and dispatches method calls by name to either half
//!
//! # Examples
//!
//! ## Composing a call flow
//!
//! ```rust
//! use africastalking_voice::{GetDigits, Say, VoiceError, VoiceSession};
//!
//! fn main() -> Result<(), VoiceError> {
//!     let mut session = VoiceSession::new("sandbox");
//!     session
//!         .say(Say::new("Welcome").voice("woman"))?
//!         .get_digits(
//!             GetDigits::new("Press 1 for sales")
//!                 .num_digits(1)
//!                 .callback_url("https://example.com/menu"),
//!         )?;
//!
//!     println!("{}", session.build().unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Placing a call
//!
//! ```rust,no_run
//! use africastalking_voice::{CallRequest, VoiceClient, VoiceConfig, VoiceError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), VoiceError> {
//!     let client = VoiceClient::new(VoiceConfig::new("sandbox", "api-key"))?;
//!
//!     let response = client
//!         .call(CallRequest::new("+254711082000", "+254711082001"))
//!         .await?;
//!     println!("{}", response.body());
//!
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod operations;
pub mod options;
pub mod session;
pub mod transport;
pub mod validation;

pub(crate) mod constants;
pub(crate) mod markup;

pub use actions::{
    ActionKind, Conference, Dequeue, Dial, Enqueue, GetDigits, Play, Record, Redirect, Reject,
    Say, VoiceAction,
};
pub use client::VoiceClient;
pub use config::{Environment, VoiceConfig};
pub use constants::{DEFAULT_TIMEOUT_MS, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
pub use dispatch::{Dispatched, VoiceMethod};
pub use error::{VoiceError, VoiceResult};
pub use operations::{
    CallEntry, CallRequest, CallResponse, MediaUpload, OperationKind, QueueEntry,
    QueuedCallsQuery, QueuedCallsResponse, VoiceOperation,
};
pub use options::ActionOptions;
pub use session::VoiceSession;
pub use transport::{ApiResponse, HttpTransport, RequestPayload, Transport};
