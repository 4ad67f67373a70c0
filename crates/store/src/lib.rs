#![deny(unsafe_code)]

//! Chat conversation state: an ordered message list plus session scalars.

pub mod chat;
pub mod error;
pub mod ids;
pub mod types;

pub use chat::ChatStore;
pub use error::{StoreError, StoreResult};
pub use ids::MessageId;
pub use types::{DEFAULT_MODEL, MessagePatch, MessageRecord, MessageRole, SessionState};
