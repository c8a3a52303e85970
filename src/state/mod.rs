//! State Management
//!
//! Global reactive state plus the pure session-state types the page
//! controllers own.

pub mod chat;
pub mod global;
pub mod requests;

pub use chat::{ChatMessage, Sender, Transcript};
pub use global::{provide_global_state, GlobalState};
pub use requests::RequestSequence;
