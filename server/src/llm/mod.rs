//! LLM-facing tool surface for the external conversation service.
//!
//! The model conversation itself runs inside the external voice
//! infrastructure; this module only publishes the tool contract that
//! service binds when a session starts.

pub mod tools;
pub mod types;
