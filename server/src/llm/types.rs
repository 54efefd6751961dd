//! Provider-neutral tool definition types.

use serde::{Deserialize, Serialize};

/// A callable tool advertised to the conversation model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}
