//! Thread domain types

use serde::{Deserialize, Serialize};

/// Server-side conversation context holding ordered messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
}
