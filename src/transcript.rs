/// Type definitions for the Gemini chat transcript JSON format.
///
/// A transcript file is a single JSON object carrying the conversation under
/// `chunkedPrompt.chunks`, an ordered array of role-tagged text chunks:
///
/// ```json
/// {
///   "chunkedPrompt": {
///     "chunks": [
///       { "role": "user", "text": "..." },
///       { "role": "model", "text": "...", "isThought": true }
///     ]
///   }
/// }
/// ```
///
/// Every field below the root is optional in the wild; absent fields default
/// (empty string, `false`, empty list) so that a sparse transcript never
/// fails deserialization. Only a non-object root is rejected, by serde itself.
use serde::{Deserialize, Deserializer};

/// A fully parsed transcript file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    #[serde(default)]
    pub chunked_prompt: ChunkedPrompt,
}

/// The conversation container holding the ordered chunk sequence.
#[derive(Debug, Default, Deserialize)]
pub struct ChunkedPrompt {
    #[serde(default)]
    pub chunks: Vec<Chunk>,
}

/// One atomic transcript entry: a role, its text, and the thought marker.
///
/// `is_thought` is only ever set on non-user chunks (internal reasoning the
/// assistant produced before its visible reply).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub is_thought: bool,
}

/// Who produced a chunk. The wire format uses free-form role strings
/// ("user", "model", ...); everything other than the literal `"user"` is
/// assistant-like for extraction purposes, so anything else collapses to
/// [`Role::Other`]. A missing role does too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Role {
    User,
    #[default]
    Other,
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let role = String::deserialize(deserializer)?;
        Ok(if role == "user" { Role::User } else { Role::Other })
    }
}
