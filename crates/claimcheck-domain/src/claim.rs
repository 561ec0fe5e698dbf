//! Claim module - the records a language model reports back
//!
//! The shape of a claim belongs to whatever reply schema the caller's
//! instruction prompt asks for, so claimcheck carries each one as an opaque
//! JSON value and never inspects its fields.

use crate::chunk::Chunk;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single claim reported by the language model
///
/// # Examples
///
/// ```
/// use claimcheck_domain::Claim;
/// use serde_json::json;
///
/// let claim = Claim::new(json!({"text": "water boils at 100c"}));
/// assert_eq!(claim.get("text").and_then(|v| v.as_str()), Some("water boils at 100c"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claim(Value);

impl Claim {
    /// Wrap a raw JSON value as a claim
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Look up a top-level field, if the claim is a JSON object
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Value> for Claim {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}

/// Claims found in a single chunk
///
/// Only produced for chunks whose reply carried at least one claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkClaims {
    /// Index of the chunk's first word within the document
    pub start: usize,

    /// The chunk text that was sent to the model
    pub text: String,

    /// Claims reported for this chunk, in reply order
    pub claims: Vec<Claim>,
}

impl ChunkClaims {
    /// Pair a chunk with the claims found in it
    pub fn new(chunk: &Chunk, claims: Vec<Claim>) -> Self {
        Self {
            start: chunk.start,
            text: chunk.text.clone(),
            claims,
        }
    }
}
