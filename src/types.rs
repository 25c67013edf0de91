//! Common types and data structures

use egui::Color32;
use std::fmt;

/// One step of the vibe cycle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VibeState {
    pub label: &'static str,
    pub color: Color32,
    pub glow: Color32,
}

/// Row identifier from the users table - integer or uuid depending on schema.
/// Anything else is kept as raw JSON; the id is never needed to show a name.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Int(i64),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Int(id) => write!(f, "{}", id),
            UserId::Text(id) => f.write_str(id),
            UserId::Other(id) => write!(f, "{}", id),
        }
    }
}

/// User row returned by the backend
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub name: String,
}
