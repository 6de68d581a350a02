//! Board entities as exchanged with the remote endpoint.
//!
//! The backend is loosely typed: ids arrive as strings or numbers and prices
//! as numbers, numeric strings or nothing at all. Everything is normalised
//! here, at ingestion, so the rest of the crate compares plain strings.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A listed item on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Creation time; doubles as the post's unique id.
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub item_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub item_type: String,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: u64,
    /// Free text; may start with a `[장소: X]` location line.
    #[serde(default, deserialize_with = "lenient_string")]
    pub memo: String,
}

impl Post {
    /// The post's id (its timestamp).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.timestamp
    }
}

/// A reply attached to a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Timestamp of the post this comment belongs to.
    #[serde(default, deserialize_with = "lenient_string")]
    pub post_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub author: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: String,
}

/// Body of a successful GET against the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub post: Vec<Post>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comment: Vec<Comment>,
}

/// Fields of a `new_post` action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub item_name: String,
    pub item_type: String,
    pub price: u64,
    pub memo: String,
    pub comment_author_id: String,
}

/// Fields of a `new_comment` action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub post_id: String,
    pub author: String,
    pub content: String,
}

/// A write request, serialized as the JSON `payload` form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action_type", rename_all = "snake_case")]
pub enum Action {
    NewPost(NewPost),
    NewComment(NewComment),
}

impl Action {
    #[must_use]
    pub fn action_type(&self) -> &'static str {
        match self {
            Self::NewPost(_) => "new_post",
            Self::NewComment(_) => "new_comment",
        }
    }
}

/// Reply to a POST against the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Canonical string form of a loosely typed JSON scalar.
///
/// Integral floats drop their fraction so `1700000000000.0` and
/// `1700000000000` name the same id.
#[must_use]
pub fn canonical_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                v.to_string()
            } else if let Some(v) = n.as_u64() {
                v.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => format!("{}", f as i64),
                    Some(f) => f.to_string(),
                    None => n.to_string(),
                }
            }
        }
        other => other.to_string(),
    }
}

/// Non-negative integer price from a loosely typed JSON value.
#[must_use]
pub fn canonical_price(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite() && *f > 0.0)
                        .map(|f| f as u64)
                })
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(canonical_string(&value))
}

fn lenient_price<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(canonical_price(&value))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
