mod error;
mod validation;

pub use error::{codes, ErrorMessage, ErrorResponse};
pub use validation::MemoLimits;

/// A single note as it travels over the wire and sits in the store.
///
/// Field names follow the JSON keys the page and existing clients send
/// (`ID`, `Title`, `Body`, `CreatedAt`, `UpdatedAt`). Timestamps are supplied
/// by the client and stored as given. A missing or `null` title or body
/// decodes as empty so that it is reported by [`Memo::validate`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Memo {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,
    #[serde(
        rename = "Title",
        alias = "title",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub title: String,
    #[serde(
        rename = "Body",
        alias = "body",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub body: String,
    #[serde(
        rename = "CreatedAt",
        alias = "created_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<chrono::DateTime<chrono::FixedOffset>>,
    #[serde(
        rename = "UpdatedAt",
        alias = "updated_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<chrono::DateTime<chrono::FixedOffset>>,
}

impl Memo {
    pub fn new(id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            created_at: None,
            updated_at: None,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = <Option<String> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
