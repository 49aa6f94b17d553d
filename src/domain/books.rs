use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A book record as served by the backend.
///
/// The body is kept as raw JSON so a record relayed through the JSON API or
/// the CLI comes out exactly as it went in. Accessors read the commonly used
/// fields leniently: a missing, `null` or differently typed field is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Book(Value);

impl Book {
    /// The backend answers unknown ids with an empty object rather than a 404.
    pub fn exists(&self) -> bool {
        self.id().is_some_and(|id| !id.is_empty())
    }

    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn sub_title(&self) -> Option<&str> {
        self.str_field("subTitle")
    }

    pub fn author(&self) -> Option<&str> {
        self.str_field("author")
    }

    pub fn image_link(&self) -> Option<&str> {
        self.str_field("imageLink").filter(|link| !link.is_empty())
    }

    pub fn audio_link(&self) -> Option<&str> {
        self.str_field("audioLink").filter(|link| !link.is_empty())
    }

    pub fn average_rating(&self) -> Option<f64> {
        self.field("averageRating").and_then(Value::as_f64)
    }

    pub fn total_rating(&self) -> Option<u64> {
        self.field("totalRating").and_then(Value::as_u64)
    }

    pub fn key_ideas(&self) -> Option<u64> {
        self.field("keyIdeas").and_then(Value::as_u64)
    }

    pub fn kind(&self) -> Option<&str> {
        self.str_field("type")
    }

    pub fn book_description(&self) -> Option<&str> {
        self.str_field("bookDescription")
    }

    pub fn author_description(&self) -> Option<&str> {
        self.str_field("authorDescription")
    }

    /// String entries of `tags`; anything else in the array is skipped.
    pub fn tags(&self) -> Vec<String> {
        self.field("tags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_premium(&self) -> bool {
        self.field("subscriptionRequired")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }
}

/// List selector accepted by the `getBooks` endpoint.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BookStatus {
    Selected,
    Recommended,
    Suggested,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Selected => "selected",
            BookStatus::Recommended => "recommended",
            BookStatus::Suggested => "suggested",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            BookStatus::Selected => "Selected just for you",
            BookStatus::Recommended => "Recommended For You",
            BookStatus::Suggested => "Suggested Books",
        }
    }
}
