use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// One book record as it flows through the pipeline.
///
/// Field constraints are not enforced here; see `validation::FieldValidator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "@id", default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genre: String,
    #[serde(default)]
    pub price: Decimal,
    /// `None` when the source did not assign a date.
    #[serde(default)]
    pub publish_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        author: impl Into<String>,
        title: impl Into<String>,
        price: Decimal,
        publish_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            title: title.into(),
            genre: String::new(),
            price,
            publish_date: Some(publish_date),
            description: String::new(),
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
