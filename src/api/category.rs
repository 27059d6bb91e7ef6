use serde::{Deserialize, Deserializer, Serialize};

use crate::database::models::Category;

/// Body of `POST /api/categories` and `PUT /api/categories/:id`.
///
/// A missing or `null` `name` deserializes to an empty string so that it is
/// reported by validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

pub fn to_category_responses(categories: Vec<Category>) -> Vec<CategoryResponse> {
    categories.into_iter().map(CategoryResponse::from).collect()
}
