use sqlx::FromRow;

/// Row of the `categories` table. `id` is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    /// A category that has not been persisted yet
    pub fn unsaved(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}
