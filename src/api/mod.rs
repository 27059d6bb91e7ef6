pub mod category;

pub use category::{CategoryRequest, CategoryResponse};
