pub mod category_service;
pub mod validation;

pub use category_service::{CategoryService, ServiceError};
pub use validation::{validate_category_request, ValidationErrors};
