use std::fmt;

use crate::api::CategoryRequest;

/// Longest accepted category name, in characters
pub const NAME_MAX_LEN: usize = 200;

/// A single violated rule on a request field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Field validation for '{}' failed on the '{}' tag",
            self.field, self.rule
        )
    }
}

/// Every structural violation found on one request. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|e| e.field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Check `name` is present and not longer than [`NAME_MAX_LEN`]
pub fn validate_category_request(request: &CategoryRequest) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if request.name.is_empty() {
        errors.push(FieldError { field: "name", rule: "required" });
    } else if request.name.chars().count() > NAME_MAX_LEN {
        errors.push(FieldError { field: "name", rule: "max" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
