//! Presence checks for create payloads
//!
//! Only presence is checked: a field is missing when it is absent or blank.
//! Accepted values are stored exactly as submitted.

use crate::error::AppError;

pub fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AppError::BadRequest(format!("{} is required", field))),
    }
}

/// Ids are opaque, so any non-blank text is accepted
pub fn required_id<I: AsRef<str>>(value: Option<I>, field: &str) -> Result<I, AppError> {
    match value {
        Some(id) if !id.as_ref().trim().is_empty() => Ok(id),
        _ => Err(AppError::BadRequest(format!("{} is required", field))),
    }
}

/// Blank optional text is treated as absent
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UserId;

    #[test]
    fn required_text_rejects_missing_and_blank() {
        assert!(required_text(None, "name").is_err());
        assert!(required_text(Some(String::new()), "name").is_err());
        assert!(required_text(Some("   ".to_string()), "name").is_err());
    }

    #[test]
    fn required_text_keeps_value_untrimmed() {
        assert_eq!(
            required_text(Some(" Pull Up".to_string()), "title").unwrap(),
            " Pull Up"
        );
    }

    #[test]
    fn required_id_accepts_any_non_blank_text() {
        assert_eq!(
            required_id(Some(UserId::from("u1")), "created_by").unwrap(),
            UserId::from("u1")
        );
        assert!(required_id(None::<UserId>, "created_by").is_err());
        assert!(required_id(Some(UserId::from("  ")), "created_by").is_err());
    }

    #[test]
    fn optional_text_drops_blank() {
        assert_eq!(optional_text(Some(" ".to_string())), None);
        assert_eq!(optional_text(Some("chest".to_string())), Some("chest".to_string()));
    }
}
