use crate::error::{AppError, AppResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> AppResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(AppError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Trims a query string, returning None if blank.
pub fn trim_query(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|s| !s.is_empty())
}

/// Checks that a page of `item_count` items fits the `limit` the server claims.
pub fn page_fits(item_count: usize, limit: u64) -> AppResult<()> {
    if item_count as u64 > limit {
        Err(AppError::InvalidResponse(format!(
            "page holds {} items but declares limit {}",
            item_count, limit
        )))
    } else {
        Ok(())
    }
}
