use thiserror::Error;

use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE};
use crate::repository::errors::RepositoryError;
use crate::repository::{SortColumn, SortDirection};

pub mod api;
pub mod main;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Clamps the requested page and page size into the supported range,
/// defaulting anything missing or out of bounds.
pub(crate) fn paging(page: Option<usize>, page_size: Option<usize>) -> (usize, usize) {
    let page = page.unwrap_or(1).max(1);
    let per_page = page_size
        .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
        .clamp(1, MAX_ITEMS_PER_PAGE);
    (page, per_page)
}

/// Resolves the sort parameters against the allow-list. An unknown or
/// missing column falls back to ordering by identifier.
pub(crate) fn ordering(
    sort_column: Option<&str>,
    sort_direction: Option<&str>,
) -> (SortColumn, SortDirection) {
    let column = sort_column
        .and_then(SortColumn::from_param)
        .unwrap_or_default();
    let direction = sort_direction
        .map(SortDirection::from_param)
        .unwrap_or_default();
    (column, direction)
}

/// Splits a comma-separated parameter into trimmed, non-empty values.
pub(crate) fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Drops empty entries from an already-split selection.
pub(crate) fn clean_selection(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
