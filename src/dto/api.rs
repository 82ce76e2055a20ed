//! DTOs exposed by the advocate API endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::advocate::{Advocate, FilterOptions};
use crate::dto::de;

/// Query parameters accepted by the `/api/v1/advocates` endpoint.
///
/// Set-valued parameters arrive as comma-separated single values. Numeric
/// parameters that fail to parse fall back to their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocatesQueryParams {
    pub search: Option<String>,
    pub cities: Option<String>,
    pub degrees: Option<String>,
    pub specialties: Option<String>,
    pub sort_column: Option<String>,
    pub sort_direction: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_usize")]
    pub page: Option<usize>,
    #[serde(default, deserialize_with = "de::lenient_usize")]
    pub page_size: Option<usize>,
    #[serde(default, deserialize_with = "de::lenient_bool")]
    pub include_filter_options: bool,
}

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl PageInfo {
    pub fn new(total: usize, page: usize, page_size: usize) -> Self {
        Self {
            total,
            page,
            page_size,
            total_pages: total.div_ceil(page_size.max(1)),
        }
    }
}

/// Result envelope returned by the advocates query endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocatesResponse {
    pub data: Vec<Advocate>,
    pub pagination: PageInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_options: Option<FilterOptions>,
}

/// Error envelope returned on request failure.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}
