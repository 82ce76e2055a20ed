use serde::Deserialize;

use crate::domain::advocate::{Advocate, FilterOptions};
use crate::dto::api::PageInfo;
use crate::dto::de;
use crate::pagination::Paginated;

/// Query parameters accepted by the index page.
///
/// The filter controls submit set-valued parameters as repeated form keys
/// (`cities=A&cities=B`), which is why this is parsed with `serde_html_form`
/// rather than the plain urlencoded extractor.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQueryParams {
    pub search: Option<String>,
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub degrees: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub sort_column: Option<String>,
    pub sort_direction: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_usize")]
    pub page: Option<usize>,
}

/// Data required to render the main index template.
pub struct IndexPageData {
    /// Paginated list of advocates to show in the table.
    pub advocates: Paginated<Advocate>,
    /// Pagination metadata for the current query.
    pub pagination: PageInfo,
    /// Distinct values for the filter dropdowns.
    pub filter_options: FilterOptions,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
    /// Selections echoed back so the controls keep their state.
    pub selected_cities: Vec<String>,
    pub selected_degrees: Vec<String>,
    pub selected_specialties: Vec<String>,
    /// Active ordering echoed back for the column headers.
    pub sort_column: String,
    pub sort_direction: String,
}
