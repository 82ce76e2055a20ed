use crate::dto::api::{AdvocatesQueryParams, AdvocatesResponse, PageInfo};
use crate::repository::{AdvocateListQuery, AdvocateReader};
use crate::services::{ServiceResult, ordering, paging, split_list};

/// Runs one advocate list query: normalizes the request parameters, issues
/// the store reads, and assembles the response envelope.
pub fn list_advocates<R>(repo: &R, params: AdvocatesQueryParams) -> ServiceResult<AdvocatesResponse>
where
    R: AdvocateReader + ?Sized,
{
    let (page, per_page) = paging(params.page, params.page_size);
    let (column, direction) = ordering(
        params.sort_column.as_deref(),
        params.sort_direction.as_deref(),
    );

    let mut query = AdvocateListQuery::new()
        .cities(split_list(params.cities.as_deref()))
        .degrees(split_list(params.degrees.as_deref()))
        .specialties(split_list(params.specialties.as_deref()))
        .order_by(column, direction)
        .paginate(page, per_page);

    let search = params
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    if let Some(term) = search {
        query = query.search(term);
    }

    let (total, data) = repo.list_advocates(query)?;

    let filter_options = if params.include_filter_options {
        Some(repo.filter_options()?)
    } else {
        None
    };

    Ok(AdvocatesResponse {
        data,
        pagination: PageInfo::new(total, page, per_page),
        filter_options,
    })
}
