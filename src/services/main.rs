use crate::dto::api::PageInfo;
use crate::dto::main::{IndexPageData, IndexQueryParams};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{AdvocateListQuery, AdvocateReader};
use crate::services::{ServiceResult, clean_selection, ordering};

/// Loads the advocate list and filter options for the index page.
pub fn load_index_page<R>(repo: &R, params: IndexQueryParams) -> ServiceResult<IndexPageData>
where
    R: AdvocateReader + ?Sized,
{
    let page = params.page.unwrap_or(1).max(1);
    let (column, direction) = ordering(
        params.sort_column.as_deref(),
        params.sort_direction.as_deref(),
    );

    let selected_cities = clean_selection(params.cities);
    let selected_degrees = clean_selection(params.degrees);
    let selected_specialties = clean_selection(params.specialties);

    let search_query = params
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut query = AdvocateListQuery::new()
        .cities(selected_cities.clone())
        .degrees(selected_degrees.clone())
        .specialties(selected_specialties.clone())
        .order_by(column, direction)
        .paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(term) = &search_query {
        query = query.search(term.clone());
    }

    let (total, advocates) = repo.list_advocates(query)?;
    let filter_options = repo.filter_options()?;

    let pagination = PageInfo::new(total, page, DEFAULT_ITEMS_PER_PAGE);
    let advocates = Paginated::new(advocates, page, pagination.total_pages);

    Ok(IndexPageData {
        advocates,
        pagination,
        filter_options,
        search_query,
        selected_cities,
        selected_degrees,
        selected_specialties,
        sort_column: column.as_param().to_string(),
        sort_direction: direction.as_param().to_string(),
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::advocate::{Advocate, FilterOptions};
    use crate::repository::mock::MockRepository;

    fn sample_advocate(id: i32) -> Advocate {
        Advocate {
            id,
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            city: "Springfield".to_string(),
            degree: "MD".to_string(),
            ..Advocate::default()
        }
    }

    #[test]
    fn echoes_selections_and_resolved_ordering() {
        let mut repo = MockRepository::new();
        repo.expect_list_advocates()
            .returning(|_| Ok((1, vec![sample_advocate(1)])));
        repo.expect_filter_options()
            .returning(|| Ok(FilterOptions::default()));

        let params = IndexQueryParams {
            cities: vec!["Springfield".to_string(), " ".to_string()],
            sort_column: Some("garbage".to_string()),
            sort_direction: Some("desc".to_string()),
            ..IndexQueryParams::default()
        };

        let data = load_index_page(&repo, params).unwrap();
        assert_eq!(data.selected_cities, vec!["Springfield".to_string()]);
        assert_eq!(data.sort_column, "id");
        assert_eq!(data.sort_direction, "desc");
        assert_eq!(data.pagination.total, 1);
        assert_eq!(data.advocates.items.len(), 1);
    }
}
