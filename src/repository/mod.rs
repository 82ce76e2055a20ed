use crate::db::DbPool;
use crate::domain::advocate::{Advocate, FilterOptions, NewAdvocate};
use crate::repository::errors::RepositoryResult;

pub mod advocate;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Columns the advocate list may be ordered by.
///
/// Anything outside this allow-list falls back to [`SortColumn::Id`] at the
/// parameter-normalization boundary; the repository never sees an
/// unrecognized column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Id,
    FirstName,
    LastName,
    City,
    Degree,
    YearsOfExperience,
}

impl SortColumn {
    /// Resolves a wire-format column name. Unknown names yield `None`.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "id" => Some(Self::Id),
            "firstName" => Some(Self::FirstName),
            "lastName" => Some(Self::LastName),
            "city" => Some(Self::City),
            "degree" => Some(Self::Degree),
            "yearsOfExperience" => Some(Self::YearsOfExperience),
            _ => None,
        }
    }

    /// Wire-format name of the column, the inverse of [`Self::from_param`].
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::City => "city",
            Self::Degree => "degree",
            Self::YearsOfExperience => "yearsOfExperience",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Only an explicit `desc` sorts descending; everything else ascends.
    pub fn from_param(value: &str) -> Self {
        if value == "desc" { Self::Desc } else { Self::Asc }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Filter, ordering, and paging instructions for one advocate list query.
#[derive(Debug, Clone, Default)]
pub struct AdvocateListQuery {
    pub search: Option<String>,
    pub cities: Vec<String>,
    pub degrees: Vec<String>,
    pub specialties: Vec<String>,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
    pub pagination: Option<Pagination>,
}

impl AdvocateListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn cities(mut self, cities: Vec<String>) -> Self {
        self.cities = cities;
        self
    }

    pub fn degrees(mut self, degrees: Vec<String>) -> Self {
        self.degrees = degrees;
        self
    }

    pub fn specialties(mut self, specialties: Vec<String>) -> Self {
        self.specialties = specialties;
        self
    }

    pub fn order_by(mut self, column: SortColumn, direction: SortDirection) -> Self {
        self.sort_column = column;
        self.sort_direction = direction;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait AdvocateReader {
    /// Returns the total number of records matching every active filter and
    /// the requested page of them.
    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)>;
    /// Distinct cities, degrees, and specialty tags across the whole store.
    fn filter_options(&self) -> RepositoryResult<FilterOptions>;
}

pub trait AdvocateWriter {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize>;
}

/// Diesel-backed implementation of the repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(self.pool.get()?)
    }
}
