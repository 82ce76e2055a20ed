use std::collections::BTreeSet;

use diesel::define_sql_function;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::sqlite::Sqlite;

use crate::domain::advocate::{Advocate, FilterOptions, NewAdvocate};
use crate::models::advocate::{Advocate as DbAdvocate, decode_specialties};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AdvocateListQuery, AdvocateReader, AdvocateWriter, DieselRepository, SortColumn, SortDirection,
};
use crate::schema::advocates;

define_sql_function! {
    /// SQLite's `lower`, used so string ordering ignores case.
    fn lower(value: Text) -> Text;
}

/// Builds the column-level predicate set: free-text search over names and
/// city, plus city/degree membership, all ANDed. Specialty narrowing is not
/// expressible here and happens after the query.
fn filtered(query: &AdvocateListQuery) -> advocates::BoxedQuery<'_, Sqlite> {
    let mut statement = advocates::table.into_boxed();

    if let Some(term) = query.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        let pattern = format!("%{term}%");
        statement = statement.filter(
            advocates::first_name
                .like(pattern.clone())
                .or(advocates::last_name.like(pattern.clone()))
                .or(advocates::city.like(pattern)),
        );
    }

    if !query.cities.is_empty() {
        statement = statement.filter(advocates::city.eq_any(&query.cities));
    }

    if !query.degrees.is_empty() {
        statement = statement.filter(advocates::degree.eq_any(&query.degrees));
    }

    statement
}

/// Applies the allow-listed ordering. Ties always break on `id` ascending so
/// the result sequence is a total order and identical queries return
/// identical pages.
fn ordered<'a>(
    statement: advocates::BoxedQuery<'a, Sqlite>,
    column: SortColumn,
    direction: SortDirection,
) -> advocates::BoxedQuery<'a, Sqlite> {
    use SortDirection::{Asc, Desc};

    let statement = match (column, direction) {
        (SortColumn::Id, Asc) => statement.order(advocates::id.asc()),
        (SortColumn::Id, Desc) => statement.order(advocates::id.desc()),
        (SortColumn::FirstName, Asc) => statement.order(lower(advocates::first_name).asc()),
        (SortColumn::FirstName, Desc) => statement.order(lower(advocates::first_name).desc()),
        (SortColumn::LastName, Asc) => statement.order(lower(advocates::last_name).asc()),
        (SortColumn::LastName, Desc) => statement.order(lower(advocates::last_name).desc()),
        (SortColumn::City, Asc) => statement.order(lower(advocates::city).asc()),
        (SortColumn::City, Desc) => statement.order(lower(advocates::city).desc()),
        (SortColumn::Degree, Asc) => statement.order(lower(advocates::degree).asc()),
        (SortColumn::Degree, Desc) => statement.order(lower(advocates::degree).desc()),
        (SortColumn::YearsOfExperience, Asc) => {
            statement.order(advocates::years_of_experience.asc())
        }
        (SortColumn::YearsOfExperience, Desc) => {
            statement.order(advocates::years_of_experience.desc())
        }
    };

    statement.then_order_by(advocates::id.asc())
}

impl AdvocateReader for DieselRepository {
    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)> {
        let mut conn = self.conn()?;

        if query.specialties.is_empty() {
            let total: i64 = filtered(&query).count().get_result(&mut conn)?;

            let mut statement = ordered(filtered(&query), query.sort_column, query.sort_direction);
            if let Some(pagination) = &query.pagination {
                let page = pagination.page.max(1);
                let per_page = pagination.per_page as i64;
                statement = statement
                    .limit(per_page)
                    .offset((page as i64 - 1) * per_page);
            }

            let items = statement
                .load::<DbAdvocate>(&mut conn)?
                .into_iter()
                .map(Into::into)
                .collect::<Vec<Advocate>>();

            Ok((total as usize, items))
        } else {
            // The specialty column is an opaque JSON list, so membership has
            // to be evaluated in process. Fetch the full column-filtered set
            // in store order, narrow it, recompute the total, then slice the
            // requested window so counts stay exact.
            let matched = ordered(filtered(&query), query.sort_column, query.sort_direction)
                .load::<DbAdvocate>(&mut conn)?
                .into_iter()
                .map(Advocate::from)
                .filter(|advocate| advocate.has_specialties(&query.specialties))
                .collect::<Vec<Advocate>>();

            let total = matched.len();
            let items = match &query.pagination {
                Some(pagination) => {
                    let page = pagination.page.max(1);
                    matched
                        .into_iter()
                        .skip((page - 1) * pagination.per_page)
                        .take(pagination.per_page)
                        .collect()
                }
                None => matched,
            };

            Ok((total, items))
        }
    }

    fn filter_options(&self) -> RepositoryResult<FilterOptions> {
        let mut conn = self.conn()?;

        let cities: Vec<String> = advocates::table
            .select(advocates::city)
            .distinct()
            .order(advocates::city.asc())
            .load(&mut conn)?;

        let degrees: Vec<String> = advocates::table
            .select(advocates::degree)
            .distinct()
            .order(advocates::degree.asc())
            .load(&mut conn)?;

        let specialties: BTreeSet<String> = advocates::table
            .select(advocates::specialties)
            .load::<String>(&mut conn)?
            .iter()
            .flat_map(|raw| decode_specialties(raw))
            .collect();

        Ok(FilterOptions {
            cities,
            degrees,
            specialties: specialties.into_iter().collect(),
        })
    }
}

impl AdvocateWriter for DieselRepository {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize> {
        use crate::models::advocate::NewAdvocate as DbNewAdvocate;

        let mut conn = self.conn()?;
        let insertables: Vec<DbNewAdvocate> = new_advocates.iter().map(Into::into).collect();
        let affected = diesel::insert_into(advocates::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
