use diesel::prelude::*;

use crate::domain::{Category, DomainValidationError};

/// Category row for SELECT operations
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRow {
    pub id: i32,
    pub name: String,
}

/// Category insert model
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategoryRow<'a> {
    pub name: &'a str,
}

/// Category update model; every mutable column is written
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::categories)]
pub struct CategoryChangeset<'a> {
    pub name: &'a str,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainValidationError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Category::with_id(row.id, row.name)
    }
}

impl<'a> From<&'a Category> for NewCategoryRow<'a> {
    fn from(category: &'a Category) -> Self {
        Self {
            name: category.name(),
        }
    }
}

impl<'a> From<&'a Category> for CategoryChangeset<'a> {
    fn from(category: &'a Category) -> Self {
        Self {
            name: category.name(),
        }
    }
}
