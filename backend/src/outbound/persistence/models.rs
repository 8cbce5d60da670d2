//! Diesel row structs. Never exposed outside the persistence module.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{portfolio, users};

/// Insertable account row; `id` and `created_at` come from SQLite.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Row struct for reading holdings.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = portfolio)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct HoldingRow {
    pub id: i64,
    pub username: String,
    pub asset_name: String,
    pub asset_type: String,
    pub current_value: f64,
    pub added_date: NaiveDateTime,
}

/// Insertable holding row; `id` and `added_date` come from SQLite.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = portfolio)]
pub(crate) struct NewHoldingRow<'a> {
    pub username: &'a str,
    pub asset_name: &'a str,
    pub asset_type: &'a str,
    pub current_value: f64,
}
