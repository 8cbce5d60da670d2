//! Diesel table definitions for the SQLite store.
//!
//! Must match the statements in `bootstrap.rs`.

diesel::table! {
    /// Registered accounts. Rows are never updated or deleted.
    users (id) {
        id -> BigInt,
        username -> Text,
        email -> Text,
        /// Hex SHA-256 digest; the column keeps its historical name.
        #[sql_name = "password"]
        password_hash -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    /// One row per recorded holding.
    portfolio (id) {
        id -> BigInt,
        /// Owner username. Not enforced as a foreign key.
        username -> Text,
        asset_name -> Text,
        /// Asset class display label.
        asset_type -> Text,
        current_value -> Double,
        added_date -> Timestamp,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, portfolio);
