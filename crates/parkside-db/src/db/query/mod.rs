//! Query functions per entity, executed over the async connection pool.

pub mod park;
pub mod trail;
pub mod user;

use diesel::sql_types::Text;

diesel::define_sql_function! {
    /// `PostgreSQL` `lower`, matching the expression in the unique name indexes.
    fn lower(x: Text) -> Text;
}

diesel::define_sql_function! {
    /// `PostgreSQL` `btrim`, matching the expression in the unique name indexes.
    fn btrim(x: Text) -> Text;
}
