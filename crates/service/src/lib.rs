//! Service layer enforcing the course / module / assignment data model.
//! - Referential integrity checks run before any mutation.
//! - Cascade deletes and graph inserts are single units of work in the store.
//! - Persistence sits behind the `lms::repository` traits; SeaORM implements them.

pub mod errors;
pub mod lms;
#[cfg(test)]
pub mod test_support;

pub use lms::LmsServices;
