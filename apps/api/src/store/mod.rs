// Persistence layer. All SQL lives here; handlers never write queries.

pub mod stories;
pub mod users;
