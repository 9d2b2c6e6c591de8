// Database row types.

pub mod story;
pub mod user;
