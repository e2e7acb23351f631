pub mod skills;
pub mod summary;
