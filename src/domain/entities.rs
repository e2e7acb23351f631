pub mod option_fields;
pub mod skill;
pub mod summary;
