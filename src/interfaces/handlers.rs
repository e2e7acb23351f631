pub mod home;
pub mod skills;
pub mod summarize;
pub mod system;
