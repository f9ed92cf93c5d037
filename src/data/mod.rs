pub mod keyword;
pub mod page;
pub mod preference;
pub mod project;
pub mod skill;
pub mod student;
pub mod teacher;
pub mod user;

/// Value of the `active` flag on freshly created catalog entries.
pub const DEFAULT_ACTIVE: bool = true;
