pub mod athletes;
pub mod clubs;
pub mod coaches;
pub mod documents;
pub mod personnel;
pub mod tournaments;
