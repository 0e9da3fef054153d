pub mod athlete;
pub mod club;
pub mod coach;
pub mod document;
pub mod personnel;
pub mod tournament;
