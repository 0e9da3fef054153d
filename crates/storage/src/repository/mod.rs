pub mod athlete;
pub mod club;
pub mod coach;
pub mod personnel;
pub mod tournament;
