mod athlete;
mod category;
mod club;
mod coach;
mod personnel;
mod team;
mod tournament;

pub use athlete::Athlete;
pub use category::{CATEGORY_TAGS, Category};
pub use club::Club;
pub use coach::Coach;
pub use personnel::{Media, Staff};
pub use team::Team;
pub use tournament::{Tournament, TournamentParticipation};
