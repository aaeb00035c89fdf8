pub mod roster;
pub mod schedule;

pub use roster::PgRosterStore;
pub use schedule::PgScheduleStore;
