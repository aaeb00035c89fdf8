pub mod class;
pub mod schedule;
pub mod student;
pub mod suggestion;
