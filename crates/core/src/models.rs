pub mod requests;
pub mod schedule;
pub mod slot;
pub mod time;
