pub mod constraints;
pub mod health;
pub mod holidays;
pub mod roster;
pub mod schedule;
pub mod state;
