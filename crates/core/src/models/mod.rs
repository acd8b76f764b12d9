pub mod person;
pub mod requests;
pub mod schedule;
pub mod slot;
pub mod snapshot;

pub use person::Person;
pub use schedule::Assignment;
pub use slot::{Slot, SlotKey};
pub use snapshot::{ConstraintRecord, StateSnapshot, StoreMutation, UserRecord};
