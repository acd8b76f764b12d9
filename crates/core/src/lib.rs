//! # Rotaplan Core
//!
//! Domain model and assignment engine for the rotaplan duty-rota service.
//! This crate is pure: it holds the session state, the operations that
//! mutate it, and the monthly assignment algorithm, with no I/O of its own.
//!
//! ## Architecture
//!
//! - **Models**: people, constraints, slots, schedule entries, and the wire
//!   snapshot exchanged with the store
//! - **State**: the explicit `RosterState` session object
//! - **Ops**: session operations that mutate state and return the change-set
//!   to replay against the store
//! - **Engine**: calendar enumeration, eligibility filtering, fairness
//!   ranking, the month generator, and aggregate counters

/// Error types shared across the workspace
pub mod errors;
/// Duty assignment engine: calendar, eligibility, fairness, generation, counters
pub mod engine;
/// Domain and wire models
pub mod models;
/// Session operations and their change-sets
pub mod ops;
/// The in-memory session state
pub mod state;
