//! Core types for the uurrooster schedule.
//!
//! This crate provides everything the CLI (or any other front end) needs to
//! work with a schedule:
//! - `Event` and `EventType` for the in-memory domain model
//! - `record` for the JSON wire format and its conversion into events
//! - `EventStore`, the single source of truth for the loaded schedule
//! - `service` for driving a store from one owning task

pub mod config;
pub mod error;
pub mod event;
pub mod fixture;
pub mod record;
pub mod service;
pub mod store;

pub use error::{UurroosterError, UurroosterResult};
pub use event::{Event, EventType};
pub use store::EventStore;
