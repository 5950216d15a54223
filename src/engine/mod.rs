//! Search-thread lifecycle management.

mod controller;

pub use controller::{EngineController, SearchJob};
