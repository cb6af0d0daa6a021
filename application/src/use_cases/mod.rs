//! Use cases (application services)

pub mod ask_assistant;
