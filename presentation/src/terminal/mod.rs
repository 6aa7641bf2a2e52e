//! Terminal adapters

pub mod console;
