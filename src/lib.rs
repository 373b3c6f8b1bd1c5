pub mod argsets;
pub mod command;
pub mod config;
pub mod constants;
pub mod helpers;
pub mod interfaces;
pub mod report;

pub use inventory_filter as filter;
