mod policies;
mod report;

pub use policies::policies;
pub use report::report;
