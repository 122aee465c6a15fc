//! JSON report files on disk

mod io;
mod writer;

pub use io::{atomic_write, to_pretty_json};
pub use writer::{OutputWriter, ReportKind};
