//! Process lookup used to enrich windows with their owner's command line.

mod handler;
mod types;

pub use handler::SysinfoProcessSource;
pub use types::{ProcessInfo, ProcessSource, ProcessTable};
