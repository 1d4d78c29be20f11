pub mod types;
pub mod worker;

pub use types::*;
pub use worker::PollWorker;
