pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod report;
pub mod session;
pub mod state;
pub mod time;
pub mod utils;

pub use error::ReportError;
pub use events::{RunEvent, read_events};
pub use session::ReportSession;
