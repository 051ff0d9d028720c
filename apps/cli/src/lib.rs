//! Editor host for keytone.
//!
//! The editor extension pipes its change and selection notifications into
//! this process as JSON lines; sounds come out of the selected sink.

pub mod bridge;
pub mod commands;
pub mod host;
pub mod launch;

pub use bridge::{parse_line, Command, HostMessage, Notice, NoticeLevel};
pub use commands::CommandOutcome;
pub use host::Host;
