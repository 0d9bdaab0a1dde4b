//! # logview-core - Core Domain Types
//!
//! Foundation crate for logview. Provides domain types, payload decoding,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`LogEntry`] - A rendered log line with level, display text and raw payload
//! - [`LogLevel`] - Severity (Info, Error, Warning, Debug, Unknown)
//! - [`LogFileDescriptor`] - One entry of the server's file listing
//!
//! ### Decoding (`decode`)
//! - [`decode_stream_frame()`] - Live stream text frame to [`LogEntry`]
//! - [`decode_history_page()`] - Content endpoint `logs` array to entries
//! - [`RawLine`] - Plain or structured historical line
//!
//! ### Collections (`ring_buffer`)
//! - [`RingBuffer`] - Fixed-capacity FIFO with oldest-first eviction
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use logview_core::prelude::*;
//! ```

pub mod decode;
pub mod error;
pub mod logging;
pub mod ring_buffer;
pub mod types;

/// Prelude for common imports used throughout all logview crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use decode::{
    decode_history_item, decode_history_line, decode_history_page, decode_stream_frame,
    detect_level, RawLine,
};
pub use error::{Error, Result, ResultExt};
pub use ring_buffer::RingBuffer;
pub use types::{LogEntry, LogFileDescriptor, LogLevel};
