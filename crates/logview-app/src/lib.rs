//! logview-app - Application state and orchestration for logview
//!
//! Implements the TEA (The Elm Architecture) pattern: every user input,
//! transport event and timer firing becomes a [`Message`], processed serially
//! by [`handler::update`]. Background tasks never touch state; they only send
//! messages back.
//!
//! The domain pieces are plain state machines with no I/O:
//! [`ConnectionSupervisor`] (live stream lifecycle), [`LiveLogBuffer`],
//! [`HistoryPager`] and [`Session`]. The [`Engine`] wires them to the
//! network through `logview-client`.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod history;
pub mod input_key;
pub mod live_buffer;
pub mod log_view_state;
pub mod message;
pub mod process;
pub mod session;
pub mod signals;
pub mod state;
pub mod supervisor;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use history::{HistoryPager, HistoryQuery, PageDirection, PageRequest};
pub use input_key::InputKey;
pub use live_buffer::{LiveLogBuffer, LIVE_BUFFER_CAPACITY};
pub use message::Message;
pub use session::{Session, Tab};
pub use state::{AppState, UiMode};
pub use supervisor::{ConnectionPolicy, ConnectionState, ConnectionSupervisor};
