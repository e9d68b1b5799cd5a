//! Operator/display synchronization handshake.
//!
//! A display that joins announces itself with `hello` and asks for the latest
//! state with `request_state`; the operator answers each with a full `state`
//! snapshot. Between snapshots the display advances its own copy with the
//! engine's tick so the clock keeps moving smoothly.

mod message;
mod mirror;

pub use message::SyncMessage;
pub use mirror::{DisplayMirror, MirrorConfig};
