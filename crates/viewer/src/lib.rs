//! Viewer: the loop controller tying camera, input and renderer together.
//!
//! The windowing backend drives a [`Viewer`] through four calls: `resume`
//! once a window can be created, `handle_key` for each key event,
//! `redraw` per frame, and `exit_status` after the loop ends.
//!
//! # Invariants
//! - The session owns the only copy of camera state; key events replace it
//!   between frames.
//! - Context creation goes through [`ContextFactory`], so a failing context
//!   can be injected without a window.
//! - Any startup failure makes the exit status a failure.

mod bootstrap;
mod error;
mod session;
mod status;
mod viewer;

pub use bootstrap::{ContextFactory, FrameTarget, WINDOW_SPEC, WindowSpec};
pub use error::{BootstrapError, FrameError, ViewerError};
pub use session::{Session, ViewerConfig};
pub use status::ExitStatus;
pub use viewer::Viewer;
