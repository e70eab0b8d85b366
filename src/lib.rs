// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Drag-to-spin viewer for 360° image sequences.
//!
//! A subject photographed from N evenly spaced angles is shown one frame at
//! a time; dragging horizontally swaps frames to fake a 3D rotation using
//! plain raster images.
//!
//! # Key entry points
//!
//! - [`viewer::SpinViewer`] - owns everything and exposes the pointer entry
//!   points (`handle_pointer_down/move/end`) and `current_index`
//! - [`ring::FrameRing`] - circular 1..N index space and the per-frame
//!   visibility / fetch-priority state
//! - [`input::DragController`] - turns pointer movement into single-frame
//!   steps once a sensitivity threshold is exceeded
//! - [`surface::FrameSurface`] - what a host surface must support (show,
//!   hide, fetch priority)
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Architecture
//!
//! Everything runs synchronously on the thread that delivers pointer
//! events. A committed step updates the ring, then the surface table
//! mirrors the ring: the current frame is shown at high priority, every
//! other frame is hidden at low priority, and the two ring neighbours of
//! the current frame are bumped to high priority so the next frame in
//! either drag direction is already loading.
//!
//! With the `web` feature, `web::WebViewer` builds `<img>` surfaces in a
//! DOM container and wires mouse and touch listeners to the viewer.

pub mod error;
pub mod input;
pub mod options;
pub mod ring;
pub mod surface;
pub mod viewer;
#[cfg(feature = "web")]
pub mod web;

pub use error::SpinError;
pub use viewer::{SpinCommand, SpinViewer};
