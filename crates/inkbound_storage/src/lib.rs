//! Image persistence for the Inkbound story engine.
//!
//! Scenes carry opaque [`ImageRef`](inkbound_core::ImageRef) handles; this
//! crate owns the byte-level storage behind them. The default backend is a
//! plain directory of PNG files.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod store;

pub use filesystem::FileImageStore;
pub use store::ImageStore;
