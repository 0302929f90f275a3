//! Filesystem utilities for changelog-notify.
//!
//! Rendered templates and starter configs are written atomically so a failed
//! run never leaves a half-written file for the deployment step to pick up.

pub mod atomic;

pub use atomic::atomic_write_file;
