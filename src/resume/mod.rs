//! Resume builder session logic.
//!
//! Wraps a [`crate::remote::ResumeStore`] with the local working state the
//! builder operates on: the resume list, the current selection, and the
//! selection's work experiences.

mod session;

pub use session::ResumeSession;
