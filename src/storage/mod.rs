//! Durable storage for the job tracker.
//!
//! The entire job list lives in one JSON document (`jobs.json` in the data
//! directory). It is read once when the store opens and rewritten wholesale
//! after every mutation, so the file is always a complete, valid snapshot.
//!
//! ## Document format
//!
//! ```json
//! [
//!   {
//!     "id": "7f9c0a4e-...",
//!     "company": "Acme",
//!     "role": "Engineer",
//!     "status": "Applied",
//!     "dateApplied": "2026-01-15",
//!     "updatedAt": "2026-01-15T10:30:00Z"
//!   }
//! ]
//! ```

mod job_store;

pub use job_store::{JobStore, JobUpdate};
