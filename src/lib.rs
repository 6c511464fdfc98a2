//! # Jobtrail - a job application tracker and resume workbench
//!
//! Jobtrail keeps a kanban-style board of job applications in a single local
//! JSON document and manages base resumes in a remote tabular store. Pasted
//! resume text is split into work-experience entries by a line-oriented
//! heuristic, and individual entries can be rewritten for a specific job
//! posting by an AI customization endpoint.
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a project
//! jobtrail init
//!
//! # Track an application
//! jobtrail add "Acme Corp" "Platform Engineer" --status applied
//!
//! # See the board
//! jobtrail board
//!
//! # Upload a resume and extract its work history
//! jobtrail resume upload "Backend 2026" resume.txt
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: Client for the AI customization endpoint
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`extract`]: Resume section extraction heuristic
//! - [`model`]: Data models (JobApplication, Resume, WorkExperience)
//! - [`remote`]: Remote resume store client
//! - [`resume`]: Resume session state and operations
//! - [`server`]: Document-extraction HTTP service
//! - [`storage`]: Single-document job storage
//! - [`validation`]: Input validation utilities

/// Client for the AI customization endpoint.
pub mod ai;

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.jobtrail.yml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `JobtrailError` enum and `Result<T>` type alias.
pub mod error;

/// Resume section extraction.
///
/// Splits pasted resume text into candidate work-experience entries.
pub mod extract;

pub mod logging;

/// Data models for applications and resumes.
pub mod model;

/// Remote resume store.
///
/// PostgREST-style HTTP client behind the `ResumeStore` trait.
pub mod remote;

/// Resume session state and operations.
pub mod resume;

/// Document-extraction HTTP service.
///
/// Turns uploaded PDF/DOCX files into plain text.
pub mod server;

/// Single-document job storage.
///
/// The whole application list is rewritten on every mutation.
pub mod storage;

/// Input validation utilities.
///
/// Validates company names, roles, links, and notes.
pub mod validation;
