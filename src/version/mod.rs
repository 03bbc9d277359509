//! Release fetching and version parsing
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Tracker   │────▶│  Baseline   │
//! │  (fetch)    │     │  (compare)  │     │  (persist)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │   Semver    │
//! │  (github)   │     │   (parse)   │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Source trait for fetching release listings
//! - [`registries`]: Concrete sources (GitHub Releases)
//! - [`error`]: Error types for fetching, parsing and state I/O
//! - [`semver`]: Tag parsing
//! - [`types`]: `ReleaseRecord`

pub mod error;
pub mod registries;
pub mod registry;
pub mod semver;
pub mod types;
