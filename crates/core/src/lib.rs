//! Core library for pitwall
//!
//! This crate implements the **Functional Core** of the pitwall application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! - **`pitwall_core`** (this crate): pure standings transformations with zero I/O
//! - **`pitwall`**: HTTP fetching, CLI, and rendering (the Imperative Shell)
//!
//! Everything here is deterministic and testable with fixture data, no mocking
//! required. The crate is organized by concern:
//!
//! - [`driver`]: wire types, ranking, and filter option derivation
//! - [`filter`]: filter dimensions and multi-dimension selections
//! - [`sort`]: sortable columns, comparators, and the single-active-column toggle
//! - [`view`]: the standings view engine that keeps all of the above consistent
//!
//! The view engine models the one asynchronous boundary of the system (the
//! season fetch) as a synchronous two-phase protocol, so even the stale-response
//! guard can be exercised in plain unit tests.

pub mod driver;
pub mod filter;
pub mod sort;
pub mod view;

pub use driver::{rank, unique_values, DriverRecord, RawDriver, StandingsOutput};
pub use filter::{apply_filters, FilterDimension, Filters};
pub use sort::{sort_by_column, ActiveSort, SortColumn, SortDirection};
pub use view::{LoadOutcome, LoadToken, StandingsView};
