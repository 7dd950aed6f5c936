//! Core library for comicmeta
//!
//! This crate implements the **Functional Core** of the comicmeta application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The comicmeta project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`comicmeta_core`** (this crate): Pure transformation functions with zero I/O
//! - **`comicmeta`**: HTTP transport, the pagination driver, and the CLI (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no clocks, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! The one input that looks impure, the request timestamp, is passed in by the
//! shell so that URL construction and signing stay deterministic.
//!
//! # Module Organization
//!
//! - [`error`]: The error type shared by the core and the shell
//! - [`marvel`]: Signing, URL composition, wire types, and record mapping for the
//!   Marvel catalog service
//! - [`pagination`]: Page window arithmetic and result accumulation
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use comicmeta_core::marvel::series::parse_series_title;
//!
//! let detail = parse_series_title("Ms. Marvel (2016 - 2019)");
//!
//! assert_eq!(detail.name, "Ms. Marvel");
//! assert_eq!(detail.start_year, "2016");
//! ```

pub mod error;
pub mod marvel;
pub mod pagination;
