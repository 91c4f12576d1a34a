//! # Trove Collection
//!
//! Fluent in-memory collections of loosely-typed records.
//!
//! This crate provides an ordered sequence of heterogeneous records with
//! query-style operations layered on top: filtering, predicate matching,
//! projection, deduplication, chunking and slicing. It is meant for
//! application code that wants database-flavored data manipulation without a
//! database.
//!
//! ## Design Principles
//!
//! - **No IO**: collections have no knowledge of files, network, or platform
//! - **Non-mutating queries**: derived-collection operations build a fresh
//!   collection and never alter the receiver
//! - **Fail-soft fields**: a missing record field is an absent value, never
//!   an error; only malformed queries error
//! - **Deterministic**: insertion order is preserved unless explicitly
//!   re-sorted
//!
//! ## Core Concepts
//!
//! ### Records
//!
//! A record is an open-ended mapping from field name to value. The [`Record`]
//! trait covers field lookup, record construction and the clone strategy used
//! for isolation copies; it is implemented for `serde_json::Value` and
//! `serde_json::Map<String, Value>` out of the box.
//!
//! ### Primary key
//!
//! A collection optionally names one field as its primary key. Identity
//! lookups ([`Collection::get`], [`Collection::has`], [`Collection::diff`],
//! [`Collection::pull`]) resolve against that field with loose (coercive)
//! equality.
//!
//! ### Where clauses
//!
//! [`WhereClause`] makes the accepted query shapes explicit: a free-form
//! predicate, an attribute/value pair (operator defaulted to `=`), or an
//! attribute/operator/value triple resolved against the fixed [`Operator`]
//! table.
//!
//! ## Quick Start
//!
//! ```rust
//! use trove_collection::{Collection, WhereClause};
//! use serde_json::{json, Value};
//!
//! let users: Collection<Value> = Collection::with_primary_key(
//!     vec![
//!         json!({"id": 1, "name": "Alice", "team": "red"}),
//!         json!({"id": 2, "name": "Bob", "team": "blue"}),
//!         json!({"id": 3, "name": "Carol", "team": "red"}),
//!     ],
//!     "id",
//! );
//!
//! // Identity lookups go through the primary key.
//! assert!(users.has(2));
//!
//! // Queries build new collections; `users` is never touched.
//! let reds = users.where_(WhereClause::attribute("team", "red")).unwrap();
//! assert_eq!(reds.count(), 2);
//!
//! // Projection, deduplication, pagination.
//! let names = users.pluck("name", Some("id"));
//! assert_eq!(names.primary_key(), Some("id"));
//!
//! let teams = users.unique(Some("team"));
//! assert_eq!(teams.count(), 2);
//!
//! let page = users.slice(0, 2).unwrap();
//! assert_eq!(page.count(), 2);
//! ```

pub mod collection;
pub mod error;
pub mod query;
pub mod record;
pub mod value;

// Re-export main types at crate root
pub use collection::Collection;
pub use error::{Error, Result};
pub use query::{Operator, WhereClause};
pub use record::{DeepClone, Record, ToArray};
pub use value::loose_eq;

/// Type alias for clarity
pub type FieldName = String;
