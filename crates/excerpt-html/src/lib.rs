//! # excerpt-html
//!
//! Structure-preserving HTML truncation.
//!
//! Cuts a markup fragment down to an approximate visible-text budget, appends
//! a continuation marker at the cut point, and removes everything that would
//! render after it. Only whole subtrees are ever removed, so the result is
//! always well-formed.
//!
//! ## Module Overview
//!
//! - [`tree`] — [`DomTree`], the navigation and editing capabilities the
//!   truncation needs, implemented for `scraper`'s tree
//! - [`walker`] — [`DepthFirstWalker`], iterative pre-order traversal over
//!   parent/sibling links
//! - [`policy`] — [`TruncationPolicy`], the text-length budget and the cut
//! - [`prune`] — [`PruneCollector`], deferred removal of nodes after the cut
//! - [`truncate`](mod@truncate) — [`truncate()`] and [`truncate_with`], the entry points
//!
//! ## Usage
//!
//! ```
//! use excerpt_html::truncate;
//!
//! assert_eq!(truncate("<p>Hello world</p>", 5, "..."), "<p>Hello wo...</p>");
//! ```
//!
//! ## Crate Position
//!
//! Depends on excerpt-core. Depended on by excerpt-cli.

#![deny(unsafe_code)]

pub mod policy;
pub mod prune;
pub mod tree;
pub mod truncate;
pub mod walker;

pub use policy::TruncationPolicy;
pub use prune::PruneCollector;
pub use tree::DomTree;
pub use truncate::{
    DEFAULT_CONTINUATION_MARKER, DEFAULT_MAX_LENGTH, TruncateOptions, Truncation, truncate,
    truncate_with,
};
pub use walker::{DepthFirstWalker, walk};
