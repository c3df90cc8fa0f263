//! # excerpt-core
//!
//! Shared utilities for the excerpt crates.
//!
//! - **Constants**: default budget and continuation marker
//! - **Text**: [`text::char_len`] and [`text::prefix_chars`] for character-based
//!   measuring and cutting that never splits a multi-byte character
//! - **Encoding**: [`encoding::EncodingMode`] and [`encoding::normalize`] for the
//!   optional ASCII transliteration pass applied before parsing
//! - **Logging**: [`logging::init_subscriber`] for the `tracing` subscriber
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other excerpt crates.

#![deny(unsafe_code)]

pub mod constants;
pub mod encoding;
pub mod logging;
pub mod text;
