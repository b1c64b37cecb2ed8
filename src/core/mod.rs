//! Core components of the `marketdash` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`MdClient`] and its builder.
//! - The primary [`MdError`] type.
//! - Shared enums like [`Signal`], [`AssetClass`] and [`SentimentLabel`].
//! - Internal networking helpers and diagnostic logging.

/// The main client (`MdClient`), builder, and configuration.
pub mod client;
/// The primary error type (`MdError`) for the crate.
pub mod error;
/// Shared data models used across multiple modules.
pub mod models;

pub(crate) mod log;
pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::MdClient`
pub use client::{MdClient, MdClientBuilder};
pub use error::{GENERIC_FETCH_MESSAGE, MdError};
pub use models::{AssetClass, SentimentLabel, Signal};
