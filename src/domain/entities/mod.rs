//! Core domain entities.
//!
//! Entities are plain data structures. Stored variants (`StoredLink`,
//! `StoredLinkStats`) mirror the table row with timestamps still in text
//! form; decoded variants (`Link`, `LinkStats`) are what the service hands
//! out.
//!
//! - [`Link`] / [`LinkStats`] - Decoded link data
//! - [`StoredLink`] / [`StoredLinkStats`] - Raw rows returned by the store
//! - [`NewLink`] / [`LinkUpdate`] - Inputs for insert and update

pub mod link;

pub use link::{Link, LinkStats, LinkUpdate, NewLink, StoredLink, StoredLinkStats};
