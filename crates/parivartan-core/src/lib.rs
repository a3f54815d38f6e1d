//! Domain core for the Yuva Parivartan impact dashboard.
//!
//! Holds the data model, the persisted snapshot, the record and master-data
//! store mutations, and the pure aggregation/filter/wizard logic. The crate
//! performs no IO of its own; the desktop runtime owns persistence and every
//! external call.

pub mod domain;
pub mod error;
pub mod export;
pub mod filter;
pub mod recruitment;
pub mod seed;
pub mod snapshot;
pub mod stats;
pub mod store;
pub mod util;
pub mod wizard;
