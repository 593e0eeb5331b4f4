//! `evac-core` — foundational types for the evacuation-routing engine.
//!
//! This crate is a dependency of every other `evac-*` crate.  It intentionally
//! has no `evac-*` dependencies and a small external surface (`thiserror`,
//! `serde`/`serde_json` for the hazard feed, `parking_lot` for the dataset
//! store).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`geo`]    | `GeoPoint`, haversine distance, coordinate validation     |
//! | [`hazard`] | `ZoneId`, `Severity`, `HazardZone`, `HazardDataset`       |
//! | [`feed`]   | Wire types for the periodic hazard feed + ingestion       |
//! | [`store`]  | `DatasetStore` — atomic snapshot replacement, staleness   |
//! | [`error`]  | `CoreError`, `CoreResult`                                 |

pub mod error;
pub mod feed;
pub mod geo;
pub mod hazard;
pub mod store;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use feed::{FeedEntry, FeedLocation, parse_feed};
pub use geo::GeoPoint;
pub use hazard::{HazardDataset, HazardZone, Severity, ZoneId};
pub use store::{DatasetStore, FeedHealth, Snapshot};
