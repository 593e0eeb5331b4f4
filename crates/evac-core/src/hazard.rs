//! Hazard-zone model: zone identity, severity, and immutable datasets.
//!
//! A `HazardZone` is a circular geofenced area of elevated risk.  Zones are
//! produced by the periodic feed refresh and are immutable once part of a
//! published [`HazardDataset`]; each refresh replaces the working set
//! atomically (no incremental merge, no diffing).

use std::fmt;

use crate::GeoPoint;

// ── ZoneId ────────────────────────────────────────────────────────────────────

/// Index of a hazard zone within its snapshot.
///
/// Ids are assigned positionally at ingestion time and are only meaningful
/// relative to one `HazardDataset` — the feed carries no cross-refresh
/// identity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ZoneId(pub u32);

impl ZoneId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZoneId({})", self.0)
    }
}

// ── Severity ──────────────────────────────────────────────────────────────────

/// Hazard severity band.
///
/// The feed encodes severity as a display color string; this enum is the
/// closed form used for logic, with the color retained only as a rendering
/// hint for the map layer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Severity {
    #[default]
    Low,
    Moderate,
    High,
    Severe,
}

impl Severity {
    /// Map the feed's color string to a severity band.
    ///
    /// Unknown colors (including the empty string the feed emits for its
    /// lowest band) fall through to `Low`.
    pub fn from_color(color: &str) -> Self {
        match color {
            "red"    => Severity::Severe,
            "orange" => Severity::High,
            "yellow" => Severity::Moderate,
            _        => Severity::Low,
        }
    }

    /// Canonical display color for the map layer.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Severe   => "red",
            Severity::High     => "orange",
            Severity::Moderate => "yellow",
            Severity::Low      => "green",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low      => "low",
            Severity::Moderate => "moderate",
            Severity::High     => "high",
            Severity::Severe   => "severe",
        };
        f.write_str(s)
    }
}

// ── HazardZone ────────────────────────────────────────────────────────────────

/// A circular geofenced area of elevated disaster risk.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HazardZone {
    /// Position within the owning snapshot.
    pub id: ZoneId,

    /// Center of the circular zone.
    pub center: GeoPoint,

    /// Zone radius in kilometres.  Always `> 0` for zones built through
    /// [`HazardDataset::from_feed`].
    pub radius_km: f64,

    /// Severity band derived from the feed's color encoding.
    pub severity: Severity,

    /// Number of reports aggregated into this zone.
    pub report_count: u32,
}

impl HazardZone {
    /// `true` when `point` lies inside the zone.
    ///
    /// The boundary is inclusive: a point at distance exactly `radius_km`
    /// is inside, and therefore not safe.
    #[inline]
    pub fn contains(&self, point: GeoPoint) -> bool {
        self.center.distance_km(point) <= self.radius_km
    }
}

// ── HazardDataset ─────────────────────────────────────────────────────────────

/// An immutable snapshot of all currently known hazard zones.
///
/// A new evacuation plan locks onto one snapshot (via `Arc`) for its whole
/// lifetime, even if the dataset store refreshes concurrently.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HazardDataset {
    /// Monotonically increasing snapshot number assigned by the store.
    pub snapshot_id: u64,

    /// Unix timestamp (seconds) at which the feed response was captured.
    pub captured_unix_secs: i64,

    /// All zones in this snapshot, indexed by `ZoneId`.
    pub zones: Vec<HazardZone>,
}

impl HazardDataset {
    /// An empty snapshot, used as the store's initial state.
    pub fn empty(snapshot_id: u64) -> Self {
        Self { snapshot_id, captured_unix_secs: 0, zones: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Look up a zone by id.
    pub fn zone(&self, id: ZoneId) -> Option<&HazardZone> {
        self.zones.get(id.index())
    }
}
