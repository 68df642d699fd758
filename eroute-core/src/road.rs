//! Road measurements and the composite weight model.

use std::fmt;

use serde::Serialize;

/// Cost coefficient applied to the road distance (km).
pub const DISTANCE_WEIGHT: f64 = 1.0;

/// Cost coefficient applied to the traversal time (minutes).
pub const TIME_WEIGHT: f64 = 0.5;

/// Cost coefficient applied to the risk score.
pub const RISK_WEIGHT: f64 = 5.0;

/// Conventional risk scale. Values outside of it are accepted as is.
pub const RISK_RANGE: (f64, f64) = (1.0, 5.0);

/// Raw measurements of a single road together with its composite weight.
///
/// The weight is computed once, on construction, and never recomputed.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct Road {
    /// Distance in kilometers.
    pub distance: f64,

    /// Traversal time in minutes.
    pub time: f64,

    /// Risk score, `1..=5` by convention.
    pub risk: f64,

    weight: f64,
}

impl Road {
    pub fn new(distance: f64, time: f64, risk: f64) -> Self {
        Road {
            distance,
            time,
            risk,
            weight: composite_weight(distance, time, risk),
        }
    }

    /// Composite cost of traversing this road.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn risk_in_range(&self) -> bool {
        let (lo, hi) = RISK_RANGE;
        self.risk >= lo && self.risk <= hi
    }
}

/// Weighted sum of the three road criteria.
pub fn composite_weight(distance: f64, time: f64, risk: f64) -> f64 {
    DISTANCE_WEIGHT * distance + TIME_WEIGHT * time + RISK_WEIGHT * risk
}

/// A road as it was inserted into the graph, endpoints included.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct RoadEntry {
    pub from: String,
    pub to: String,
    #[serde(flatten)]
    pub road: Road,
}

impl fmt::Display for RoadEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // `{:?}` keeps the trailing `.0` on whole numbers, e.g. `D:10.0`
        write!(
            f,
            "{} ↔ {} | Cost: {:.2} (D:{:?}, T:{:?}, R:{:?})",
            self.from,
            self.to,
            self.road.weight(),
            self.road.distance,
            self.road.time,
            self.road.risk
        )
    }
}

#[test]
fn test_composite_weight() {
    assert_eq!(Road::new(10.0, 10.0, 1.0).weight(), 20.0);
    assert_eq!(Road::new(5.0, 0.0, 1.0).weight(), 10.0);
    assert_eq!(Road::new(50.0, 0.0, 0.0).weight(), 50.0);
    assert_eq!(Road::new(0.0, 0.0, 0.0).weight(), 0.0);
    assert_eq!(Road::new(1.5, 3.0, 2.0).weight(), 1.5 + 1.5 + 10.0);
}

#[test]
fn test_risk_range_is_advisory() {
    assert!(Road::new(1.0, 1.0, 1.0).risk_in_range());
    assert!(Road::new(1.0, 1.0, 5.0).risk_in_range());
    assert!(!Road::new(1.0, 1.0, 0.0).risk_in_range());
    assert!(!Road::new(1.0, 1.0, 7.5).risk_in_range());

    // Out of range risk still produces a weight
    assert_eq!(Road::new(0.0, 0.0, -2.0).weight(), -10.0);
}

#[test]
fn test_road_entry_display() {
    let entry = RoadEntry {
        from: "A".to_string(),
        to: "B".to_string(),
        road: Road::new(10.0, 10.0, 1.0),
    };
    assert_eq!(entry.to_string(), "A ↔ B | Cost: 20.00 (D:10.0, T:10.0, R:1.0)");

    let entry = RoadEntry {
        from: "Depot".to_string(),
        to: "Clinic".to_string(),
        road: Road::new(2.25, 7.5, 3.0),
    };
    assert_eq!(entry.to_string(), "Depot ↔ Clinic | Cost: 21.00 (D:2.25, T:7.5, R:3.0)");
}
