//! Request value objects passed in by the presentation layer.
//!
//! Requests carry raw user input. Validation trims it, parses numbers and rejects
//! empty locations, so that only well-formed data ever reaches the graph.

use std::str::FromStr;

use crate::errors::InputError;
use crate::road::{Road, RoadEntry};

/// Raw road insertion request, one string per form field.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct RoadRequest {
    pub from: String,
    pub to: String,
    pub distance: String,
    pub time: String,
    pub risk: String,
}

impl RoadRequest {
    pub fn new(from: &str, to: &str, distance: &str, time: &str, risk: &str) -> Self {
        RoadRequest {
            from: from.to_string(),
            to: to.to_string(),
            distance: distance.to_string(),
            time: time.to_string(),
            risk: risk.to_string(),
        }
    }

    /// Validate the request into a road entry.
    ///
    /// Numbers are checked before locations, so a request that is wrong in both ways
    /// reports the invalid number.
    pub fn validate(&self) -> Result<RoadEntry, InputError> {
        let distance = parse_number("distance", &self.distance)?;
        let time = parse_number("time", &self.time)?;
        let risk = parse_number("risk", &self.risk)?;

        let from = self.from.trim();
        let to = self.to.trim();
        if from.is_empty() || to.is_empty() {
            return Err(InputError::MissingLocation);
        }

        Ok(RoadEntry {
            from: from.to_string(),
            to: to.to_string(),
            road: Road::new(distance, time, risk),
        })
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, InputError> {
    value.trim().parse::<f64>().map_err(|_| InputError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Parses `FROM,TO,DISTANCE,TIME,RISK`. Fields are kept raw, use `validate()` to check them.
impl FromStr for RoadRequest {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s.split(',').collect::<Vec<_>>();
        if let [from, to, distance, time, risk] = fields.as_slice() {
            Ok(RoadRequest::new(from, to, distance, time, risk))
        } else {
            Err(InputError::FieldCount(fields.len()))
        }
    }
}

/// Raw route query.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct RouteRequest {
    pub start: String,
    pub end: String,
}

impl RouteRequest {
    pub fn new(start: &str, end: &str) -> Self {
        RouteRequest {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Trimmed start and end labels.
    pub fn labels(&self) -> (&str, &str) {
        (self.start.trim(), self.end.trim())
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::InputError;
    use crate::road::Road;

    use super::{RoadRequest, RouteRequest};

    #[test]
    fn test_validate_trims_everything() {
        let entry = RoadRequest::new("  Depot ", "\tClinic", " 10 ", "10\n", " 1").validate().expect("valid request");
        assert_eq!(entry.from, "Depot");
        assert_eq!(entry.to, "Clinic");
        assert_eq!(entry.road, Road::new(10.0, 10.0, 1.0));
        assert_eq!(entry.road.weight(), 20.0);
    }

    #[test]
    fn test_validate_accepts_float_syntax() {
        let entry = RoadRequest::new("A", "B", "1.5", "1e1", "-2").validate().expect("valid request");
        assert_eq!(entry.road, Road::new(1.5, 10.0, -2.0));
    }

    #[test]
    fn test_validate_invalid_number() {
        let err = |d: &str, t: &str, r: &str| RoadRequest::new("A", "B", d, t, r).validate().unwrap_err();
        assert_eq!(err("ten", "1", "1"), InputError::InvalidNumber { field: "distance", value: "ten".to_string() });
        assert_eq!(err("1", "", "1"), InputError::InvalidNumber { field: "time", value: "".to_string() });
        assert_eq!(err("1", "1", "1,5"), InputError::InvalidNumber { field: "risk", value: "1,5".to_string() });
        assert_eq!(err("x", "y", "z"), InputError::InvalidNumber { field: "distance", value: "x".to_string() });
    }

    #[test]
    fn test_validate_missing_location() {
        assert_eq!(RoadRequest::new("", "B", "1", "1", "1").validate(), Err(InputError::MissingLocation));
        assert_eq!(RoadRequest::new("A", "   ", "1", "1", "1").validate(), Err(InputError::MissingLocation));
    }

    #[test]
    fn test_invalid_number_reported_before_missing_location() {
        let res = RoadRequest::new("", "", "abc", "1", "1").validate();
        assert_eq!(res, Err(InputError::InvalidNumber { field: "distance", value: "abc".to_string() }));
    }

    #[test]
    fn test_risk_range_not_enforced() {
        let entry = RoadRequest::new("A", "B", "1", "1", "42").validate().expect("valid request");
        assert_eq!(entry.road.risk, 42.0);
    }

    #[test]
    fn test_parse_road_request() {
        let req: RoadRequest = "A, B,10,10,1".parse().expect("five fields");
        assert_eq!(req, RoadRequest::new("A", " B", "10", "10", "1"));
        assert_eq!(req.validate().expect("valid").to.as_str(), "B");

        assert_eq!("A,B,10,10".parse::<RoadRequest>(), Err(InputError::FieldCount(4)));
        assert_eq!("A,B,10,10,1,1".parse::<RoadRequest>(), Err(InputError::FieldCount(6)));
        assert_eq!("".parse::<RoadRequest>(), Err(InputError::FieldCount(1)));
    }

    #[test]
    fn test_route_request_labels() {
        assert_eq!(RouteRequest::new(" A ", "B\n").labels(), ("A", "B"));
        assert_eq!(RouteRequest::default().labels(), ("", ""));
    }
}
