use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;

/// A resolved latitude/longitude pair in degrees. No range checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Canonical Google Maps link that drops a pin on this point.
    pub fn maps_link(&self) -> String {
        format!("https://www.google.com/maps?q={}", self)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Output value: both fields set or both null.
///
/// Only constructible from `Option<Point>`, so a half-filled value cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl Coordinates {
    pub fn unresolved() -> Self {
        Self {
            latitude: None,
            longitude: None,
        }
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    pub fn point(&self) -> Option<Point> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Point::new(latitude, longitude)),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.point().is_some()
    }

    /// `{"latitude":..,"longitude":..}`, nulls when unresolved.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Option<Point>> for Coordinates {
    fn from(point: Option<Point>) -> Self {
        match point {
            Some(p) => Self {
                latitude: Some(p.latitude),
                longitude: Some(p.longitude),
            },
            None => Self::unresolved(),
        }
    }
}

impl From<Point> for Coordinates {
    fn from(point: Point) -> Self {
        Some(point).into()
    }
}

/// A GET response after redirects: where it ended and what it said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub final_url: String,
    pub body: String,
}

/// Which stage produced a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointSource {
    /// `@lat,lon` in the redirect-resolved URL.
    ResolvedUrl,
    /// `q=lat,lon` in the redirect-resolved URL.
    QueryParameter,
    /// `maps/preview/place/...@lat,lon` link in the fetched HTML.
    PageBody,
    /// `@lat,lon` in the URL the headless browser settled on.
    Browser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The browser ended on the URL it was given.
    BrowserUnchanged,
    /// The browser moved to a URL that still carries no coordinates.
    NoCoordinates { final_url: String },
    BrowserFailed { message: String },
    BrowserDisabled,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::BrowserUnchanged => write!(f, "browser did not leave the resolved URL"),
            FailureReason::NoCoordinates { final_url } => {
                write!(f, "no coordinates in browser URL {}", final_url)
            }
            FailureReason::BrowserFailed { message } => write!(f, "browser failed: {}", message),
            FailureReason::BrowserDisabled => write!(f, "browser fallback disabled"),
        }
    }
}

/// Outcome of running one URL through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
    Resolved {
        point: Point,
        resolved_url: String,
        source: PointSource,
    },
    NotMapsUrl,
    Unresolvable {
        resolved_url: String,
        reason: FailureReason,
    },
}

impl Resolution {
    pub fn point(&self) -> Option<Point> {
        match self {
            Resolution::Resolved { point, .. } => Some(*point),
            _ => None,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        self.point().into()
    }
}

impl From<&Resolution> for Coordinates {
    fn from(resolution: &Resolution) -> Self {
        resolution.coordinates()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_serializes_as_nulls() {
        let json = Coordinates::unresolved().to_json().unwrap();
        assert_eq!(json, r#"{"latitude":null,"longitude":null}"#);
    }

    #[test]
    fn test_resolved_serializes_both_fields() {
        let coords = Coordinates::from(Point::new(12.34, 56.78));
        let json = coords.to_json().unwrap();
        assert_eq!(json, r#"{"latitude":12.34,"longitude":56.78}"#);
        assert!(coords.is_resolved());
        assert_eq!(coords.point(), Some(Point::new(12.34, 56.78)));
    }

    #[test]
    fn test_maps_link_and_display() {
        let point = Point::new(-6.2, 106.816666);
        assert_eq!(point.to_string(), "-6.2,106.816666");
        assert_eq!(
            point.maps_link(),
            "https://www.google.com/maps?q=-6.2,106.816666"
        );
    }

    #[test]
    fn test_resolution_to_coordinates() {
        let resolved = Resolution::Resolved {
            point: Point::new(1.5, 2.5),
            resolved_url: "https://www.google.com/maps/place/x/@1.5,2.5,17z".to_string(),
            source: PointSource::ResolvedUrl,
        };
        assert_eq!(resolved.coordinates().latitude(), Some(1.5));
        assert_eq!(resolved.coordinates().longitude(), Some(2.5));

        let unresolvable = Resolution::Unresolvable {
            resolved_url: "https://www.google.com/maps/place/x".to_string(),
            reason: FailureReason::BrowserUnchanged,
        };
        assert_eq!(unresolvable.coordinates(), Coordinates::unresolved());
        assert_eq!(
            Coordinates::from(&Resolution::NotMapsUrl),
            Coordinates::unresolved()
        );
    }

    #[test]
    fn test_resolution_serialization_is_tagged() {
        let value = serde_json::to_value(Resolution::NotMapsUrl).unwrap();
        assert_eq!(value, serde_json::json!({"outcome": "not_maps_url"}));
    }
}
