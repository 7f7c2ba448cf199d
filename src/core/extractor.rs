use crate::domain::model::Point;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static AT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+)").expect("@lat,lon pattern is valid")
});

static QUERY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[?&]q=(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+)").expect("q=lat,lon pattern is valid")
});

static PAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https://www\.google\.com/maps/preview/place/.*?@(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+)")
        .expect("preview/place pattern is valid")
});

fn point_from(caps: Captures<'_>) -> Option<Point> {
    let latitude = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let longitude = caps.get(2)?.as_str().parse::<f64>().ok()?;
    Some(Point::new(latitude, longitude))
}

/// Pulls the first `@lat,lon` pair out of a URL.
pub fn extract_point(url: &str) -> Option<Point> {
    let point = AT_PATTERN.captures(url).and_then(point_from);
    if point.is_none() {
        tracing::debug!("No @lat,lon pair in URL: {}", url);
    }
    point
}

/// Pulls a `q=lat,lon` query parameter out of a URL.
pub fn extract_query_point(url: &str) -> Option<Point> {
    QUERY_PATTERN.captures(url).and_then(point_from)
}

/// Scans an HTML page for the first `maps/preview/place/...@lat,lon` link.
/// The link must sit on a single line.
pub fn extract_page_point(body: &str) -> Option<Point> {
    PAGE_PATTERN.captures(body).and_then(point_from)
}
