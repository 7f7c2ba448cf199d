use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Google Maps URL shapes the pipeline is willing to work on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlShape {
    /// `maps.google.com/?q=...` or `maps.google.com/maps?...`
    StandardQuery,
    /// `google.com/maps/place/...`
    Place,
    /// `maps.googleapis.com/maps/api/staticmap?...`
    StaticMap,
    /// `maps.app.goo.gl/<token>`
    Shortened,
    /// `google.com/maps/(preview/)?q=lat,lon(@lat,lon)(,Nz)`
    PreviewQuery,
    /// `google.com/maps/preview/@lat,lon,Nz`
    PreviewAt,
}

static SHAPES: Lazy<Vec<(UrlShape, Regex)>> = Lazy::new(|| {
    [
        (
            UrlShape::StandardQuery,
            r"^(http|https)://(www\.)?maps\.google\.com/(\?q=|maps\?)(.*)$",
        ),
        (
            UrlShape::Place,
            r"^(http|https)://(www\.)?google\.com/maps/place/(.*)$",
        ),
        (
            UrlShape::StaticMap,
            r"^(http|https)://(www\.)?maps\.googleapis\.com/maps/api/staticmap\?(.*)$",
        ),
        (
            UrlShape::Shortened,
            r"^https://maps\.app\.goo\.gl/[A-Za-z0-9_]+(\?.*)?$",
        ),
        (
            UrlShape::PreviewQuery,
            r"^(http|https)://(www\.)?google\.com/maps/(preview/)?\?q=[0-9.\-]+,[0-9.\-]+(@[0-9.\-]+,[0-9.\-]+)?(,[0-9]+z)?$",
        ),
        (
            UrlShape::PreviewAt,
            r"^(http|https)://(www\.)?google\.com/maps/preview/@[0-9.\-]+,[0-9.\-]+,[0-9]+z$",
        ),
    ]
    .into_iter()
    .map(|(shape, pattern)| {
        let regex = Regex::new(pattern).expect("URL shape patterns are valid");
        (shape, regex)
    })
    .collect()
});

/// Returns the first shape the input matches, if any. No network access.
pub fn classify(url: &str) -> Option<UrlShape> {
    SHAPES
        .iter()
        .find(|(_, regex)| regex.is_match(url))
        .map(|(shape, _)| *shape)
}

pub fn is_google_maps_url(url: &str) -> bool {
    classify(url).is_some()
}
