pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::ConverterConfig;

pub use crate::core::{
    classifier::{classify, is_google_maps_url, UrlShape},
    converter::{convert_map_url_to_point, MapPointConverter},
    extractor::{extract_page_point, extract_point, extract_query_point},
    page::HttpPageFetcher,
    unshorten::HttpUnshortener,
};
pub use domain::model::{
    Coordinates, FailureReason, FetchedPage, Point, PointSource, Resolution,
};
pub use utils::error::{GmapsError, Result};
