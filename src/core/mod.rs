pub mod browser;
pub mod classifier;
pub mod converter;
pub mod extractor;
pub mod page;
pub mod unshorten;

pub use crate::domain::model::{
    Coordinates, FailureReason, FetchedPage, Point, PointSource, Resolution,
};
pub use crate::domain::ports::{ConfigProvider, PageFetcher, PageNavigator, Unshortener};
pub use crate::utils::error::Result;
