pub mod fares;
pub mod journey;
pub mod route;

pub use fares::{FareQuote, FareSchedule};
pub use journey::{
    InMemoryJourneyRepository, Journey, JourneyOption, JourneyRepository, JourneySearchRequest,
    JourneySearchResult,
};
pub use route::Route;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Journey not found: {0}")]
    JourneyNotFound(String),

    #[error("Invalid search criteria: {0}")]
    InvalidSearch(String),
}
