use common::{ProtocolError, TabId};
use job_scraper::ScrapeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("no tab with id {0}")]
    NoSuchTab(TabId),

    #[error("tab {0} has no content script")]
    NoListener(TabId),

    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

pub type Result<T> = std::result::Result<T, CoordinatorError>;
