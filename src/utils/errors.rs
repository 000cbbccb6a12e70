use thiserror::Error;

/// Failures while requesting the next page of battles from the stats backend.
#[derive(Debug, Error)]
pub enum BattleFetchError {
    #[error("HTTP error! Status: {0}")]
    HttpStatus(u16),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected response body: {0}")]
    InvalidBody(String),
}

/// Failures while turning a battle record into an HTML fragment.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Malformed deck string `{0}`")]
    DeckParse(String),

    #[error("Unparseable battle time `{0}`")]
    InvalidTimestamp(String),

    #[error("Tower HP is not numeric: `{0}`")]
    InvalidTowerHp(String),
}

/// Either half of the load-more flow can abort a page append.
#[derive(Debug, Error)]
pub enum LoadMoreError {
    #[error(transparent)]
    Fetch(#[from] BattleFetchError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
