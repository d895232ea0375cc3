use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No route found between the requested points")]
    NoRouteFound,
    #[error("Routing backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
