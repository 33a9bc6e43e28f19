// One error type for the whole painter.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String), // Out-of-bounds rectangle, kernel index or size mismatch
    #[error("Allocation failure: {0}")]
    AllocationFailure(String), // Backing store could not be reserved at startup
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
    #[error("Export error: {0}")]
    Export(String), // Writing the PNG failed
}

pub type Result<T> = std::result::Result<T, Error>;
