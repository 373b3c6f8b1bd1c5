use std::path::PathBuf;

/// Load `.env` from the working directory (or a parent), if there is one.
///
/// Values already present in the environment win over the file. A missing
/// file is not an error. Called before logging is set up, so the caller
/// reports the outcome.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenv::Error> {
    match dotenv::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
