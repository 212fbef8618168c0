//! Trained system preamble: persistence, building and retrieval

mod builder;
mod store;

pub use builder::PreambleBuilder;
pub use store::PreambleStore;

use crate::error::AppError;

/// Rebuilds allowed per retrieval before giving up
const MAX_REBUILDS: u32 = 1;

/// Return the persisted preamble, training it first if it is missing.
///
/// At most one rebuild is attempted; if the file is still absent afterwards
/// the store is not persisting and the call fails.
pub async fn get_preamble(
    store: &PreambleStore,
    builder: &PreambleBuilder,
) -> Result<String, AppError> {
    let mut rebuilds = 0;
    loop {
        if let Some(text) = store.read().await? {
            return Ok(text);
        }
        if rebuilds == MAX_REBUILDS {
            return Err(AppError::PreambleUnavailable(store.path().to_path_buf()));
        }

        tracing::info!(path = %store.path().display(), "No trained system message, training now");
        builder.build().await?;
        rebuilds += 1;
    }
}
