use sp_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Failed to load cache partitions: {source} {location}")]
    Load {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl From<DbError> for CacheError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Load {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CacheError>;
