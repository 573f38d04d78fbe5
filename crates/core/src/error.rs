use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::ChallengeError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Challenge(#[from] ChallengeError),
}
