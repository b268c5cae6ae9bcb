//! Dataset loading at startup.
//!
//! The dataset is read once: from `ENGAGE_DATASET_PATH` when set, otherwise
//! from the copy compiled into `example-data`. Generated residents are then
//! appended and the seeds are converted into domain entities.

use camino::Utf8PathBuf;
use example_data::{Dataset, DatasetError, GenerationError};
use thiserror::Error;
use tracing::info;

use crate::outbound::example_dataset::{DatasetConversionError, ExampleDatasetRepository};
use crate::settings::ServerSettings;

/// Errors returned while preparing the community dataset.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The dataset path is not valid UTF-8.
    #[error("dataset path is not valid UTF-8: {path}")]
    NonUtf8Path {
        /// Lossy rendering of the rejected path.
        path: String,
    },
    /// Reading or validating the dataset failed.
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
    /// Resident generation failed.
    #[error("resident generation error: {0}")]
    Generation(#[from] GenerationError),
    /// Seeds could not be converted into domain entities.
    #[error("dataset conversion error: {0}")]
    Conversion(#[from] DatasetConversionError),
}

/// Build the repository served by the HTTP adapter.
///
/// # Examples
///
/// ```
/// use engage_local::example_data::load_community_repository;
/// use engage_local::settings::ServerSettings;
///
/// let settings = ServerSettings {
///     example_residents: 2,
///     ..ServerSettings::default()
/// };
/// let repository = load_community_repository(&settings).expect("dataset loads");
/// assert!(repository.user_count() >= 2);
/// ```
///
/// # Errors
///
/// Returns [`StartupError`] when the dataset cannot be read, validated,
/// extended, or converted.
pub fn load_community_repository(
    settings: &ServerSettings,
) -> Result<ExampleDatasetRepository, StartupError> {
    let dataset = match &settings.dataset_path {
        Some(path) => {
            let utf8 = Utf8PathBuf::from_path_buf(path.clone()).map_err(|rejected| {
                StartupError::NonUtf8Path {
                    path: rejected.to_string_lossy().into_owned(),
                }
            })?;
            info!(path = %utf8, "loading dataset from file");
            Dataset::from_file(&utf8)?
        }
        None => {
            info!("loading built-in dataset");
            Dataset::builtin()?
        }
    };

    let dataset = match settings.example_residents {
        0 => dataset,
        count => {
            let seed = settings.example_seed();
            info!(count, seed, "appending generated residents");
            dataset.with_generated_residents(seed, count)?
        }
    };

    let repository = ExampleDatasetRepository::from_dataset(&dataset)?;
    info!(
        users = repository.user_count(),
        projects = dataset.projects().len(),
        challenges = dataset.challenges().len(),
        "community dataset ready"
    );
    Ok(repository)
}
