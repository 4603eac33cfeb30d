use poi_compass_core::navigation::ConfigurationError;
use poi_compass_core::parameters::ParameterError;

/// Errors that can occur while setting up the simulated compass.
///
/// Only setup can fail. Once the loop is running every tick is independent
/// and infallible.
#[derive(Debug, thiserror::Error)]
pub enum SitlError {
    #[error("Configuration error: {0}")]
    Configuration(ConfigurationError),

    #[error("Parameter error: {0}")]
    Parameter(ParameterError),

    #[error("Invalid target '{0}', expected NAME,LAT,LON")]
    InvalidTarget(String),

    #[error("Invalid coordinate '{0}', expected LAT,LON in decimal degrees")]
    InvalidCoordinate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigurationError> for SitlError {
    fn from(err: ConfigurationError) -> Self {
        SitlError::Configuration(err)
    }
}

impl From<ParameterError> for SitlError {
    fn from(err: ParameterError) -> Self {
        SitlError::Parameter(err)
    }
}
