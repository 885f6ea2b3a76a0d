use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("GPIO unavailable: {0}")]
    GpioUnavailable(String),

    #[error("GPIO error: {0}")]
    Gpio(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "rppal")]
impl From<rppal::gpio::Error> for RelayError {
    fn from(error: rppal::gpio::Error) -> Self {
        match error {
            rppal::gpio::Error::UnknownModel => {
                RelayError::GpioUnavailable("unknown Raspberry Pi model".to_string())
            }
            rppal::gpio::Error::PermissionDenied(path) => {
                RelayError::GpioUnavailable(format!("permission denied: {}", path))
            }
            other => RelayError::Gpio(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
