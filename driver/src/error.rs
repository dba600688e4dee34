use std::num::ParseIntError;

use error_stack::Report;
use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Redis(redis::RedisError),
    #[error(transparent)]
    Env(dotenvy::Error),
    #[error(transparent)]
    Serde(serde_json::Error),
    #[error(transparent)]
    Conversion(ParseIntError),
}

impl From<redis::RedisError> for DriverError {
    fn from(value: redis::RedisError) -> Self {
        Self::Redis(value)
    }
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

impl From<ParseIntError> for DriverError {
    fn from(value: ParseIntError) -> Self {
        Self::Conversion(value)
    }
}

impl DriverError {
    fn kernel_context(&self) -> KernelError {
        match self {
            DriverError::Redis(_) => KernelError::Store,
            DriverError::Serde(_) => KernelError::Serialization,
            DriverError::Env(_) | DriverError::Conversion(_) => KernelError::Internal,
        }
    }
}

pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T, E> ConvertError for Result<T, E>
where
    E: Into<DriverError>,
{
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let error = error.into();
            let context = error.kernel_context();
            Report::new(error).change_context(context)
        })
    }
}
