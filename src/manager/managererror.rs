use std::fmt::Display;

use serde::Deserialize;

use crate::function::functionerror::FunctionError;

#[derive(Debug)]
pub enum ManagerError {
    FunctionError(FunctionError),
    IOError(std::io::Error),
    JsonParseError(serde_json::Error),
    NameNotFoundError(String)
}

impl ManagerError {
    pub fn from_json_or_json_parse_error<T>(json_value: serde_json::Value) -> Result<T, Self>
        where T: for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }
}

impl Display for ManagerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManagerError::FunctionError(error) => write!(f, "{}", error),
            ManagerError::IOError(error) => write!(f, "{}", error),
            ManagerError::JsonParseError(error) => write!(f, "{}", error),
            ManagerError::NameNotFoundError(name) => write!(f, "key '{}' not found", name)
        }
    }
}

impl std::error::Error for ManagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManagerError::FunctionError(error) => Some(error),
            ManagerError::IOError(error) => Some(error),
            ManagerError::JsonParseError(error) => Some(error),
            ManagerError::NameNotFoundError(_) => None
        }
    }
}

impl From<FunctionError> for ManagerError {
    fn from(error: FunctionError) -> Self {
        ManagerError::FunctionError(error)
    }
}
