use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_PORT: u16 = 8080;

/// Keyed-hash algorithm used for password digests and session tokens.
///
/// Selected by name through the `HASHING_ALGORITHM` environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Parses an algorithm from its configured name.
    ///
    /// # Arguments
    /// - `name` - Algorithm name, case-insensitive (`sha256` or `sha512`)
    ///
    /// # Returns
    /// - `Ok(HashAlgorithm)` - Recognized algorithm
    /// - `Err(ConfigError::UnsupportedHashAlgorithm)` - Unknown algorithm name
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            _ => Err(ConfigError::UnsupportedHashAlgorithm(name.to_string())),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub hashing_algorithm: HashAlgorithm,
    pub secret_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let server_port = match std::env::var("SERVER_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| {
                ConfigError::InvalidEnvVar {
                    name: "SERVER_PORT".to_string(),
                    value,
                }
            })?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        let hashing_algorithm = match std::env::var("HASHING_ALGORITHM") {
            Ok(name) => HashAlgorithm::from_name(&name)?,
            Err(_) => HashAlgorithm::Sha256,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_port,
            hashing_algorithm,
            secret_key: std::env::var("SECRET_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("SECRET_KEY".to_string()))?,
        })
    }
}
