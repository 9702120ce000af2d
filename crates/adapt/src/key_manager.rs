use keyring::Entry;
use std::env;
use thiserror::Error;
use tracing::debug;
#[cfg(test)]
use mockall::automock;

const KEYRING_SERVICE: &str = "adapt";

/// Name the Gemini key is stored under, in the keyring and in the environment.
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

#[derive(Error, Debug)]
pub enum KeyManagerError {
    #[error("Failed to access keyring: {0}")]
    KeyringAccess(String),

    #[error("Failed to save to keyring: {0}")]
    KeyringSave(String),

    #[error("Failed to access environment variable: {0}")]
    EnvVarAccess(String),

    #[error("Could not find {0} in keyring or environment variables")]
    NotFound(String),
}

impl From<keyring::Error> for KeyManagerError {
    fn from(err: keyring::Error) -> Self {
        KeyManagerError::KeyringAccess(err.to_string())
    }
}

impl From<env::VarError> for KeyManagerError {
    fn from(err: env::VarError) -> Self {
        KeyManagerError::EnvVarAccess(err.to_string())
    }
}

#[cfg_attr(test, automock)]
pub trait Keyring: Send + Sync {
    fn get_password(&self) -> Result<String, KeyManagerError>;
    fn set_password(&self, password: &str) -> Result<(), KeyManagerError>;
}

#[cfg_attr(test, automock)]
pub trait Environment: Send + Sync {
    fn get_var(&self, key: &str) -> Result<String, env::VarError>;
}

pub struct RealEnvironment;

impl Environment for RealEnvironment {
    fn get_var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

impl Keyring for Entry {
    fn get_password(&self) -> Result<String, KeyManagerError> {
        Entry::get_password(self).map_err(KeyManagerError::from)
    }

    fn set_password(&self, password: &str) -> Result<(), KeyManagerError> {
        Entry::set_password(self, password).map_err(KeyManagerError::from)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub enum KeyRetrievalStrategy {
    /// Only look in environment variables
    EnvironmentOnly,
    /// Only look in system keyring
    KeyringOnly,
    /// Try keyring first, then environment variables
    #[default]
    Both,
}

pub fn get_api_key_default(
    api_key_name: &str,
    strategy: KeyRetrievalStrategy,
) -> Result<String, KeyManagerError> {
    let kr = Entry::new(KEYRING_SERVICE, api_key_name)?;
    get_api_key(api_key_name, strategy, &kr, &RealEnvironment)
}

pub fn get_api_key(
    api_key_name: &str,
    strategy: KeyRetrievalStrategy,
    keyring: &impl Keyring,
    env: &impl Environment,
) -> Result<String, KeyManagerError> {
    match strategy {
        KeyRetrievalStrategy::EnvironmentOnly => env
            .get_var(api_key_name)
            .map_err(|_| KeyManagerError::NotFound(api_key_name.to_string())),
        KeyRetrievalStrategy::KeyringOnly => keyring.get_password(),
        KeyRetrievalStrategy::Both => match keyring.get_password() {
            Ok(key) => Ok(key),
            Err(e) => {
                debug!("Could not retrieve {} from keyring: {}", api_key_name, e);
                env.get_var(api_key_name)
                    .map_err(|_| KeyManagerError::NotFound(api_key_name.to_string()))
            }
        },
    }
}

pub fn save_to_keyring_default(key_name: &str, api_key: &str) -> Result<(), KeyManagerError> {
    let kr = Entry::new(KEYRING_SERVICE, key_name)?;
    save_to_keyring(key_name, api_key, &kr)
}

pub fn save_to_keyring(
    key_name: &str,
    api_key: &str,
    keyring: &impl Keyring,
) -> Result<(), KeyManagerError> {
    keyring
        .set_password(api_key)
        .map_err(|e| KeyManagerError::KeyringSave(format!("Failed to save key {}: {}", key_name, e)))
}
