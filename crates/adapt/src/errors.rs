use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdaptError {
    #[error("Please configure your Gemini API key (set GEMINI_API_KEY or run `adapt configure`)")]
    MissingApiKey,

    #[error("Nothing to send: the input is empty")]
    EmptyInput,

    #[error("The model returned an empty response")]
    EmptyResponse,

    #[error("Failed to get a response from the model: {0}")]
    Provider(String),

    #[error("Failed to render prompt: {0}")]
    Prompt(String),
}

pub type AdaptResult<T> = Result<T, AdaptError>;
