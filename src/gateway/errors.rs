use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced a response body. Displays as the bare
    /// underlying message, which is what the result screen shows verbatim.
    #[error("{message}")]
    Transport {
        message: String
    },
    /// The processor answered, but not with a body this client understands.
    #[error("Unreadable response from processor: {message}")]
    Decode {
        message: String
    }
}

impl GatewayError {
    pub fn transport(error: &reqwest::Error) -> Self {
        Self::Transport { message: error.to_string() }
    }

    pub fn decode(error: &reqwest::Error) -> Self {
        Self::Decode { message: error.to_string() }
    }
}
