/// Runtime configuration shared with request handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Secret used to sign session tokens.
    pub secret: String,
}
