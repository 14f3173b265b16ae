use std::path::PathBuf;

/// Where the service account key comes from. Fixed once at configuration
/// time; nothing reads the environment after that.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// A local key file (dev mode).
    KeyFile(PathBuf),
    /// A raw JSON blob taken from an environment variable (prod mode).
    KeyJson(String),
}
