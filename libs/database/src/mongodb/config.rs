use core_config::{ConfigError, FromEnv, env_or_default};

/// Fallback connection string when `MONGODB_URI` is not set: a local
/// instance with the service database selected in the URI path.
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/sistema-mudancas";

/// Database used when the connection string carries no path segment
pub const DEFAULT_DATABASE: &str = "sistema-mudancas";

/// MongoDB configuration
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub uri: String,
}

impl MongoConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MONGODB_URI)
    }
}

impl FromEnv for MongoConfig {
    /// Reads `MONGODB_URI`, falling back to [`DEFAULT_MONGODB_URI`].
    /// Never fails; the signature matches the other configs in the workspace.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            uri: env_or_default("MONGODB_URI", DEFAULT_MONGODB_URI),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mongo_config_from_env_unset_uses_default() {
        temp_env::with_var_unset("MONGODB_URI", || {
            let config = MongoConfig::from_env().unwrap();
            assert_eq!(config.uri, "mongodb://localhost:27017/sistema-mudancas");
        });
    }

    #[test]
    fn test_mongo_config_from_env_set() {
        temp_env::with_var(
            "MONGODB_URI",
            Some("mongodb://mongo.internal:27017/mudancas-prod"),
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.uri, "mongodb://mongo.internal:27017/mudancas-prod");
            },
        );
    }

    #[test]
    fn test_mongo_config_new() {
        let config = MongoConfig::new("mongodb://prod-host:27017/db");
        assert_eq!(config.uri, "mongodb://prod-host:27017/db");
    }

    #[test]
    fn test_mongo_config_default() {
        let config = MongoConfig::default();
        assert_eq!(config.uri, DEFAULT_MONGODB_URI);
    }
}
