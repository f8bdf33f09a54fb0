use crate::{ConfigError, env_lookup, parse_or};

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 10u32)?;

        Ok(Self {
            url,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_is_required() {
        let err = DatabaseConfig::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn test_pool_size_default_and_override() {
        let config = DatabaseConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://localhost/school".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.max_connections, 10);

        let config = DatabaseConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://localhost/school".to_string()),
            "DB_MAX_CONNECTIONS" => Some("4".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.max_connections, 4);
    }
}
