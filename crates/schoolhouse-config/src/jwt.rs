use std::str::FromStr;

use crate::{ConfigError, env_lookup, parse_or};

/// How the request gate treats a token whose signature and expiry check out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrustModel {
    /// Re-load the user named by the token; a deleted account is rejected.
    #[default]
    StoreValidated,
    /// Trust the verified claims without touching the store.
    Stateless,
}

impl FromStr for TrustModel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "store" => Ok(Self::StoreValidated),
            "stateless" => Ok(Self::Stateless),
            _ => Err(()),
        }
    }
}

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub access_token_expiry: i64,
    pub trust_model: TrustModel,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("trust_model", &self.trust_model)
            .finish()
    }
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let access_token_expiry = parse_or(&lookup, "JWT_ACCESS_EXPIRY", 3600i64)?;
        if access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                value: access_token_expiry.to_string(),
            });
        }

        let trust_model = match lookup("AUTH_TRUST_MODEL") {
            Some(raw) if !raw.trim().is_empty() => {
                raw.parse::<TrustModel>().map_err(|_| ConfigError::Invalid {
                    key: "AUTH_TRUST_MODEL",
                    value: raw,
                })?
            }
            _ => TrustModel::default(),
        };

        Ok(Self {
            secret,
            access_token_expiry,
            trust_model,
        })
    }
}
