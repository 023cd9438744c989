use url::Url;

use super::ConfigValidationError;
use super::core_config::CoreConfig;

/// Checks the parts of the configuration that figment cannot: URLs must
/// parse and required identifiers must be non-empty.
pub fn validate_core_config(config: &CoreConfig) -> Result<(), ConfigValidationError> {
    if config.ledger.service_id.is_empty() {
        return Err(ConfigValidationError::MissingValue(
            "ledger.serviceId".to_string(),
        ));
    }

    Url::parse(&config.ledger.host)
        .map_err(|_| ConfigValidationError::InvalidLedgerHost(config.ledger.host.clone()))?;

    Url::parse(&config.identity.provider_url).map_err(|_| {
        ConfigValidationError::InvalidIdentityProviderUrl(config.identity.provider_url.clone())
    })?;

    if config.identity.derivation_origin.is_empty() {
        return Err(ConfigValidationError::MissingValue(
            "identity.derivationOrigin".to_string(),
        ));
    }

    if !config.ledger.request_timeout.is_positive() {
        return Err(ConfigValidationError::OutOfRange(
            "ledger.requestTimeout",
            config.ledger.request_timeout.to_string(),
        ));
    }

    if !config.session.idle_timeout.is_positive() {
        return Err(ConfigValidationError::OutOfRange(
            "session.idleTimeout",
            config.session.idle_timeout.to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::super::core_config::{IdentityConfig, LedgerConfig};
    use super::*;

    fn valid_config() -> CoreConfig {
        CoreConfig {
            ledger: LedgerConfig {
                host: "http://127.0.0.1:8000".to_string(),
                service_id: "credit-service".to_string(),
                ..Default::default()
            },
            identity: IdentityConfig {
                provider_url: "http://identity.localhost:8000/authorize".to_string(),
                derivation_origin: "http://portal.localhost:8000".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_core_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_invalid_host_fails() {
        let mut config = valid_config();
        config.ledger.host = "not a url".to_string();

        assert!(matches!(
            validate_core_config(&config),
            Err(ConfigValidationError::InvalidLedgerHost(_))
        ));
    }

    #[test]
    fn test_empty_service_id_fails() {
        let mut config = valid_config();
        config.ledger.service_id.clear();

        assert!(matches!(
            validate_core_config(&config),
            Err(ConfigValidationError::MissingValue(_))
        ));
    }

    #[test]
    fn test_nonpositive_timeout_fails() {
        let mut config = valid_config();
        config.ledger.request_timeout = time::Duration::ZERO;

        assert!(matches!(
            validate_core_config(&config),
            Err(ConfigValidationError::OutOfRange("ledger.requestTimeout", _))
        ));
    }
}
