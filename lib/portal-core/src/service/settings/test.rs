use std::sync::Arc;

use super::SettingsService;
use super::dto::ServiceSettingsDTO;
use crate::proto::session::MockSessionProvider;
use crate::proto::settings::ServiceSettings;
use crate::provider::ledger_client::MockLedgerClient;
use crate::service::error::{BusinessLogicError, ServiceError, ValidationError};
use crate::service::test_utilities::institution_session;

fn setup(ledger_client: MockLedgerClient) -> SettingsService {
    let mut session_provider = MockSessionProvider::default();
    session_provider
        .expect_session()
        .returning(|| Some(institution_session()));

    SettingsService::new(Arc::new(ledger_client), Arc::new(session_provider))
}

#[tokio::test]
async fn test_settings_come_from_the_session_institution() {
    let mut ledger_client = MockLedgerClient::default();
    ledger_client
        .expect_get_service_settings()
        .once()
        .returning(|institution_id| {
            assert_eq!("rrkah-fqaaa-aaaaa-aaaaq-cai", institution_id.as_str());
            Ok(ServiceSettings {
                data_service_enabled: true,
                query_price: 10,
                reward_share_ratio: 20,
            })
        });
    let service = setup(ledger_client);

    let settings = service.get_settings().await.unwrap();

    assert_eq!(
        ServiceSettingsDTO {
            data_service_enabled: true,
            query_price: 10,
            reward_share_ratio: 20,
        },
        settings
    );
}

#[tokio::test]
async fn test_update_sends_the_new_settings() {
    let mut ledger_client = MockLedgerClient::default();
    ledger_client
        .expect_update_service_settings()
        .once()
        .returning(|institution_id, settings| {
            assert_eq!("rrkah-fqaaa-aaaaa-aaaaq-cai", institution_id.as_str());
            assert!(!settings.data_service_enabled);
            assert_eq!(25, settings.query_price);
            assert_eq!(100, settings.reward_share_ratio);
            Ok(())
        });
    let service = setup(ledger_client);

    service
        .update_settings(ServiceSettingsDTO {
            data_service_enabled: false,
            query_price: 25,
            reward_share_ratio: 100,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_ratio_above_one_hundred_is_rejected() {
    let service = setup(MockLedgerClient::default());

    let result = service
        .update_settings(ServiceSettingsDTO {
            data_service_enabled: true,
            query_price: 10,
            reward_share_ratio: 101,
        })
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation(
            ValidationError::InvalidRewardShareRatio
        ))
    ));
}

#[tokio::test]
async fn test_settings_without_session_fail() {
    let mut session_provider = MockSessionProvider::default();
    session_provider.expect_session().returning(|| None);
    let service = SettingsService::new(
        Arc::new(MockLedgerClient::default()),
        Arc::new(session_provider),
    );

    let result = service.get_settings().await;

    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::NoActiveSession
        ))
    ));
}
