use std::sync::Arc;

use time::macros::{date, datetime};

use super::HistoryService;
use super::dto::HistoryQueryDTO;
use crate::proto::history::{UploadHistoryResponse, UploadRecord};
use crate::proto::session::MockSessionProvider;
use crate::provider::ledger_client::MockLedgerClient;
use crate::service::error::{ServiceError, ValidationError};
use crate::service::test_utilities::{dummy_upload_record, institution_session};

fn setup(ledger_client: MockLedgerClient) -> HistoryService {
    let mut session_provider = MockSessionProvider::default();
    session_provider
        .expect_session()
        .returning(|| Some(institution_session()));

    HistoryService::new(Arc::new(ledger_client), Arc::new(session_provider))
}

fn history_page(records: Vec<UploadRecord>) -> UploadHistoryResponse {
    UploadHistoryResponse {
        total: records.len() as u64,
        data: records,
    }
}

#[tokio::test]
async fn test_history_comes_from_the_session_institution() {
    let mut ledger_client = MockLedgerClient::default();
    ledger_client
        .expect_get_upload_history()
        .once()
        .returning(|institution_id, params| {
            assert_eq!("rrkah-fqaaa-aaaaa-aaaaq-cai", institution_id.as_str());
            assert!(params.status.is_none());
            Ok(history_page(vec![dummy_upload_record()]))
        });
    let service = setup(ledger_client);

    let history = service
        .get_upload_history(HistoryQueryDTO::default())
        .await
        .unwrap();

    assert_eq!(1, history.total);
    assert_eq!("UPL-0001", history.data[0].id);
    assert_eq!(
        Some(datetime!(2024-03-24 10:30:00 UTC)),
        history.data[0].submitted_at
    );
    assert!(!history.data[0].review_result.passed);
}

#[tokio::test]
async fn test_day_filters_widen_to_whole_days() {
    let mut ledger_client = MockLedgerClient::default();
    ledger_client
        .expect_get_upload_history()
        .once()
        .returning(|_, params| {
            assert_eq!(Some("Failed".to_string()), params.status);
            assert_eq!(Some("2024-03-01T00:00:00Z".to_string()), params.start_date);
            assert_eq!(Some("2024-03-31T23:59:59Z".to_string()), params.end_date);
            Ok(history_page(vec![]))
        });
    let service = setup(ledger_client);

    service
        .get_upload_history(HistoryQueryDTO {
            status: Some("Failed".to_string()),
            start_date: Some(date!(2024 - 03 - 01)),
            end_date: Some(date!(2024 - 03 - 31)),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unreadable_timestamp_keeps_the_row_without_a_date() {
    let mut ledger_client = MockLedgerClient::default();
    ledger_client
        .expect_get_upload_history()
        .once()
        .returning(|_, _| {
            Ok(history_page(vec![UploadRecord {
                submitted_at: "soon".to_string(),
                ..dummy_upload_record()
            }]))
        });
    let service = setup(ledger_client);

    let history = service
        .get_upload_history(HistoryQueryDTO::default())
        .await
        .unwrap();

    assert_eq!(1, history.data.len());
    assert_eq!(None, history.data[0].submitted_at);
}

#[tokio::test]
async fn test_retry_passes_the_record_id() {
    let mut ledger_client = MockLedgerClient::default();
    ledger_client
        .expect_retry_upload()
        .once()
        .returning(|institution_id, record_id| {
            assert_eq!("rrkah-fqaaa-aaaaa-aaaaq-cai", institution_id.as_str());
            assert_eq!("UPL-0001", record_id.as_str());
            Ok(UploadRecord {
                status: "Success".to_string(),
                ..dummy_upload_record()
            })
        });
    let service = setup(ledger_client);

    let record = service.retry_upload("UPL-0001".into()).await.unwrap();

    assert_eq!("Success", record.status);
}

#[tokio::test]
async fn test_blank_record_id_is_rejected() {
    let service = setup(MockLedgerClient::default());

    let result = service.retry_upload("  ".into()).await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::EmptyRecordId))
    ));
}
