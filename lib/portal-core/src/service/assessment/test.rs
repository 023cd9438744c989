use std::sync::Arc;

use time::macros::datetime;

use super::AssessmentService;
use crate::proto::assessment::{AssessmentListResponse, RiskAssessment, RiskAssessmentReport};
use crate::proto::session::MockSessionProvider;
use crate::provider::ledger_client::MockLedgerClient;
use crate::service::error::{ServiceError, ValidationError};
use crate::service::test_utilities::{get_dummy_ledger_ns, institution_session};

fn setup(ledger_client: MockLedgerClient) -> AssessmentService {
    let mut session_provider = MockSessionProvider::default();
    session_provider
        .expect_session()
        .returning(|| Some(institution_session()));

    AssessmentService::new(Arc::new(ledger_client), Arc::new(session_provider))
}

fn assessment() -> RiskAssessment {
    RiskAssessment {
        credit_score: 85,
        risk_level: "low".to_string(),
        assessment_details: vec!["12 records on file".to_string()],
        suggestions: vec!["maintain repayment schedule".to_string()],
    }
}

fn report() -> RiskAssessmentReport {
    RiskAssessmentReport {
        report_id: "RPT-0001".into(),
        user_did: "did:dc:user1".into(),
        institution_id: "rrkah-fqaaa-aaaaa-aaaaq-cai".into(),
        assessment: assessment(),
        created_at: get_dummy_ledger_ns(),
    }
}

#[tokio::test]
async fn test_assessment_resolves_the_session_institution() {
    let mut ledger_client = MockLedgerClient::default();
    ledger_client
        .expect_get_risk_assessment()
        .once()
        .returning(|institution_id, user_did| {
            assert_eq!("rrkah-fqaaa-aaaaa-aaaaq-cai", institution_id.as_str());
            assert_eq!("did:dc:user1", user_did.as_str());
            Ok(assessment())
        });
    let service = setup(ledger_client);

    let result = service
        .get_risk_assessment("did:dc:user1".into())
        .await
        .unwrap();

    assert_eq!(85, result.credit_score);
    assert_eq!("low", result.risk_level);
    assert_eq!(vec!["maintain repayment schedule"], result.suggestions);
}

#[tokio::test]
async fn test_blank_user_did_is_rejected() {
    let service = setup(MockLedgerClient::default());

    let result = service.get_risk_assessment("  ".into()).await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::EmptyUserDid))
    ));
}

#[tokio::test]
async fn test_report_window_defaults_to_thirty_days() {
    let mut ledger_client = MockLedgerClient::default();
    ledger_client
        .expect_query_assessment_reports()
        .once()
        .returning(|_, days| {
            assert_eq!(Some(30), days);
            Ok(AssessmentListResponse {
                status: "ok".to_string(),
                message: None,
                data: vec![],
            })
        });
    let service = setup(ledger_client);

    let reports = service.list_reports(None).await.unwrap();

    assert!(reports.is_empty());
}

#[tokio::test]
async fn test_reports_unwrap_the_list_envelope() {
    let mut ledger_client = MockLedgerClient::default();
    ledger_client
        .expect_query_assessment_reports()
        .once()
        .returning(|_, days| {
            assert_eq!(Some(7), days);
            Ok(AssessmentListResponse {
                status: "ok".to_string(),
                message: None,
                data: vec![report()],
            })
        });
    let service = setup(ledger_client);

    let reports = service.list_reports(Some(7)).await.unwrap();

    assert_eq!(1, reports.len());
    assert_eq!("RPT-0001", reports[0].report_id.as_str());
    assert_eq!(85, reports[0].assessment.credit_score);
    assert_eq!(
        Some(datetime!(2024-03-24 00:00:00.123 UTC)),
        reports[0].created_at
    );
}
