use time::OffsetDateTime;
use time::macros::datetime;

use crate::proto::deduction::CreditDeductionRecord;
use crate::proto::history::{ReviewResult, UploadRecord};
use crate::proto::institution::{
    CreditScore, Institution, InstitutionStatus, TokenTrading,
};
use crate::proto::record::{
    CreditRecord, LoanContent, RecordContent, RecordStatus, RecordType,
};
use crate::proto::session::{Session, SessionRole};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

/// Nanosecond ledger timestamp for 2024-03-24 00:00:00.123456789 UTC.
pub fn get_dummy_ledger_ns() -> u64 {
    1_711_238_400_123_456_789
}

pub fn dummy_institution() -> Institution {
    Institution {
        id: "rrkah-fqaaa-aaaaa-aaaaq-cai".into(),
        name: "test-bank".to_string(),
        full_name: "Test Bank Co., Ltd.".to_string(),
        password_hash: "argon2id$dummy".to_string(),
        status: InstitutionStatus::Active,
        join_time: get_dummy_ledger_ns(),
        last_active: get_dummy_ledger_ns(),
        api_calls: 42,
        dcc_consumed: 7,
        data_uploads: 13,
        credit_score: CreditScore {
            score: 80,
            last_update: get_dummy_ledger_ns(),
        },
        token_trading: TokenTrading {
            bought: 1000,
            sold: 250,
        },
    }
}

pub fn dummy_credit_record() -> CreditRecord {
    CreditRecord {
        id: "REC-0001".into(),
        institution_id: "rrkah-fqaaa-aaaaa-aaaaq-cai".into(),
        institution_name: "test-bank".to_string(),
        institution_full_name: "Test Bank Co., Ltd.".to_string(),
        record_type: RecordType::LoanRecord,
        user_did: "did:dc:user1".into(),
        event_date: "2024-03-24".to_string(),
        content: RecordContent::Loan(LoanContent {
            amount: 10_000_000,
            loan_id: "LOAN2024032400042".into(),
            term_months: 12,
            interest_rate: 4.35,
        }),
        encrypted_content: b"encrypted".to_vec(),
        proof: b"proof".to_vec(),
        canister_id: "rrkah-fqaaa-aaaaa-aaaaq-cai".to_string(),
        timestamp: get_dummy_ledger_ns(),
        status: RecordStatus::Confirmed,
        reward_amount: Some(10),
    }
}

pub fn dummy_deduction_record() -> CreditDeductionRecord {
    CreditDeductionRecord {
        id: "DED-0001".to_string(),
        record_id: "REC-0001".to_string(),
        institution_id: "rrkah-fqaaa-aaaaa-aaaaq-cai".into(),
        institution_name: "test-bank".to_string(),
        deduction_points: 5,
        reason: "late filing".to_string(),
        data_quality_issue: "missing repayment date".to_string(),
        created_at: get_dummy_ledger_ns(),
        operator_id: "op-7".into(),
        operator_name: "reviewer".to_string(),
    }
}

pub fn dummy_upload_record() -> UploadRecord {
    UploadRecord {
        id: "UPL-0001".to_string(),
        user_did: "did:dc:user1".into(),
        institution_id: "rrkah-fqaaa-aaaaa-aaaaq-cai".into(),
        status: "pending".to_string(),
        submitted_at: "2024-03-24T10:30:00Z".to_string(),
        review_result: ReviewResult {
            passed: false,
            reason: None,
        },
    }
}

pub fn admin_session() -> Session {
    Session {
        principal: "w3gef-kqhgj-admin".to_string(),
        role: SessionRole::Admin,
        token: Some("portal-token".to_string()),
        institution_id: None,
        institution_name: None,
        established_at: get_dummy_date(),
    }
}

pub fn institution_session() -> Session {
    Session {
        principal: "w3gef-kqhgj-inst".to_string(),
        role: SessionRole::Institution,
        token: Some("portal-token".to_string()),
        institution_id: Some("rrkah-fqaaa-aaaaa-aaaaq-cai".into()),
        institution_name: Some("test-bank".to_string()),
        established_at: get_dummy_date(),
    }
}
