use serde::{Deserialize, Serialize};

/// Reply envelope used by every fallible ledger operation.
///
/// On the wire this is a single-tag object, `{"Ok": ...}` or
/// `{"Err": "..."}`. The error payload is always a bare message string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CallReply<T> {
    Ok(T),
    Err(String),
}

impl<T> CallReply<T> {
    pub fn into_result(self) -> Result<T, String> {
        match self {
            CallReply::Ok(value) => Ok(value),
            CallReply::Err(message) => Err(message),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reply_envelope_is_externally_tagged() {
        let ok: CallReply<u64> = serde_json::from_str(r#"{"Ok": 7}"#).unwrap();
        assert_eq!(ok.into_result(), Ok(7));

        let err: CallReply<u64> = serde_json::from_str(r#"{"Err": "no balance"}"#).unwrap();
        assert_eq!(err.into_result(), Err("no balance".to_string()));
    }

    #[test]
    fn test_unit_reply_round_trips() {
        let ok: CallReply<()> = serde_json::from_str(r#"{"Ok": null}"#).unwrap();
        assert_eq!(ok, CallReply::Ok(()));
    }
}
