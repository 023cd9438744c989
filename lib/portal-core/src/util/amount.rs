/// Monetary amounts travel to the ledger as integer minor units (cents).
///
/// Scaling is symmetric in both directions so a value submitted through a
/// form and read back from a record displays unchanged.
pub fn to_minor_units(amount: f64) -> Option<u64> {
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }

    let cents = (amount * 100.0).floor();
    if cents > u64::MAX as f64 {
        return None;
    }

    Some(cents as u64)
}

pub fn from_minor_units(cents: u64) -> f64 {
    cents as f64 / 100.0
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_to_minor_units_floors() {
        assert_eq!(to_minor_units(100_000.0), Some(10_000_000));
        assert_eq!(to_minor_units(49.999), Some(4999));
        assert_eq!(to_minor_units(0.0), Some(0));
    }

    #[test]
    fn test_to_minor_units_rejects_invalid() {
        assert_eq!(to_minor_units(-0.01), None);
        assert_eq!(to_minor_units(f64::NAN), None);
        assert_eq!(to_minor_units(f64::INFINITY), None);
    }

    #[test]
    fn test_round_trip_is_identity_on_cent_values() {
        for amount in [100_000.0, 5000.0, 0.5, 123.45] {
            let cents = to_minor_units(amount).unwrap();
            assert_eq!(from_minor_units(cents), amount);
        }
    }
}
