use std::cmp::Ordering;
use std::fmt;

/// A floating point key with a defined ordering.
/// NaN is rejected on construction, infinities are kept.
#[derive(Debug, Copy, Clone)]
pub struct Key(f64);

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum KeyError {
    #[error("NaN cannot be used as a key")]
    NotANumber,
}

impl Key {
    pub fn new(value: f64) -> Result<Self, KeyError> {
        if value.is_nan() {
            return Err(KeyError::NotANumber);
        }
        Ok(Key(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        // -0.0 and 0.0 compare equal, as they do for f64
        match self.0.partial_cmp(&other.0) {
            Some(ord) => ord,
            None => unreachable!("keys are never NaN"),
        }
    }
}

impl TryFrom<f64> for Key {
    type Error = KeyError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Key::new(value)
    }
}

impl From<Key> for f64 {
    fn from(key: Key) -> f64 {
        key.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nan() {
        assert_eq!(Key::new(f64::NAN), Err(KeyError::NotANumber));
        assert_eq!(Key::try_from(-f64::NAN), Err(KeyError::NotANumber));
    }

    #[test]
    fn accepts_infinities() {
        let low = Key::new(f64::NEG_INFINITY).unwrap();
        let high = Key::new(f64::INFINITY).unwrap();
        let mid = Key::new(0.5).unwrap();
        assert!(low < mid);
        assert!(mid < high);
    }

    #[test]
    fn negative_zero_equals_zero() {
        let neg = Key::new(-0.0).unwrap();
        let pos = Key::new(0.0).unwrap();
        assert_eq!(neg.cmp(&pos), Ordering::Equal);
        assert_eq!(neg, pos);
    }

    #[test]
    fn total_order_sorts_keys() {
        let mut keys: Vec<Key> = [3.5, f64::NEG_INFINITY, -1.0, f64::INFINITY, 0.0]
            .into_iter()
            .map(|value| Key::new(value).unwrap())
            .collect();
        keys.sort();
        let values: Vec<f64> = keys.into_iter().map(Key::get).collect();
        assert_eq!(values, vec![f64::NEG_INFINITY, -1.0, 0.0, 3.5, f64::INFINITY]);
        assert_eq!(
            Key::new(1.0).unwrap().max(Key::new(2.0).unwrap()).get(),
            2.0
        );
    }

    #[test]
    fn round_trips_value() {
        let key = Key::new(10.54).unwrap();
        assert_eq!(key.get(), 10.54);
        assert_eq!(f64::from(key), 10.54);
        assert_eq!(key.to_string(), "10.54");
    }
}
