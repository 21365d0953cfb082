//! Distinct-until-changed filter
//!
//! Remembers the last value it let through and suppresses repeats, so display
//! updates only fire when the shown value actually changes.

/// A filter that passes a value only when it differs from the previous one
#[derive(Clone, Debug, Default)]
pub struct Distinct<T> {
    last: Option<T>,
}

impl<T: PartialEq> Distinct<T> {
    /// Create an empty filter; the first value always passes
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Offer a value, returning it back if it differs from the last one passed
    pub fn offer(&mut self, value: T) -> Option<&T> {
        if self.last.as_ref() == Some(&value) {
            return None;
        }
        self.last = Some(value);
        self.last.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_suppresses_repeats() {
        let mut distinct = Distinct::new();
        assert_eq!(distinct.offer("12.0"), Some(&"12.0"));
        assert_eq!(distinct.offer("12.0"), None);
        assert_eq!(distinct.offer("12.5"), Some(&"12.5"));
        assert_eq!(distinct.offer("12.0"), Some(&"12.0"));
    }

    #[test]
    fn test_distinct_first_offer_passes() {
        let mut distinct = Distinct::new();
        assert_eq!(distinct.offer(1), Some(&1));
        assert_eq!(distinct.offer(1), None);
    }
}
