use serde::Serialize;

/// Counts of constructs that were tolerated rather than rendered.
///
/// Nothing here changes output; malformed markup is still handled
/// best-effort. The counters only make the silent cases observable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    /// Attribute tokens without a usable `key=value` shape
    pub skipped_attributes: usize,
    /// Open or close tags outside the supported vocabulary
    pub ignored_tags: usize,
    /// Close tags that took a style level below zero
    pub unbalanced_closes: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing was skipped, ignored or unbalanced
    pub fn is_clean(&self) -> bool {
        *self == Diagnostics::default()
    }

    pub fn merge(&mut self, other: &Diagnostics) {
        self.skipped_attributes += other.skipped_attributes;
        self.ignored_tags += other.ignored_tags;
        self.unbalanced_closes += other.unbalanced_closes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_and_clean() {
        let mut total = Diagnostics::new();
        assert!(total.is_clean());

        total.merge(&Diagnostics {
            skipped_attributes: 1,
            ignored_tags: 2,
            unbalanced_closes: 0,
        });
        total.merge(&Diagnostics {
            unbalanced_closes: 3,
            ..Diagnostics::default()
        });

        assert!(!total.is_clean());
        assert_eq!(total.skipped_attributes, 1);
        assert_eq!(total.ignored_tags, 2);
        assert_eq!(total.unbalanced_closes, 3);
    }
}
