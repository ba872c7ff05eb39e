//! Flair allow-list filter.

/// Exact-match allow-list over post flair. An empty list accepts everything.
///
/// Entries are compared byte-for-byte: no case folding, no trimming, no
/// prefix matching. The list is kept sorted for `binary_search`.
#[derive(Clone, Debug, Default)]
pub struct FlairFilter {
    allow: Vec<String>,
}

impl FlairFilter {
    pub fn new<I, S>(allow: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut allow: Vec<String> = allow.into_iter().map(Into::into).collect();
        allow.sort();
        allow.dedup();
        Self { allow }
    }

    pub fn is_enabled(&self) -> bool {
        !self.allow.is_empty()
    }

    #[inline]
    pub fn accepts(&self, flair: &str) -> bool {
        if self.allow.is_empty() {
            return true;
        }
        self.allow.binary_search_by(|probe| probe.as_str().cmp(flair)).is_ok()
    }
}
