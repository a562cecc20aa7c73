use super::Candidate;

/// Search text and favorites toggle applied to a fetched candidate list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilter {
    pub search: String,
    pub favorites_only: bool,
}

impl CandidateFilter {
    pub fn new(search: impl Into<String>, favorites_only: bool) -> Self {
        Self {
            search: search.into(),
            favorites_only,
        }
    }

    /// Whether a single candidate passes the filter.
    pub fn matches(&self, candidate: &Candidate) -> bool {
        if self.favorites_only && !candidate.is_favorite {
            return false;
        }

        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        candidate.first_name.to_lowercase().contains(&needle)
            || candidate.last_name.to_lowercase().contains(&needle)
            || candidate.full_name().to_lowercase().contains(&needle)
    }

    /// Keep matching candidates, in their original order.
    pub fn apply<'a>(&self, candidates: &'a [Candidate]) -> Vec<&'a Candidate> {
        candidates.iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Candidate> {
        vec![
            Candidate::new("John", "Doe", "john.doe@example.com").favorite(true),
            Candidate::new("Alice", "Smith", "alice.smith@example.com"),
            Candidate::new("Johanna", "Brown", "johanna@example.com"),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everyone() {
        let candidates = roster();
        assert_eq!(CandidateFilter::default().apply(&candidates).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let candidates = roster();
        let found = CandidateFilter::new("  joh ", false).apply(&candidates);

        let names: Vec<_> = found.iter().map(|c| c.first_name.as_str()).collect();
        assert_eq!(names, vec!["John", "Johanna"]);
    }

    #[test]
    fn test_search_matches_full_name() {
        let candidates = roster();
        let found = CandidateFilter::new("alice smith", false).apply(&candidates);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].last_name, "Smith");
    }

    #[test]
    fn test_favorites_only() {
        let candidates = roster();
        let found = CandidateFilter::new("", true).apply(&candidates);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "John");
    }

    #[test]
    fn test_search_and_favorites_combine() {
        let candidates = roster();
        assert!(CandidateFilter::new("alice", true).apply(&candidates).is_empty());
    }
}
