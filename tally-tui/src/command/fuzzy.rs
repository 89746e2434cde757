use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Case-insensitive subsequence filter for palette candidates.
pub struct CandidateFilter {
    matcher: SkimMatcherV2,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }
}

impl CandidateFilter {
    /// True when every character of `query` occurs in `candidate`, in order.
    ///
    /// The matcher only folds ASCII case, so both sides are lowercased first.
    pub fn matches(&self, candidate: &str, query: &str) -> bool {
        query.is_empty()
            || self
                .matcher
                .fuzzy_match(&candidate.to_lowercase(), &query.to_lowercase())
                .is_some()
    }

    /// Keep the matching candidates. Source order is preserved; match scores are ignored.
    pub fn filter<'a, I>(&self, source: I, query: &str) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        source
            .into_iter()
            .filter(|candidate| self.matches(candidate, query))
            .map(str::to_string)
            .collect()
    }
}
