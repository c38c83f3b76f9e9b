use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub candidate: String,
    /// Similarity in 0..=100, 100 for identical strings.
    pub score: u32,
}

/// Rank `candidates` against `query` by Jaro-Winkler similarity, best first.
///
/// Matching is case-insensitive. Ties break by candidate string so the
/// ranking is deterministic for a fixed input set. A blank query returns no
/// matches rather than scoring every candidate at zero.
pub fn search(
    query: &str,
    candidates: impl IntoIterator<Item = String>,
    limit: usize,
) -> Vec<SearchMatch> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(String, f64)> = candidates
        .into_iter()
        .map(|candidate| {
            let similarity = strsim::jaro_winkler(&query, &candidate.to_lowercase());
            (candidate, similarity)
        })
        .collect();

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored.truncate(limit);

    scored
        .into_iter()
        .map(|(candidate, similarity)| SearchMatch {
            candidate,
            score: (similarity * 100.0).round() as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_catalog;

    fn seed_names() -> Vec<String> {
        seed_catalog().into_keys().collect()
    }

    #[test]
    fn chess_query_ranks_chess_club_first() {
        let matches = search("chess", seed_names(), 5);
        assert_eq!(matches[0].candidate, "Chess Club");
        assert!(matches[0].score > matches[1].score);
    }

    #[test]
    fn michael_query_ranks_his_email_first() {
        let emails = vec![
            "michael@mergington.edu".to_string(),
            "daniel@mergington.edu".to_string(),
            "emma@mergington.edu".to_string(),
            "sophia@mergington.edu".to_string(),
            "john@mergington.edu".to_string(),
            "olivia@mergington.edu".to_string(),
        ];
        let matches = search("michael", emails, 5);
        assert_eq!(matches[0].candidate, "michael@mergington.edu");
        assert!(matches[0].score > matches[1].score);
    }

    #[test]
    fn limit_is_honored() {
        let matches = search("club", seed_names(), 5);
        assert!(matches.len() <= 5);
        assert_eq!(search("club", seed_names(), 3).len(), 3);
    }

    #[test]
    fn identical_string_scores_one_hundred() {
        let matches = search("Chess Club", seed_names(), 5);
        assert_eq!(matches[0].candidate, "Chess Club");
        assert_eq!(matches[0].score, 100);
    }

    #[test]
    fn blank_query_returns_nothing() {
        assert!(search("", seed_names(), 5).is_empty());
        assert!(search("   ", seed_names(), 5).is_empty());
    }

    #[test]
    fn ranking_is_deterministic() {
        let first = search("team", seed_names(), 5);
        let second = search("team", seed_names(), 5);
        assert_eq!(first, second);
    }
}
