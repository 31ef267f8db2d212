//! Fuzzy scoring and ranking of candidate paths.
//!
//! The matcher is an intentionally cheap, greedy, order-preserving
//! subsequence heuristic rather than optimal alignment: it walks each
//! candidate exactly once per query, which keeps per-keystroke re-ranking
//! well under a frame even over tens of thousands of paths.

use crate::entry::CandidateEntry;

/// Additive score applied to candidates rooted under the invoking shell's
/// working directory. Large enough that proximity always outranks lexical
/// match quality.
pub const CWD_BOOST: i64 = 100_000;

/// Characters treated as segment separators for the consecutiveness bonus.
const SEPARATORS: &[char] = &['/', '_', ' ', '-', '.'];

/// Scores `candidate` against `query`. Higher is better; `-1` means no match.
///
/// - An empty query matches everything with score 1.
/// - Comparison is case-insensitive.
/// - A contiguous substring scores `1000 - last_occurrence_index` (a
///   character index), favoring matches in the tail (the directory name)
///   over early path segments.
/// - Otherwise a left-to-right subsequence walk accumulates a running bonus:
///   +10 for a character following a separator, +1 otherwise, with the
///   accumulator reset on every unmatched character. Separator-segmented
///   matches therefore outrank the same letters buried in a plain run.
pub fn score(query: &str, candidate: &str) -> i64 {
    if query.is_empty() {
        return 1;
    }

    let query = query.to_lowercase();
    let candidate = candidate.to_lowercase();

    if let Some(byte_index) = candidate.rfind(&query) {
        let char_index = candidate[..byte_index].chars().count();
        return 1000 - char_index as i64;
    }

    let chars: Vec<char> = candidate.chars().collect();
    let wanted: Vec<char> = query.chars().collect();

    let mut qi = 0usize;
    let mut total = 0i64;
    let mut bonus = 0i64;

    for (ci, &ch) in chars.iter().enumerate() {
        if qi < wanted.len() && ch == wanted[qi] {
            let after_separator = ci > 0 && SEPARATORS.contains(&chars[ci - 1]);
            bonus += if after_separator { 10 } else { 1 };
            total += bonus;
            qi += 1;
        } else {
            bonus = 0;
        }
    }

    if qi == wanted.len() { total } else { -1 }
}

/// Ranks `candidates` against `query`, keeping the best `limit` matches.
///
/// Only strictly positive scores survive. The sort is stable and descending,
/// so equal scores keep scan order. `boost` marks candidates that receive
/// [`CWD_BOOST`] on top of their base score.
pub fn rank<'a>(
    query: &str,
    candidates: &'a [CandidateEntry],
    limit: usize,
    boost: impl Fn(&CandidateEntry) -> bool,
) -> Vec<(i64, &'a CandidateEntry)> {
    let mut results: Vec<(i64, &CandidateEntry)> = candidates
        .iter()
        .filter_map(|candidate| {
            let base = score(query, candidate.display_text());
            if base <= 0 {
                return None;
            }
            let boosted = if boost(candidate) {
                base + CWD_BOOST
            } else {
                base
            };
            Some((boosted, candidate))
        })
        .collect();

    results.sort_by(|a, b| b.0.cmp(&a.0));
    results.truncate(limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(score("", "anything/at/all"), 1);
        assert_eq!(score("", ""), 1);
    }

    #[test]
    fn test_substring_scores_from_last_occurrence() {
        assert_eq!(score("foo", "foo"), 1000);
        assert_eq!(score("foo", "xfoo"), 999);
        // The later occurrence wins: 1000 - 8.
        assert_eq!(score("foo", "foo/bar/foo"), 992);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(score("FOO", "foo"), 1000);
        assert_eq!(score("foo", "FOO"), 1000);
    }

    #[test]
    fn test_subsequence_with_separator_bonus() {
        // 'f' scores +1, 'b' follows '/' so the accumulator jumps to 10.
        assert_eq!(score("fb", "foo/bar"), 11);
    }

    #[test]
    fn test_separator_segments_outrank_plain_runs() {
        // Per-character: 1, then 10/20/30 after each '_'.
        assert_eq!(score("abcd", "a_b_c_d"), 31);
        // The run restarts at 1 after the mismatched 'z' and grows by 1.
        assert_eq!(score("abcd", "zazbcdz"), 7);
        assert!(score("abcd", "a_b_c_d") > score("abcd", "zazbcdz"));
    }

    #[test]
    fn test_substring_index_counts_characters() {
        // 'é' is two bytes; the score still reflects six preceding chars.
        assert_eq!(score("docs", "héllo/docs"), score("docs", "hello/docs"));
        assert_eq!(score("docs", "héllo/docs"), 994);
    }

    #[test]
    fn test_no_match_is_negative() {
        assert_eq!(score("zz", "foo"), -1);
        assert_eq!(score("ba", "ab"), -1);
    }

    #[test]
    fn test_consecutive_run_beats_scattered() {
        // "src" as a run vs. the same letters spread across segments.
        let run = score("src", "x/srcx");
        let scattered = score("src", "sa/ra/ca");
        assert!(run > scattered);
    }

    #[test]
    fn test_rank_sorted_descending_and_positive() {
        let candidates = vec![
            CandidateEntry::local("deep/docs"),
            CandidateEntry::local("docs"),
            CandidateEntry::local("unrelated"),
        ];

        let ranked = rank("docs", &candidates, 10, |_| false);
        assert_eq!(ranked.len(), 2);
        for window in ranked.windows(2) {
            assert!(window[0].0 >= window[1].0);
        }
        for (s, entry) in &ranked {
            assert!(*s > 0);
            assert!(score("docs", entry.display_text()) > 0);
        }
        // Tail position wins: bare "docs" over "deep/docs".
        assert_eq!(ranked[0].1.display_text(), "docs");
    }

    #[test]
    fn test_rank_empty_query_keeps_scan_order() {
        let candidates: Vec<CandidateEntry> = ["a", "b", "c", "d"]
            .iter()
            .map(|p| CandidateEntry::local(*p))
            .collect();

        let ranked = rank("", &candidates, 3, |_| false);
        let order: Vec<&str> = ranked.iter().map(|(_, e)| e.display_text()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert!(ranked.iter().all(|(s, _)| *s == 1));
    }

    #[test]
    fn test_boost_is_exactly_the_constant() {
        let candidates = vec![CandidateEntry::local("a/b"), CandidateEntry::local("c/d")];

        let plain = rank("b", &candidates, 10, |_| false);
        let boosted = rank("b", &candidates, 10, |entry| {
            entry.display_text().starts_with("a/")
        });
        let base = plain[0].0;
        assert_eq!(boosted[0].1.display_text(), "a/b");
        assert_eq!(boosted[0].0 - base, CWD_BOOST);
    }

    #[test]
    fn test_boosted_candidate_outranks_better_textual_match() {
        let candidates = vec![
            CandidateEntry::local("elsewhere/data"),
            CandidateEntry::local("a/b/d"),
        ];

        let ranked = rank("d", &candidates, 10, |entry| {
            entry.display_text().starts_with("a/")
        });
        assert_eq!(ranked[0].1.display_text(), "a/b/d");
    }
}
