//! Merge engine
//!
//! Reconciles a batch of incoming quotes (typically fetched from the
//! remote server) into a local collection. Matching is exact text
//! equality with no normalization; on a match the incoming record wins
//! and replaces the local one in its positional slot, otherwise it is
//! appended. The function is pure: persisting the merged list and
//! refreshing the category index are the caller's responsibility.

use serde::Serialize;

use crate::models::Quote;

/// Outcome of a merge
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MergeResult {
    /// The reconciled collection
    pub merged: Vec<Quote>,
    /// Incoming records appended because no local text matched
    pub added: usize,
    /// Incoming records that replaced a matching local record
    pub conflicts: usize,
}

/// Merge `incoming` into `local`, incoming-wins on text collision
///
/// Incoming records are processed in order, each matching against the
/// working list (including records appended earlier in the same merge).
/// Duplicate incoming texts therefore resolve in incoming order, the
/// last one winning. Deterministic for a fixed incoming order; cannot
/// fail.
pub fn merge(local: &[Quote], incoming: &[Quote]) -> MergeResult {
    let mut merged = local.to_vec();
    let mut added = 0;
    let mut conflicts = 0;

    for quote in incoming {
        match merged.iter().position(|q| q.text == quote.text) {
            Some(i) => {
                merged[i] = quote.clone();
                conflicts += 1;
            }
            None => {
                merged.push(quote.clone());
                added += 1;
            }
        }
    }

    MergeResult {
        merged,
        added,
        conflicts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str, category: &str) -> Quote {
        Quote::new(text, category)
    }

    #[test]
    fn test_disjoint_batch_appends() {
        let local = vec![q("A", "X")];
        let incoming = vec![q("B", "Y"), q("C", "Z")];

        let result = merge(&local, &incoming);
        assert_eq!(result.merged.len(), 3);
        assert_eq!(result.added, 2);
        assert_eq!(result.conflicts, 0);
        assert_eq!(result.merged[0], q("A", "X"));
        assert_eq!(result.merged[2], q("C", "Z"));
    }

    #[test]
    fn test_server_wins_on_text_collision() {
        let local = vec![q("Life quote", "Life")];
        let incoming = vec![q("Life quote", "Server")];

        let result = merge(&local, &incoming);
        assert_eq!(result.merged, vec![q("Life quote", "Server")]);
        assert_eq!(result.added, 0);
        assert_eq!(result.conflicts, 1);
    }

    #[test]
    fn test_replacement_preserves_position() {
        let local = vec![q("A", "X"), q("B", "Y"), q("C", "Z")];
        let incoming = vec![q("B", "Server")];

        let result = merge(&local, &incoming);
        assert_eq!(result.merged.len(), 3);
        assert_eq!(result.merged[1], q("B", "Server"));
        assert_eq!(result.merged[0], q("A", "X"));
        assert_eq!(result.merged[2], q("C", "Z"));
    }

    #[test]
    fn test_duplicate_incoming_texts_resolve_in_order() {
        let local = vec![];
        let incoming = vec![q("A", "X"), q("A", "Y")];

        let result = merge(&local, &incoming);
        assert_eq!(result.merged, vec![q("A", "Y")]);
        assert_eq!(result.added, 1);
        assert_eq!(result.conflicts, 1);
    }

    #[test]
    fn test_idempotent_on_replay() {
        let local = vec![q("A", "X")];
        let incoming = vec![q("A", "Server"), q("B", "Server")];

        let first = merge(&local, &incoming);
        let second = merge(&first.merged, &incoming);

        assert_eq!(second.merged, first.merged);
        assert_eq!(second.added, 0);
        assert_eq!(second.conflicts, incoming.len());
    }

    #[test]
    fn test_no_case_normalization() {
        let local = vec![q("hello", "X")];
        let incoming = vec![q("Hello", "Y")];

        let result = merge(&local, &incoming);
        // Different case means a different quote
        assert_eq!(result.merged.len(), 2);
        assert_eq!(result.added, 1);
        assert_eq!(result.conflicts, 0);
    }

    #[test]
    fn test_empty_incoming_is_noop() {
        let local = vec![q("A", "X")];
        let result = merge(&local, &[]);
        assert_eq!(result.merged, local);
        assert_eq!(result.added, 0);
        assert_eq!(result.conflicts, 0);
    }
}
