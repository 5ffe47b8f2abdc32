//! Validation for reorder operations.
//!
//! Reorder endpoints take the full ordered id sequence for a parent
//! (lists within a board, cards within a list) and rewrite positions as
//! position = index. Before anything is written, the supplied sequence
//! must be checked against the parent's actual children: ids belonging
//! to a different parent, duplicates, or an empty sequence are caller
//! errors and the reorder writes nothing.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// Validate a caller-supplied reorder sequence against the parent's
/// actual child ids.
///
/// Every supplied id must belong to the parent and appear at most once.
/// A partial sequence is accepted: ids the caller omitted simply keep
/// their current positions.
pub fn validate_reorder(supplied: &[DbId], existing: &[DbId]) -> Result<(), CoreError> {
    if supplied.is_empty() {
        return Err(CoreError::Validation(
            "Reorder requires at least one id".into(),
        ));
    }

    let known: HashSet<&str> = existing.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::with_capacity(supplied.len());

    for id in supplied {
        if !known.contains(id.as_str()) {
            return Err(CoreError::Validation(format!(
                "id {id} does not belong to the target parent"
            )));
        }
        if !seen.insert(id.as_str()) {
            return Err(CoreError::Validation(format!("duplicate id {id} in reorder")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<DbId> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accepts_full_permutation() {
        let existing = ids(&["a", "b", "c"]);
        assert!(validate_reorder(&ids(&["c", "a", "b"]), &existing).is_ok());
    }

    #[test]
    fn accepts_partial_sequence() {
        let existing = ids(&["a", "b", "c"]);
        assert!(validate_reorder(&ids(&["b"]), &existing).is_ok());
    }

    #[test]
    fn rejects_foreign_id() {
        let existing = ids(&["a", "b"]);
        let err = validate_reorder(&ids(&["a", "x"]), &existing).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_duplicates_and_empty() {
        let existing = ids(&["a", "b"]);
        assert!(validate_reorder(&ids(&["a", "a"]), &existing).is_err());
        assert!(validate_reorder(&[], &existing).is_err());
    }
}
