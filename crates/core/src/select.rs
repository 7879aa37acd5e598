//! Conditional value selection
//!
//! Provides `fancy_if` - a ternary conditional wrapped in a generic
//! function.

/// Select one of two already-evaluated values
///
/// Returns `true_case` when `condition` holds, otherwise `false_case`.
///
/// Both candidates are evaluated by the caller before this function
/// runs. The exercise this reproduces billed itself as a lazy-evaluation
/// demo, but its arguments were eager too; the mismatch is kept here
/// rather than corrected, which is why this takes plain values and not
/// closures.
pub fn fancy_if<T>(condition: bool, true_case: T, false_case: T) -> T {
    if condition {
        true_case
    } else {
        false_case
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_first_when_true() {
        assert_eq!(fancy_if(true, 3, 7), 3);
        assert_eq!(fancy_if(true, "yes", "no"), "yes");
    }

    #[test]
    fn test_selects_second_when_false() {
        assert_eq!(fancy_if(false, 3, 7), 7);
        assert_eq!(fancy_if(false, "yes", "no"), "no");
    }

    #[test]
    fn test_moves_non_copy_values() {
        let kept = fancy_if(true, String::from("kept"), String::from("dropped"));
        assert_eq!(kept, "kept");

        let other = fancy_if(false, vec![1], vec![2, 3]);
        assert_eq!(other, vec![2, 3]);
    }

    #[test]
    fn test_arguments_are_eager() {
        // Both arms run before the call; selection cannot undo that.
        let mut evaluated = Vec::new();
        let first = {
            evaluated.push("first");
            1 + 2
        };
        let second = {
            evaluated.push("second");
            3 + 4
        };
        assert_eq!(fancy_if(true, first, second), 3);
        assert_eq!(evaluated, ["first", "second"]);
    }
}
