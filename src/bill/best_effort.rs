//! Mapping over a sequence where individual elements are allowed to fail.

use std::fmt::Display;

/// Apply `transform` to each item, substituting `fallback(item)` for any item
/// where `transform` fails.
///
/// The output has one element per input item, in the same order. A failure is
/// logged at the debug level and never stops the rest of the sequence from
/// being processed.
pub fn best_effort_map<T, U, E>(
    items: impl IntoIterator<Item = T>,
    mut transform: impl FnMut(&T) -> Result<U, E>,
    mut fallback: impl FnMut(&T) -> U,
) -> Vec<U>
where
    E: Display,
{
    items
        .into_iter()
        .map(|item| match transform(&item) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!("Using fallback value after transform failed: {error}");
                fallback(&item)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::best_effort_map;

    #[test]
    fn keeps_successful_values() {
        let got = best_effort_map(["1", "2", "3"], |s| s.parse::<i32>(), |_| -1);

        assert_eq!(got, vec![1, 2, 3]);
    }

    #[test]
    fn substitutes_fallback_only_for_failures() {
        let got = best_effort_map(["1", "two", "3", ""], |s| s.parse::<i32>(), |_| -1);

        assert_eq!(got, vec![1, -1, 3, -1]);
    }

    #[test]
    fn fallback_receives_failed_item() {
        let got = best_effort_map(
            vec!["10".to_owned(), "ten".to_owned()],
            |s| s.parse::<i32>().map(|n| n.to_string()),
            |s| format!("raw:{s}"),
        );

        assert_eq!(got, vec!["10".to_owned(), "raw:ten".to_owned()]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let items: Vec<&str> = vec![];

        let got = best_effort_map(items, |s| s.parse::<i32>(), |_| 0);

        assert!(got.is_empty());
    }
}
