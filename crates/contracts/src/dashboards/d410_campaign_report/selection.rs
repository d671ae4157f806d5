//! Selection rules for pickers that carry the "All" sentinel.

use super::dto::Selectable;

/// Merges a new multi-select value with the previous one.
///
/// `available` is the complete option list, sentinel included.
/// - "All" unchecked → nothing selected
/// - "All" checked while the list is incomplete → everything selected
/// - "All" checked while everything is selected → nothing selected
/// - otherwise the new value is taken as-is
///
/// Toggling "All" twice from a partial selection does not restore it:
/// the first toggle expands to the full list and the second clears it.
pub fn merge_selection<T: Selectable>(previous: &[T], next: Vec<T>, available: &[T]) -> Vec<T> {
    let was_all_checked = contains_sentinel(previous);
    let is_all_chosen_now = contains_sentinel(&next);
    let is_full_set_chosen_now = next.len() == available.len();

    if was_all_checked && !is_all_chosen_now {
        return Vec::new();
    }

    match (is_all_chosen_now, is_full_set_chosen_now) {
        (true, false) => available.to_vec(),
        (true, true) => Vec::new(),
        _ => next,
    }
}

/// Clicking a single option in the picker: adds it when absent, removes it
/// when present, then applies [`merge_selection`].
pub fn toggle_option<T: Selectable>(current: &[T], option: &T, available: &[T]) -> Vec<T> {
    let mut next: Vec<T> = current.to_vec();
    if let Some(pos) = next.iter().position(|item| item.id() == option.id()) {
        next.remove(pos);
    } else {
        next.push(option.clone());
    }
    merge_selection(current, next, available)
}

pub fn contains_sentinel<T: Selectable>(items: &[T]) -> bool {
    items.iter().any(|item| item.is_all())
}

/// Prepends the sentinel to a reference list
pub fn with_sentinel<T: Selectable>(items: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() + 1);
    out.push(T::sentinel());
    out.extend(items.iter().filter(|item| !item.is_all()).cloned());
    out
}

/// Selection without the sentinel entry
pub fn without_sentinel<T: Selectable>(items: &[T]) -> Vec<T> {
    items.iter().filter(|item| !item.is_all()).cloned().collect()
}

pub fn is_selected<T: Selectable>(items: &[T], option: &T) -> bool {
    items.iter().any(|item| item.id() == option.id())
}

/// How the chosen entries are shown inside the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipSummary {
    /// One chip per entry
    Each(Vec<String>),
    /// A single "N selected" chip, `title` lists every name
    Count { label: String, title: String },
}

const MAX_INLINE_CHIPS: usize = 2;

pub fn chip_summary<T: Selectable>(items: &[T]) -> ChipSummary {
    if items.len() > MAX_INLINE_CHIPS {
        ChipSummary::Count {
            label: format!("{} selected", items.len()),
            title: items
                .iter()
                .map(|item| item.name())
                .collect::<Vec<_>>()
                .join(", "),
        }
    } else {
        ChipSummary::Each(items.iter().map(|item| item.name().to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_campaign_report::dto::Campaign;

    fn campaigns() -> Vec<Campaign> {
        with_sentinel(&[
            Campaign::new(1, "Spring"),
            Campaign::new(2, "Summer"),
            Campaign::new(3, "Autumn"),
        ])
    }

    fn ids(items: &[Campaign]) -> Vec<String> {
        items.iter().map(|c| c.id.as_string()).collect()
    }

    #[test]
    fn test_plain_change_is_accepted() {
        let available = campaigns();
        let next = vec![available[1].clone(), available[2].clone()];
        let merged = merge_selection(&[], next.clone(), &available);
        assert_eq!(merged, next);
    }

    #[test]
    fn test_checking_all_expands_to_full_list() {
        let available = campaigns();
        let previous = vec![available[1].clone()];
        let next = vec![available[1].clone(), available[0].clone()];
        let merged = merge_selection(&previous, next, &available);
        assert_eq!(ids(&merged), vec!["all", "1", "2", "3"]);
    }

    #[test]
    fn test_unchecking_all_clears_everything() {
        let available = campaigns();
        let previous = available.clone();
        let next = available[1..].to_vec();
        assert!(merge_selection(&previous, next, &available).is_empty());
    }

    #[test]
    fn test_all_with_full_set_clears() {
        let available = campaigns();
        // Last missing campaign picked while "All" is already checked
        let previous = vec![available[0].clone(), available[1].clone(), available[2].clone()];
        let merged = merge_selection(&previous, available.clone(), &available);
        assert!(merged.is_empty());
    }

    #[test]
    fn test_double_toggle_from_partial_selection() {
        let available = campaigns();
        let start = vec![available[2].clone()];

        let once = toggle_option(&start, &available[0], &available);
        assert_eq!(ids(&once), vec!["all", "1", "2", "3"]);

        let twice = toggle_option(&once, &available[0], &available);
        assert!(twice.is_empty());
        assert_ne!(twice, start);
    }

    #[test]
    fn test_double_toggle_from_full_selection_restores_it() {
        let available = campaigns();
        let start = available.clone();

        let once = toggle_option(&start, &available[0], &available);
        assert!(once.is_empty());

        let twice = toggle_option(&once, &available[0], &available);
        assert_eq!(twice, start);
    }

    #[test]
    fn test_toggle_from_empty_alternates_between_empty_and_full() {
        let available = campaigns();
        let start: Vec<Campaign> = Vec::new();

        let once = toggle_option(&start, &available[0], &available);
        assert_eq!(once, available);
        let twice = toggle_option(&once, &available[0], &available);
        assert!(twice.is_empty());
        assert_eq!(twice, start);

        // Odd clicks land on the full list, even clicks on empty.
        let thrice = toggle_option(&twice, &available[0], &available);
        assert_eq!(thrice, once);
    }

    #[test]
    fn test_with_sentinel_does_not_duplicate() {
        let list = with_sentinel(&campaigns());
        assert_eq!(ids(&list), vec!["all", "1", "2", "3"]);
        assert_eq!(ids(&without_sentinel(&list)), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_chip_summary() {
        let available = campaigns();
        assert_eq!(
            chip_summary(&available[1..3]),
            ChipSummary::Each(vec!["Spring".into(), "Summer".into()])
        );
        assert_eq!(
            chip_summary(&available),
            ChipSummary::Count {
                label: "4 selected".into(),
                title: "All, Spring, Summer, Autumn".into(),
            }
        );
    }
}
