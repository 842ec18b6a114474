use super::*;

#[test]
fn highlights_have_values_and_labels() {
    for (value, label) in HIGHLIGHTS {
        assert!(!value.is_empty());
        assert!(!label.is_empty());
    }
}

#[test]
fn feature_titles_are_distinct() {
    let mut titles: Vec<&str> = FEATURES.iter().map(|(title, _)| *title).collect();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), FEATURES.len());
}
