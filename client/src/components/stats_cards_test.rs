use super::*;

#[test]
fn format_count_small_values_unchanged() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
}

#[test]
fn format_count_groups_thousands() {
    assert_eq!(format_count(2450), "2,450");
    assert_eq!(format_count(15_000), "15,000");
}

#[test]
fn format_count_groups_millions() {
    assert_eq!(format_count(2_500_000), "2,500,000");
}
