use super::*;

// =============================================================
// Cell formatting
// =============================================================

#[test]
fn date_cell_takes_the_date_part() {
    assert_eq!(date_cell(Some("2024-03-05T12:34:56.000Z")), "2024-03-05");
}

#[test]
fn date_cell_passes_short_values_through() {
    assert_eq!(date_cell(Some("2024-03-05")), "2024-03-05");
}

#[test]
fn date_cell_renders_missing_values_empty() {
    assert_eq!(date_cell(None), "");
}

#[test]
fn status_labels() {
    assert_eq!(status_label(true), "active");
    assert_eq!(status_label(false), "blocked");
}

// =============================================================
// Pagination label
// =============================================================

#[test]
fn range_label_is_one_based() {
    assert_eq!(range_label(0, 5, 13), "1\u{2013}5 of 13");
    assert_eq!(range_label(10, 13, 13), "11\u{2013}13 of 13");
}

#[test]
fn range_label_for_no_rows() {
    assert_eq!(range_label(0, 0, 0), "0\u{2013}0 of 0");
}
