//! Result order: band first, then offset inside the band, then source order.

use super::common::{make_item, titles, SITE_ITEMS};
use search_widget::{filter_items, match_fields, normalize_value, rank_value, FilterOptions, RankBand};

#[test]
fn test_title_band_beats_description_band() {
    // "pricing" is Pricing's title and sits late in Careers' description.
    let results = filter_items(&SITE_ITEMS, "pricing", &FilterOptions::default());
    assert_eq!(titles(&results), vec!["Pricing", "Careers"]);
}

#[test]
fn test_description_band_beats_link_band() {
    let items = vec![
        make_item("One", "", "/widgets"),
        make_item("Two", "all about widgets", "/two"),
    ];
    let results = filter_items(&items, "widgets", &FilterOptions::default());
    assert_eq!(titles(&results), vec!["Two", "One"]);
}

#[test]
fn test_earlier_offset_wins_within_band() {
    let items = vec![
        make_item("The guide to search", "", "/a"),
        make_item("Search guide", "", "/b"),
    ];
    let results = filter_items(&items, "search", &FilterOptions::default());
    assert_eq!(titles(&results), vec!["Search guide", "The guide to search"]);
}

#[test]
fn test_best_field_decides_rank() {
    // Title match late in the title still beats a description match at 0.
    let items = vec![
        make_item("Other", "rust first", "/x"),
        make_item("All about rust", "", "/y"),
    ];
    let results = filter_items(&items, "rust", &FilterOptions::default());
    assert_eq!(titles(&results), vec!["All about rust", "Other"]);
}

#[test]
fn test_rank_values() {
    let item = make_item("Alpha beta", "beta", "/beta");
    let query = normalize_value("beta");
    let matches = match_fields(&item, &query, &FilterOptions::default());

    assert_eq!(matches.title, Some(6));
    assert_eq!(matches.description, Some(0));
    assert_eq!(matches.rank(), Some(rank_value(RankBand::Title, 6)));
    assert_eq!(matches.best().map(|(band, _)| band), Some(RankBand::Title));
}

#[test]
fn test_offsets_count_utf16_units() {
    // Accented letters are one unit each, not their UTF-8 byte length.
    let item = make_item("ééé match", "", "/m");
    let matches = match_fields(&item, "match", &FilterOptions::default());
    assert_eq!(matches.title, Some(4));

    // Emoji sit outside the BMP and count as two units each.
    let item = make_item("😀😀x", "", "/e");
    let matches = match_fields(&item, "x", &FilterOptions::default());
    assert_eq!(matches.title, Some(4));
}

#[test]
fn test_emoji_prefix_ranks_behind_shorter_ascii_prefix() {
    let items = vec![make_item("😀😀x", "", "/emoji"), make_item("abcx", "", "/ascii")];
    let results = filter_items(&items, "x", &FilterOptions::default());
    assert_eq!(titles(&results), vec!["abcx", "😀😀x"]);
}
