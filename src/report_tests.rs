use crate::discogs::Listing;
use crate::report::Reporter;

fn listing(id: u64, title: &str) -> Listing {
    Listing {
        listing_id: id,
        release_id: id * 10,
        title: title.to_string(),
        artist: "Some Artist".to_string(),
        price: "15.00 EUR".to_string(),
        condition: "Near Mint (NM or M-)".to_string(),
        listing_url: format!("https://www.discogs.com/sell/item/{id}"),
    }
}

#[test]
fn empty_report_only_has_count_line() {
    let reporter = Reporter::new();
    assert!(reporter.is_empty());
    assert_eq!(reporter.format_report(), "Total vinyl-only listings: 0\n");
}

#[test]
fn report_lists_fields_in_fixed_order() {
    let mut reporter = Reporter::new();
    reporter.push(listing(1, "First Record"));

    let expected = "\
[1]
Title:     First Record
Artist:    Some Artist
Price:     15.00 EUR
Condition: Near Mint (NM or M-)
URL:       https://www.discogs.com/sell/item/1

Total vinyl-only listings: 1
";
    assert_eq!(reporter.format_report(), expected);
}

#[test]
fn results_keep_discovery_order() {
    let mut reporter = Reporter::new();
    reporter.push(listing(3, "C"));
    reporter.push(listing(1, "A"));
    reporter.push(listing(2, "B"));

    let ids: Vec<u64> = reporter.results().iter().map(|r| r.listing.listing_id).collect();
    assert_eq!(ids, vec![3, 1, 2]);

    let report = reporter.format_report();
    let c = report.find("Title:     C").unwrap();
    let a = report.find("Title:     A").unwrap();
    let b = report.find("Title:     B").unwrap();
    assert!(c < a && a < b);
    assert!(report.ends_with("Total vinyl-only listings: 3\n"));
}
