//! Report Integration Tests
//!
//! Runs every report over the sample catalog and checks the properties
//! that must hold for any catalog.

use std::collections::BTreeSet;

use vidcat::reports::{
    average_runtime, cast_overlap, long_running_series, most_viewed, Field, Notice,
};
use vidcat::{Catalog, Report, ReportKind, ReportSettings, Video};

fn shared_set(videos: &[Video]) -> BTreeSet<String> {
    cast_overlap(videos).actors.into_iter().collect()
}

#[test]
fn test_sample_most_viewed() {
    let catalog = Catalog::sample();
    let result = most_viewed(&catalog);

    assert_eq!(result.name.as_deref(), Some("Batman Begins"));
    assert_eq!(result.views, 17_319_533);
}

#[test]
fn test_sample_average_runtime() {
    let catalog = Catalog::sample();
    let result = average_runtime(&catalog, 2);

    assert_eq!(result.average_minutes, Some(106.0));
    assert_eq!(result.contributors, 3);

    let skipped: Vec<_> = result
        .notices
        .iter()
        .map(|n| match n {
            Notice::MissingField { name, field } => {
                assert_eq!(*field, Field::Runtime);
                name.as_str()
            }
            other => panic!("Unexpected notice: {:?}", other),
        })
        .collect();
    assert_eq!(skipped, vec!["Peaky Blinders", "The Umbrella Academy"]);
}

#[test]
fn test_sample_cast_overlap() {
    let catalog = Catalog::sample();
    let result = cast_overlap(&catalog);

    // Ellen Page shows up in Inception before Cillian Murphy in Batman Begins
    assert_eq!(result.actors, vec!["Ellen Page", "Cillian Murphy"]);
    assert!(result.notices.is_empty());
}

#[test]
fn test_sample_long_running() {
    let catalog = Catalog::sample();
    let result = long_running_series(&catalog, 3);

    assert_eq!(result.names, vec!["Peaky Blinders"]);
    assert_eq!(result.notices.len(), 3);
}

#[test]
fn test_cast_overlap_order_independent() {
    let catalog = Catalog::sample();
    let expected = shared_set(&catalog);

    let mut reversed = catalog.to_vec();
    reversed.reverse();
    assert_eq!(shared_set(&reversed), expected);

    for shift in 1..catalog.len() {
        let mut rotated = catalog.to_vec();
        rotated.rotate_left(shift);
        assert_eq!(shared_set(&rotated), expected);
    }

    // Idempotent
    assert_eq!(cast_overlap(&catalog), cast_overlap(&catalog));
}

#[test]
fn test_long_running_membership() {
    let videos = vec![
        Video::series("A", 1, ["x"], 1),
        Video::series("B", 1, ["x"], 4),
        Video::movie("C", 1, ["x"], 400),
        Video::plain("D", 1, ["x"]),
        Video::series("E", 1, ["x"], 3),
        Video::series("F", 1, ["x"], 12),
    ];

    let result = long_running_series(&videos, 3);
    for video in &videos {
        let expected = matches!(video.seasons(), Some(s) if s > 3);
        assert_eq!(result.names.contains(&video.name), expected, "{}", video.name);
    }
}

#[test]
fn test_most_viewed_is_maximum() {
    let videos = vec![
        Video::plain("A", 5, ["x"]),
        Video::series("B", 900, ["x"], 2),
        Video::movie("C", 12, ["x"], 90),
        Video::movie("D", 900, ["x"], 90),
    ];

    let result = most_viewed(&videos);
    let max = videos.iter().map(|v| v.views).max().unwrap();
    assert_eq!(result.views, max);
    assert_eq!(result.name.as_deref(), Some("B"));
}

#[test]
fn test_empty_catalog_is_not_fatal() {
    let catalog = Catalog::default();
    let reports = vidcat::reports::run_all(&catalog, &ReportSettings::default());

    assert_eq!(reports.len(), 4);
    for report in &reports {
        assert!(report.notices().is_empty());
    }

    match &reports[1] {
        Report::AverageRuntime(r) => assert_eq!(r.average_minutes, None),
        other => panic!("Expected average runtime, got {:?}", other.kind()),
    }
}

#[test]
fn test_report_text_for_sample() {
    let catalog = Catalog::sample();
    let settings = ReportSettings::default();
    let text: String = vidcat::reports::run_all(&catalog, &settings)
        .iter()
        .map(ToString::to_string)
        .collect();

    assert!(text.contains("\"Batman Begins\" with a total of 17319533 views"));
    assert!(text.contains("The average movie runtime is 106.00 minutes."));
    assert!(text.contains("Ellen Page, Cillian Murphy"));
    assert!(text.contains("Series with more than 3 seasons:\nPeaky Blinders\n"));
    assert!(text.contains("No season count information for \"Inception\"."));
}

#[test]
fn test_reports_serialize_to_json() {
    let catalog = Catalog::sample();
    let report = vidcat::reports::run(
        ReportKind::LongRunning,
        &catalog,
        &ReportSettings::default(),
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["report"], "long-running");
    assert_eq!(json["names"][0], "Peaky Blinders");
    assert_eq!(json["notices"][0]["notice"], "missing_field");
    assert_eq!(json["notices"][0]["field"], "seasons");
}
