// End-to-end session: load boundary and metrics from disk, click, explore, close.

use std::io::Write;

use choroselect::{
    AppConfig, AppController, Event, FileBoundarySource, FileMetricSource, FilterCommand, FilterOperator,
    MetricQuery, RecordingEmbed, RegionId, Rgb,
};
use tempfile::NamedTempFile;

const BOUNDARY: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        { "type": "Feature", "properties": { "name": "Texas" }, "geometry": { "type": "Polygon", "coordinates": [] } },
        { "type": "Feature", "properties": { "name": "Ohio" }, "geometry": { "type": "Polygon", "coordinates": [] } },
        { "type": "Feature", "properties": { "name": "Maine" }, "geometry": null }
    ]
}"#;

const METRICS: &str = r#"{ "columns": ["name", "total"], "rows": [["Texas", 500], ["Ohio", 100]] }"#;

const CONFIG: &str = r#"{
    "boundary": { "url": "unused.geojson" },
    "metrics": { "endpoint": "unused.json", "query": "SELECT name, total FROM t", "dataset": "t" },
    "filter_field": "State"
}"#;

fn temp_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn loaded() -> AppController<RecordingEmbed> {
    let config = AppConfig::from_json_str(CONFIG).unwrap();
    let boundary = temp_with(BOUNDARY);
    let metrics = temp_with(METRICS);

    let mut app = AppController::from_config(&config, RecordingEmbed::ready());
    app.load(
        &FileBoundarySource::new(boundary.path()),
        &FileMetricSource::new(metrics.path()),
        &MetricQuery::from(&config.metrics),
    );
    app
}

fn update(values: &[&str]) -> FilterCommand {
    FilterCommand::UpdateFilter {
        field: "State".into(),
        operator: FilterOperator::In,
        values: values.iter().map(|&v| RegionId::from(v)).collect(),
    }
}

#[test]
fn texas_ohio_click_then_close() {
    let mut app = loaded();
    let palette = choroselect::Palette::default();

    app.handle(Event::RegionClicked("Texas".into()));
    assert_eq!(app.selection().list(), &[RegionId::from("Texas")]);
    assert_eq!(app.selection_label(), "Texas");
    assert!(app.explore_visible());

    assert_eq!(app.style_for(&"Texas".into()).fill_color, palette.selected);
    assert_eq!(app.style_for(&"Ohio".into()).fill_color, Rgb::new(128, 255, 255));
    assert_eq!(app.style_for(&"Maine".into()).fill_color, palette.no_data);

    app.handle(Event::CloseClicked);
    assert!(app.selection().is_empty());
    assert!(!app.explore_visible());
    assert_eq!(app.embed().commands, vec![update(&[])]);

    // Texas is back on the data scale once deselected.
    assert_eq!(app.style_for(&"Texas".into()).fill_color, Rgb::new(255, 64, 26));
}

#[test]
fn styles_cover_every_region_in_order() {
    let mut app = loaded();
    app.handle(Event::RegionClicked("Ohio".into()));

    let styles = app.styles();
    let names = styles.iter().map(|(id, _)| id.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Texas", "Ohio", "Maine"]);
    assert_eq!(styles[1].1.fill_color, choroselect::Palette::default().selected);
}

#[test]
fn explore_and_close_round_trip() {
    let mut app = loaded();
    for name in ["Texas", "Ohio"] {
        app.handle(Event::RegionClicked(name.into()));
    }
    app.handle(Event::ExploreClicked);
    assert!(app.panel_raised());
    assert!(app.embed().foreground);

    app.handle(Event::CloseClicked);
    assert!(!app.panel_raised());
    assert_eq!(app.embed().commands, vec![update(&["Texas", "Ohio"]), update(&[])]);
}
