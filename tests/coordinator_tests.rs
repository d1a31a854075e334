mod common;
use common::{RecordingMap, RecordingSurface, sample_store, settings};
use rjournalview::config::MapConfig;
use rjournalview::core::Session;
use rjournalview::models::{MediaFilter, SurfaceClass, View};
use rjournalview::render::{TerminalMap, TerminalSurface};

fn session() -> Session<RecordingSurface, RecordingMap> {
    Session::new(
        sample_store(),
        settings(),
        SurfaceClass::Narrow,
        RecordingSurface::default(),
        RecordingMap::default(),
    )
}

#[test]
fn test_nothing_is_drawn_before_first_activation() {
    let mut s = session();
    s.start().expect("start");
    assert_eq!(s.current_view(), None);
    assert!(s.surface().calls.is_empty());
}

#[test]
fn test_activate_draws_each_view() {
    let mut s = session();

    assert!(s.activate(View::Timeline).expect("timeline"));
    assert!(s.activate(View::Calendar).expect("calendar"));
    assert!(s.activate(View::Media).expect("media"));
    assert!(s.activate(View::Map).expect("map"));

    assert_eq!(
        s.surface().calls,
        vec!["timeline:3:-", "calendar:3", "media:all:2/2", "map:2"]
    );
    assert_eq!(s.current_view(), Some(View::Map));
    assert_eq!(s.map().fits, 1);
}

#[test]
fn test_activate_twice_is_idempotent() {
    let mut s = session();

    for view in [View::Timeline, View::Calendar, View::Media] {
        s.activate(view).expect("first");
        let calls = s.surface().calls.len();

        assert!(!s.activate(view).expect("second"));
        assert_eq!(s.surface().calls.len(), calls);
        assert_eq!(s.current_view(), Some(view));
    }
}

#[test]
fn test_map_reactivation_refits_without_redraw() {
    let mut s = session();

    s.activate(View::Map).expect("map");
    assert!(!s.activate(View::Map).expect("map again"));
    assert!(!s.activate(View::Map).expect("map again"));

    assert_eq!(s.surface().count("map"), 1);
    assert_eq!(s.map().fits, 3);
}

#[test]
fn test_timeline_shows_current_selection() {
    let mut s = session();
    s.select("e2").expect("select");
    s.activate(View::Timeline).expect("timeline");
    assert_eq!(s.surface().calls.last().map(String::as_str), Some("timeline:3:e2"));
}

#[test]
fn test_select_while_timeline_visible_moves_marker() {
    let mut s = Session::new(
        sample_store(),
        settings(),
        SurfaceClass::Wide,
        RecordingSurface::default(),
        RecordingMap::default(),
    );
    s.start().expect("start");
    s.activate(View::Timeline).expect("timeline");

    s.select("e2").expect("select");
    assert_eq!(
        s.surface().calls,
        vec![
            "detail:e1:Panel",
            "timeline:3:e1",
            "detail:e2:Panel",
            "timeline:3:e2"
        ]
    );

    // same entry again: detail refreshed, marker already in place
    s.select("e2").expect("select");
    assert_eq!(s.surface().count("timeline"), 2);

    // unknown id changes nothing
    s.select("nonexistent-uuid").expect("select");
    assert_eq!(s.surface().count("timeline"), 2);
}

#[test]
fn test_select_while_other_view_visible_skips_timeline() {
    let mut s = session();
    s.activate(View::Calendar).expect("calendar");
    s.select("e2").expect("select");

    assert_eq!(s.surface().count("timeline"), 0);
    s.activate(View::Timeline).expect("timeline");
    assert_eq!(s.surface().calls.last().map(String::as_str), Some("timeline:3:e2"));
}

#[test]
fn test_widening_surface_marks_auto_selected_entry() {
    let mut s = session();
    s.start().expect("start");
    s.activate(View::Timeline).expect("timeline");

    s.set_surface(SurfaceClass::Wide).expect("resize");
    assert_eq!(
        s.surface().calls,
        vec!["timeline:3:-", "detail:e1:Panel", "timeline:3:e1"]
    );

    // narrowing keeps the selection, so the marker stays
    s.set_surface(SurfaceClass::Narrow).expect("resize");
    assert_eq!(s.surface().count("timeline"), 2);
}

#[test]
fn test_media_filter_redraws_only_visible_gallery() {
    let mut s = session();
    s.activate(View::Timeline).expect("timeline");

    // gallery hidden: filter stored, nothing drawn
    assert!(s.set_media_filter(MediaFilter::parse("video")).expect("filter"));
    assert_eq!(s.surface().count("media"), 0);

    s.activate(View::Media).expect("media");
    assert_eq!(s.surface().calls.last().map(String::as_str), Some("media:video:1/2"));

    assert!(s.set_media_filter(MediaFilter::parse("photo")).expect("filter"));
    assert_eq!(s.surface().calls.last().map(String::as_str), Some("media:photo:1/2"));

    // same filter again is a no-op
    assert!(!s.set_media_filter(MediaFilter::parse("photo")).expect("filter"));
    assert_eq!(s.surface().count("media"), 2);

    s.set_media_filter(MediaFilter::parse("all")).expect("filter");
    assert_eq!(s.surface().calls.last().map(String::as_str), Some("media:all:2/2"));
    assert_eq!(s.media_filter(), &MediaFilter::All);
}

#[test]
fn test_terminal_map_fits_and_clusters() {
    let cfg = MapConfig::default();
    let mut s = Session::new(
        sample_store(),
        settings(),
        SurfaceClass::Wide,
        TerminalSurface::new(Vec::new(), "Journal"),
        TerminalMap::new(Vec::new(), &cfg),
    );
    s.start().expect("start");

    let placed = s.map().viewport().expect("viewport");
    assert_eq!(placed.center, cfg.default_center);
    assert_eq!(placed.zoom, cfg.default_zoom);
    assert_eq!(s.map().fit_count(), 0);

    s.activate(View::Map).expect("map");
    s.activate(View::Map).expect("map again");
    assert_eq!(s.map().fit_count(), 2);

    let fitted = s.map().viewport().expect("viewport");
    assert!(fitted.zoom > cfg.default_zoom);
    assert!((fitted.center.0 - 21.35).abs() < 0.1);
    assert!((fitted.center.1 + 157.787).abs() < 0.1);

    let total: usize = s.map().clusters().iter().map(|c| c.len()).sum();
    assert_eq!(total, 2);
}

#[test]
fn test_terminal_map_without_markers_keeps_default_view() {
    let cfg = MapConfig::default();
    let mut s = Session::new(
        rjournalview::store::EntryStore::default(),
        settings(),
        SurfaceClass::Wide,
        TerminalSurface::new(Vec::new(), "Journal"),
        TerminalMap::new(Vec::new(), &cfg),
    );
    s.start().expect("start");
    s.activate(View::Map).expect("map");

    assert_eq!(s.map().fit_count(), 0);
    assert_eq!(s.map().viewport().map(|v| v.zoom), Some(cfg.default_zoom));
}

#[test]
fn test_terminal_surface_panel_holds_selection() {
    let mut s = Session::new(
        sample_store(),
        settings(),
        SurfaceClass::Wide,
        TerminalSurface::new(Vec::new(), "Journal"),
        TerminalMap::new(Vec::new(), &MapConfig::default()),
    );
    s.start().expect("start");

    let panel = s.surface().panel().expect("panel");
    assert_eq!(panel.uuid, "e1");
    assert!(s.surface_mut().print_panel().expect("print"));
}
