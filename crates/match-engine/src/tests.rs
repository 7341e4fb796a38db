//! Session Scenario Tests
//!
//! Full play-throughs against a headless surface.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    DropRejected, ElementRef, GameConfig, LineStyle, Pair, Point, Rect, RenderSurface, Session, Verdict,
};

/// Headless surface: fixed layout by name, records every stroke
#[derive(Default)]
struct RecordingSurface {
    container: Option<Rect>,
    items: HashMap<String, Rect>,
    slots: HashMap<String, Rect>,
    size: (f64, f64),
    segments: Vec<(Point, Point)>,
    resizes: usize,
}

impl RecordingSurface {
    /// Items stacked at x=0, slots at x=300, 100px rows in board order
    fn for_session(session: &Session) -> Self {
        let mut surface = Self {
            container: Some(Rect::new(0.0, 0.0, 400.0, 300.0)),
            ..Default::default()
        };
        surface.layout(session, 0.0);
        surface
    }

    fn layout(&mut self, session: &Session, shift_y: f64) {
        self.items.clear();
        self.slots.clear();
        for (row, item) in session.board().items.iter().enumerate() {
            self.items.insert(item.name.clone(), Rect::new(0.0, row as f64 * 100.0 + shift_y, 100.0, 50.0));
        }
        for (row, slot) in session.board().slots.iter().enumerate() {
            self.slots.insert(slot.name.clone(), Rect::new(300.0, row as f64 * 100.0 + shift_y, 100.0, 50.0));
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn container_rect(&self) -> Option<Rect> {
        self.container
    }

    fn element_rect(&self, element: ElementRef<'_>) -> Option<Rect> {
        match element {
            ElementRef::Item(name) => self.items.get(name).copied(),
            ElementRef::Slot(name) => self.slots.get(name).copied(),
        }
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.size = (width, height);
        self.resizes += 1;
        self.segments.clear();
    }

    fn clear(&mut self) {
        self.segments.clear();
    }

    fn stroke_line(&mut self, from: Point, to: Point, _style: &LineStyle) {
        self.segments.push((from, to));
    }
}

fn abc_session() -> Session {
    let config = GameConfig {
        pairs: vec![Pair::new("A", "1"), Pair::new("B", "2"), Pair::new("C", "3")],
        ..GameConfig::default()
    };
    let mut session = Session::new(config).expect("valid config");
    session.generate(&mut StdRng::seed_from_u64(11));
    session
}

fn connect(session: &mut Session, surface: &mut RecordingSurface, item: &str, slot: &str) -> Result<(), DropRejected> {
    session.begin_drag(item);
    session.drop_on(slot, surface).map(|_| ())
}

#[test]
fn test_board_sizes_match_catalog() {
    let mut session = Session::default();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..10 {
        session.generate(&mut rng);
        assert_eq!(session.board().items.len(), session.catalog().len());
        assert_eq!(session.board().slots.len(), session.catalog().len());
    }
}

#[test]
fn test_all_correct_in_any_order() {
    let mut session = abc_session();
    let mut surface = RecordingSurface::for_session(&session);

    connect(&mut session, &mut surface, "C", "3").unwrap();
    connect(&mut session, &mut surface, "A", "1").unwrap();
    connect(&mut session, &mut surface, "B", "2").unwrap();

    assert_eq!(surface.segments.len(), 3);
    assert_eq!(session.check_results(), Verdict::Success);
    assert!(!session.retry_visible());
    assert_eq!(session.result_message(), session.config().success_message);
}

#[test]
fn test_incomplete_board_fails_and_shows_retry() {
    let mut session = abc_session();
    let mut surface = RecordingSurface::for_session(&session);

    connect(&mut session, &mut surface, "A", "2").unwrap();
    connect(&mut session, &mut surface, "B", "1").unwrap();

    assert!(!session.check_results().is_success());
    assert!(session.retry_visible());
    assert_eq!(session.result_message(), session.config().failure_message);
}

#[test]
fn test_second_drop_for_same_item_rejected() {
    let mut session = abc_session();
    let mut surface = RecordingSurface::for_session(&session);

    connect(&mut session, &mut surface, "A", "1").unwrap();
    let second = connect(&mut session, &mut surface, "A", "2");

    assert_eq!(second, Err(DropRejected::ItemAlreadyConnected("A".to_string())));
    let pairs: Vec<(&str, &str)> = session
        .connections()
        .iter()
        .map(|c| (c.left.as_str(), c.right.as_str()))
        .collect();
    assert_eq!(pairs, vec![("A", "1")]);
    assert_eq!(surface.segments.len(), 1);
    assert!(session.drag().active_item().is_none());
}

#[test]
fn test_taken_slot_rejected() {
    let mut session = abc_session();
    let mut surface = RecordingSurface::for_session(&session);

    connect(&mut session, &mut surface, "A", "1").unwrap();
    assert_eq!(
        connect(&mut session, &mut surface, "B", "1"),
        Err(DropRejected::TargetAlreadyConnected("1".to_string()))
    );
    assert!(!session.is_item_connected("B"));
}

#[test]
fn test_drop_without_gesture_rejected() {
    let mut session = abc_session();
    let mut surface = RecordingSurface::for_session(&session);

    assert_eq!(session.drop_on("1", &mut surface).err(), Some(DropRejected::NoActiveItem));
    assert!(session.connections().is_empty());
}

#[test]
fn test_unknown_names_ignored() {
    let mut session = abc_session();
    let mut surface = RecordingSurface::for_session(&session);

    assert!(!session.begin_drag("Z"));
    assert!(session.drag().active_item().is_none());

    session.begin_drag("A");
    assert_eq!(
        session.drop_on("99", &mut surface).err(),
        Some(DropRejected::UnknownTarget("99".to_string()))
    );
    assert!(session.connections().is_empty());
}

#[test]
fn test_touch_lifted_outside_target_is_noop() {
    let mut session = abc_session();
    session.begin_drag("B");
    session.track_drag(Point::new(150.0, 75.0));
    assert_eq!(session.drag().pointer(), Some(Point::new(150.0, 75.0)));

    session.cancel_drag();
    assert!(session.drag().active_item().is_none());
    assert!(session.connections().is_empty());
}

#[test]
fn test_retry_clears_connections_and_surface() {
    let mut session = abc_session();
    let mut surface = RecordingSurface::for_session(&session);
    let generation = session.board().generation;

    connect(&mut session, &mut surface, "A", "2").unwrap();
    session.check_results();
    assert!(session.retry_visible());

    session.retry(&mut StdRng::seed_from_u64(99), &mut surface);
    assert!(session.connections().is_empty());
    assert!(surface.segments.is_empty());
    assert!(!session.retry_visible());
    assert!(session.verdict().is_none());
    assert_eq!(session.result_message(), "");
    assert_eq!(session.board().generation, generation + 1);
}

#[test]
fn test_resize_redraws_each_connection_at_new_positions() {
    let mut session = abc_session();
    let mut surface = RecordingSurface::for_session(&session);

    connect(&mut session, &mut surface, "A", "1").unwrap();
    connect(&mut session, &mut surface, "B", "3").unwrap();

    // Layout reflows: container grows, everything moves down 40px
    surface.container = Some(Rect::new(0.0, 0.0, 800.0, 600.0));
    surface.layout(&session, 40.0);

    let drawn = session.sync_surface(&mut surface);
    assert_eq!(drawn, 2);
    assert_eq!(surface.size, (800.0, 600.0));
    assert_eq!(surface.segments.len(), 2);

    let row_of = |name: &str, rows: &HashMap<String, Rect>| rows[name].center_y();
    let (start, end) = surface.segments[0];
    assert_eq!(start, Point::new(100.0, row_of("A", &surface.items)));
    assert_eq!(end, Point::new(300.0, row_of("1", &surface.slots)));
    assert!(start.y >= 65.0);
}

#[test]
fn test_unmounted_elements_are_skipped() {
    let mut session = abc_session();
    let mut surface = RecordingSurface::for_session(&session);

    connect(&mut session, &mut surface, "A", "1").unwrap();
    connect(&mut session, &mut surface, "B", "2").unwrap();
    surface.items.remove("B");

    assert_eq!(session.sync_surface(&mut surface), 1);
}

#[test]
fn test_lines_are_container_local() {
    let mut session = abc_session();
    let mut surface = RecordingSurface::for_session(&session);
    surface.container = Some(Rect::new(50.0, 20.0, 400.0, 300.0));

    connect(&mut session, &mut surface, "A", "1").unwrap();
    let item = surface.items["A"];
    let (start, _) = surface.segments[0];
    assert_eq!(start, Point::new(item.right() - 50.0, item.center_y() - 20.0));
}
