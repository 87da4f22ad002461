use chrono::Datelike;
use timeline_rs::api::{InvalidationLevel, InvalidationTopic};
use timeline_rs::core::{TickLabel, TickScale, Viewport, civil_date};
use timeline_rs::render::NullViewHost;
use timeline_rs::{TimelineEngine, TimelineEngineConfig};

// Day width at zoom 40 with the default factor is ~10.3 px.
const DAY_ZOOM: f64 = 40.0;

fn build_engine() -> TimelineEngine<NullViewHost> {
    let config = TimelineEngineConfig::new(Viewport::new(1000, 80)).with_zoom_level(DAY_ZOOM);
    let mut engine = TimelineEngine::new(NullViewHost::default(), config).expect("engine init");
    engine
        .add_tick_scale(TickScale::months().with_zoom_range(0.0, 80.0))
        .expect("months");
    engine
        .add_tick_scale(TickScale::days().with_zoom_range(30.0, 100.0))
        .expect("days");
    engine
        .move_to_date(civil_date(2022, 8, 20).expect("date"))
        .expect("move");
    engine
}

#[test]
fn first_frame_renders_every_visible_scale() {
    let mut engine = build_engine();
    assert!(engine.render_if_invalidated().expect("frame"));

    assert_eq!(engine.should_render("months"), Some(true));
    assert_eq!(engine.should_render("days"), Some(true));
    let days = engine.rendered_items("days");
    assert!(days.len() >= 97, "got {} day ticks", days.len());
    assert_eq!(
        engine.host().live_count(),
        days.len() + engine.rendered_items("months").len()
    );
    assert!(!engine.has_pending_invalidation());
}

#[test]
fn camera_motion_is_batched_until_the_next_frame() {
    let mut engine = build_engine();
    engine.render().expect("frame");
    let before = engine.host().created;

    for _ in 0..20 {
        engine.move_by(5.0).expect("pan");
    }
    assert_eq!(engine.host().created, before);
    assert_eq!(
        engine.pending_invalidation().level(),
        InvalidationLevel::Light
    );
    assert!(engine.has_pending_invalidation_topic(InvalidationTopic::Camera));

    assert!(engine.render_if_invalidated().expect("frame"));
    assert!(!engine.render_if_invalidated().expect("idle frame"));
}

#[test]
fn panning_recycles_views_at_the_edges_only() {
    let mut engine = build_engine();
    engine.render().expect("frame");
    let day_width = engine.day_width();
    let before = engine.rendered_items("days");
    engine.host_mut().reset_counters();

    engine.move_by(day_width * 3.0).expect("pan three days");
    engine.render().expect("frame");

    let stats = engine.last_reconcile_stats("days").expect("days stats");
    assert_eq!(stats.created, 3);
    assert_eq!(stats.destroyed, 3);
    assert_eq!(stats.updated, before.len() - 3);
    assert!(!stats.replaced_all);
    assert_eq!(engine.host().stale_ops, 0);
}

#[test]
fn idle_frame_creates_and_destroys_nothing() {
    let mut engine = build_engine();
    engine.render().expect("frame");
    engine.host_mut().reset_counters();

    engine.render().expect("forced frame");

    assert_eq!(engine.host().created, 0);
    assert_eq!(engine.host().destroyed, 0);
}

#[test]
fn leaving_the_zoom_range_unrenders_the_scale() {
    let mut engine = build_engine();
    engine.render().expect("frame");
    let day_views = engine.host().live_count_for("days");
    assert!(day_views > 0);

    engine.zoom_on_position(engine.view_center(), -15.0).expect("zoom out");
    engine.render().expect("frame");

    assert_eq!(engine.should_render("days"), Some(false));
    assert_eq!(engine.host().live_count_for("days"), 0);
    assert!(engine.rendered_items("days").is_empty());
    assert_eq!(engine.should_render("months"), Some(true));
    assert_eq!(engine.last_reconcile_stats("days").expect("stats").destroyed, day_views);
}

#[test]
fn zoom_on_keeps_the_focal_tick_in_place() {
    let mut engine = build_engine();
    engine.render().expect("frame");
    let offset_x = 300.0;
    let bounds = engine.view_bounds();
    let focal_date = engine.position_to_date(bounds.left + offset_x);

    engine.zoom_on_screen_offset(offset_x, 2.5).expect("zoom");
    engine.render().expect("frame");

    let after = engine.view_bounds();
    let focal_px = engine.date_to_position(focal_date) - after.left;
    assert!((focal_px - offset_x).abs() <= 1e-6);
}

#[test]
fn unlaid_out_viewport_renders_nothing_until_resized() {
    let config = TimelineEngineConfig::default().with_zoom_level(DAY_ZOOM);
    let mut engine = TimelineEngine::new(NullViewHost::default(), config).expect("engine init");
    engine.add_tick_scale(TickScale::days()).expect("days");

    engine.render().expect("frame");
    assert_eq!(engine.host().created, 0);
    assert_eq!(engine.should_render("days"), Some(false));
    assert!(engine.tick_scale_error("days").is_none());

    engine.set_viewport(Viewport::new(500, 40));
    assert!(engine.render_if_invalidated().expect("frame"));
    assert!(engine.host().created > 0);
}

#[test]
fn label_change_updates_views_immediately() {
    let mut engine = build_engine();
    engine.render().expect("frame");
    let count = engine.rendered_items("months").len();
    engine.host_mut().reset_counters();

    engine
        .set_tick_scale_label("months", |date| {
            TickLabel::Text(format!("{}/{}", date.month(), date.year()))
        })
        .expect("label");

    assert_eq!(engine.host().created, 0);
    assert_eq!(engine.host().updated, count);
    let views = engine.rendered_ticks("months").expect("months");
    assert!(views
        .iter()
        .all(|view| matches!(view.context().label, TickLabel::Text(_))));
    assert!(!engine.has_pending_invalidation());
}

#[test]
fn failing_scale_is_isolated_and_reported() {
    let mut engine = build_engine();
    engine
        .add_tick_scale(TickScale::new("broken").with_zoom_range(0.0, 100.0))
        .expect("broken scale registers");

    engine.render().expect("frame still succeeds");

    let error = engine.tick_scale_error("broken").expect("error recorded");
    assert!(error.contains("broken"));
    assert!(!engine.rendered_items("days").is_empty());
    assert!(engine.refresh_tick_scale("broken").is_err());
}

#[test]
fn removing_a_scale_destroys_its_views() {
    let mut engine = build_engine();
    engine.render().expect("frame");
    let live = engine.host().live_count_for("months");

    assert_eq!(engine.remove_tick_scale("months").expect("remove"), live);
    assert_eq!(engine.host().live_count_for("months"), 0);
    assert_eq!(engine.tick_scale_ids(), vec!["days"]);
}

#[test]
fn buffer_change_is_applied_on_the_next_frame() {
    let mut engine = build_engine();
    engine.render().expect("frame");
    let before = engine.rendered_items("days").len();

    engine.set_virtualization_buffer(0.0).expect("buffer");
    assert!(engine.has_pending_invalidation_topic(InvalidationTopic::Config));
    engine.render().expect("frame");

    let after = engine.rendered_items("days").len();
    assert!(after < before);
    assert!(after >= 97);
}

#[test]
fn camera_only_frame_leaves_parked_scales_alone() {
    let mut engine = build_engine();
    engine
        .add_tick_scale(TickScale::new("broken").with_zoom_range(0.0, 45.0))
        .expect("broken scale registers");
    engine.render().expect("full frame");
    assert!(engine.tick_scale_error("broken").is_some());

    engine.zoom_by(10.0).expect("zoom past the broken scale");
    assert_eq!(engine.pending_invalidation().level(), InvalidationLevel::Light);
    assert!(engine.render_if_invalidated().expect("light frame"));
    assert!(engine.tick_scale_error("broken").is_some());
    assert_eq!(engine.should_render("broken"), Some(false));

    engine.set_viewport(Viewport::new(1000, 90));
    assert_eq!(engine.pending_invalidation().level(), InvalidationLevel::Full);
    engine.render().expect("full frame");
    assert!(engine.tick_scale_error("broken").is_none());
    assert!(!engine.rendered_items("days").is_empty());
}

#[test]
fn dense_preset_stays_hidden_at_low_zoom() {
    let config = TimelineEngineConfig::new(Viewport::new(800, 60)).with_zoom_level(0.0);
    let mut engine = TimelineEngine::new(NullViewHost::default(), config).expect("engine init");
    engine.add_tick_scale(TickScale::seconds()).expect("seconds");
    engine.add_tick_scale(TickScale::months()).expect("months");

    engine.render().expect("frame");

    assert_eq!(engine.should_render("seconds"), Some(false));
    assert!(engine.tick_scale_error("seconds").is_none());
    assert_eq!(engine.host().live_count_for("seconds"), 0);
    assert_eq!(engine.should_render("months"), Some(true));
}
