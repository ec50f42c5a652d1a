//! End-to-end planning scenarios driven through the planner's inbound events

use std::time::{Duration, Instant};

use approx::assert_abs_diff_eq;
use siteplan_core::{
    GeoPoint, IgnoreReason, PlanError, PlanningSink, PlanningUpdate, RecordingSink, SinkEvent,
    StepKind, distance_meters,
};
use siteplan_frontend::persistence::JsonFileSink;
use siteplan_frontend::state::{ClickOutcome, InputMode, PlannerSettings, SitePlanner};
use siteplan_renderer::{LayerId, RecordingRenderer, RenderCommand};

const BOUNDARY: [GeoPoint; 4] = [
    GeoPoint::new(51.50, -0.13),
    GeoPoint::new(51.501, -0.13),
    GeoPoint::new(51.501, -0.131),
    GeoPoint::new(51.50, -0.131),
];

const SUBSTATION: GeoPoint = GeoPoint::new(51.4995, -0.1295);

const ROUTE: [GeoPoint; 3] = [
    GeoPoint::new(51.4995, -0.1295),
    GeoPoint::new(51.4990, -0.1290),
    GeoPoint::new(51.4985, -0.1280),
];

fn planner_with<S: PlanningSink>(sink: S) -> SitePlanner<RecordingRenderer, S> {
    SitePlanner::new(RecordingRenderer::new(), sink, PlannerSettings::default())
}

fn draw_all<S: PlanningSink>(planner: &mut SitePlanner<RecordingRenderer, S>) {
    for p in BOUNDARY {
        planner.on_map_click(p).unwrap();
    }
    planner.on_map_click(SUBSTATION).unwrap();
    for p in ROUTE {
        planner.on_map_click(p).unwrap();
    }
}

#[test]
fn test_full_planning_flow() {
    let mut planner = planner_with(RecordingSink::new());
    draw_all(&mut planner);

    assert_eq!(planner.steps().active(), Some(StepKind::Save));
    assert_eq!(planner.mode(), InputMode::Save);
    assert!(planner.renderer().is_pannable());

    let completions: Vec<_> = planner.sink().completions().map(|(s, _)| s).collect();
    assert_eq!(
        completions,
        vec![StepKind::Boundary, StepKind::Substation, StepKind::Route]
    );
    assert_eq!(
        planner.renderer().notices().last().map(String::as_str),
        Some("All drawing steps completed! Ready to save.")
    );

    planner.on_save().unwrap();
    let saved: Vec<_> = planner.sink().saves().collect();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].site_boundary, BOUNDARY.to_vec());
    assert_eq!(saved[0].substation_premise, Some(SUBSTATION));
    assert_eq!(saved[0].cable_route, ROUTE.to_vec());
    assert!(planner.steps().is_finished());
    assert_eq!(
        planner.renderer().notices().last().map(String::as_str),
        Some("Drawing saved")
    );
}

#[test]
fn test_boundary_scenario_emits_four_points() {
    let mut planner = planner_with(RecordingSink::new());
    let outcomes: Vec<_> = BOUNDARY
        .iter()
        .map(|p| planner.on_map_click(*p).unwrap())
        .collect();

    assert_eq!(
        outcomes[..3],
        [
            ClickOutcome::Accumulated {
                step: StepKind::Boundary,
                count: 1
            },
            ClickOutcome::Accumulated {
                step: StepKind::Boundary,
                count: 2
            },
            ClickOutcome::Accumulated {
                step: StepKind::Boundary,
                count: 3
            },
        ]
    );
    assert_eq!(planner.sink().completions().count(), 1);
    assert_eq!(
        planner.sink().events()[0],
        SinkEvent::StepCompleted(
            StepKind::Boundary,
            PlanningUpdate::SiteBoundary(BOUNDARY.to_vec())
        )
    );
    assert_eq!(planner.data().site_boundary.len(), 4);
    assert!(planner.steps().step(StepKind::Boundary).completed);
    assert!(!planner.steps().step(StepKind::Boundary).active);
    assert!(planner.steps().step(StepKind::Substation).active);
}

#[test]
fn test_substation_single_click_scenario() {
    let mut planner = planner_with(RecordingSink::new());
    planner.on_step_selected(2).unwrap();

    let outcome = planner.on_map_click(SUBSTATION).unwrap();
    assert_eq!(
        outcome,
        ClickOutcome::Completed {
            step: StepKind::Substation,
            next: Some(StepKind::Route)
        }
    );
    assert_eq!(planner.data().substation_premise, Some(SUBSTATION));
    assert_eq!(planner.steps().step(StepKind::Substation).count(), Some("1/1"));

    let footprint = planner.data().substation_bounds().unwrap();
    assert_abs_diff_eq!(footprint.width_meters(), 5.0, epsilon = 1e-6);
    assert_abs_diff_eq!(footprint.height_meters(), 4.0, epsilon = 1e-6);
    assert_abs_diff_eq!(footprint.center().latitude, SUBSTATION.latitude, epsilon = 1e-12);

    assert!(planner.renderer().layer(LayerId::Substation).contains(&RenderCommand::Rectangle {
        layer: LayerId::Substation,
        center: SUBSTATION,
        width_meters: 5.0,
        height_meters: 4.0,
    }));
}

#[test]
fn test_route_completes_on_third_point() {
    let mut planner = planner_with(RecordingSink::new());
    planner.on_step_selected(3).unwrap();

    for p in &ROUTE[..2] {
        assert!(matches!(
            planner.on_map_click(*p),
            Ok(ClickOutcome::Accumulated { .. })
        ));
    }
    assert_eq!(planner.sink().completions().count(), 0);

    planner.on_map_click(ROUTE[2]).unwrap();
    let (step, update) = planner.sink().completions().next().unwrap();
    assert_eq!(step, StepKind::Route);
    assert_eq!(update.point_count(), 3);
    assert!(matches!(
        planner.renderer().layer(LayerId::CableRoute),
        [RenderCommand::Polyline(_, pts), ..] if pts.len() == 3
    ));
}

#[test]
fn test_jump_ahead_leaves_earlier_steps_untouched() {
    let mut planner = planner_with(RecordingSink::new());
    planner.on_step_selected(3).unwrap();

    let step1 = planner.steps().step(StepKind::Boundary);
    assert!(!step1.active);
    assert!(!step1.completed);
    assert_eq!(planner.steps().active(), Some(StepKind::Route));
    assert_eq!(planner.mode(), InputMode::RouteDraw);
}

#[test]
fn test_undo_on_first_step_keeps_it_active() {
    let mut planner = planner_with(RecordingSink::new());
    for p in BOUNDARY {
        planner.on_map_click(p).unwrap();
    }
    planner.on_step_selected(1).unwrap();

    planner.on_undo();
    assert_eq!(planner.steps().active(), Some(StepKind::Boundary));
    assert!(planner.data().site_boundary.is_empty());
    assert!(planner.renderer().layer(LayerId::SiteBoundary).is_empty());

    // Nothing left to clear; still on step 1
    planner.on_undo();
    assert_eq!(planner.steps().active(), Some(StepKind::Boundary));
}

#[test]
fn test_redo_does_not_restore_geometry() {
    let mut planner = planner_with(RecordingSink::new());
    draw_all(&mut planner);
    planner.on_step_selected(3).unwrap();

    planner.on_undo();
    assert!(planner.data().cable_route.is_empty());
    assert_eq!(planner.steps().active(), Some(StepKind::Substation));

    planner.on_redo();
    assert_eq!(planner.steps().active(), Some(StepKind::Route));
    assert!(planner.data().cable_route.is_empty());
    assert!(!planner.steps().step(StepKind::Route).completed);

    planner.on_redo();
    planner.on_redo();
    assert_eq!(planner.steps().active(), Some(StepKind::Save));
}

#[test]
fn test_rapid_secondary_clicks_extend_suspension() {
    let mut planner = planner_with(RecordingSink::new());
    let delay = planner.settings().pan_resume_delay;
    let t0 = Instant::now();

    assert!(planner.on_secondary_click(t0));
    assert!(planner.on_secondary_click(t0 + Duration::from_millis(60)));

    // The first resume would have fired here
    assert!(!planner.tick(t0 + delay));
    assert_eq!(
        planner.on_map_click(BOUNDARY[0]),
        Err(PlanError::InputIgnored(IgnoreReason::PanSuspended))
    );

    assert!(planner.tick(t0 + Duration::from_millis(60) + delay));
    assert!(!planner.renderer().is_pannable());
    assert!(planner.on_map_click(BOUNDARY[0]).is_ok());
}

#[test]
fn test_step_change_abandons_uncommitted_points() {
    let mut planner = planner_with(RecordingSink::new());
    planner.on_map_click(BOUNDARY[0]).unwrap();
    planner.on_map_click(BOUNDARY[1]).unwrap();

    planner.on_step_selected(2).unwrap();
    assert!(planner.drawing().points().is_empty());
    assert!(planner.data().site_boundary.is_empty());
    assert!(planner.renderer().layer(LayerId::SiteBoundary).is_empty());
    assert!(planner.renderer().layer(LayerId::DrawingPoints).is_empty());
    assert!(planner.sink().events().is_empty());
}

#[test]
fn test_distance_labels_match_geometry() {
    let mut planner = planner_with(RecordingSink::new());
    planner.on_map_click(BOUNDARY[0]).unwrap();
    planner.on_map_click(BOUNDARY[1]).unwrap();

    let expected = format!("{:.1}m", distance_meters(BOUNDARY[0], BOUNDARY[1]));
    assert!(matches!(
        planner.renderer().layer(LayerId::DistanceLabels),
        [RenderCommand::DistanceLabel(_, _, text)] if *text == expected
    ));
}

#[test]
fn test_json_sink_round_trip_restores_progress() {
    let dir = std::env::temp_dir().join(format!("siteplan-scenario-{}", uuid::Uuid::new_v4()));
    let path = {
        let mut planner = planner_with(JsonFileSink::new(&dir));
        for p in BOUNDARY {
            planner.on_map_click(p).unwrap();
        }
        planner.on_map_click(SUBSTATION).unwrap();
        planner.sink().path().to_path_buf()
    };

    let (sink, data) = JsonFileSink::resume(&path).unwrap();
    let planner = SitePlanner::restore(data, RecordingRenderer::new(), sink, PlannerSettings::default());
    assert_eq!(planner.steps().active(), Some(StepKind::Route));
    assert!(planner.steps().step(StepKind::Boundary).completed);
    assert!(planner.steps().step(StepKind::Substation).completed);
    assert_eq!(planner.data().site_boundary, BOUNDARY.to_vec());

    let _ = std::fs::remove_dir_all(dir);
}
