use dotfield_common::{InteractionMode, LayoutBox, Point, Theme};
use dotfield_config::FieldConfig;
use dotfield_platform::PointerHub;

use super::*;
use crate::canvas::{DrawCommand, PixelCanvas, RecordingCanvas};
use crate::dots::GridDims;

struct TestHost {
    layout: Option<LayoutBox>,
    dpr: f64,
}

impl TestHost {
    fn square(side: f64) -> Self {
        Self {
            layout: Some(LayoutBox {
                left: 0.0,
                top: 0.0,
                width: side,
                height: side,
            }),
            dpr: 1.0,
        }
    }
}

impl HostSurface for TestHost {
    fn layout_box(&self) -> Option<LayoutBox> {
        self.layout
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.dpr
    }
}

fn config(spacing: f64) -> FieldConfig {
    FieldConfig {
        spacing,
        ..FieldConfig::default()
    }
}

fn view(mode: InteractionMode) -> FieldView {
    FieldView::new(config(25.0), Theme::Dark, mode, PointerHub::new()).unwrap()
}

#[test]
fn invalid_config_is_rejected() {
    let result = FieldView::new(
        config(0.0),
        Theme::Dark,
        InteractionMode::Pointer,
        PointerHub::new(),
    );
    assert!(result.is_err());
}

#[test]
fn new_switches_hub_to_requested_mode() {
    let hub = PointerHub::new();
    let _view = FieldView::new(config(25.0), Theme::Light, InteractionMode::Hand, hub.clone())
        .unwrap();
    assert_eq!(hub.mode(), InteractionMode::Hand);
}

#[test]
fn first_accepted_frame_renders_the_full_grid() {
    let mut view = view(InteractionMode::Pointer);
    let host = TestHost::square(200.0);
    let mut canvas = RecordingCanvas::new();

    assert_eq!(view.frame(0.0, &host, &mut canvas), FrameOutcome::Skipped);
    assert!(canvas.commands().is_empty());

    assert_eq!(view.frame(12.0, &host, &mut canvas), FrameOutcome::Rendered);
    assert_eq!(view.field().dims(), GridDims { cols: 8, rows: 8 });
    assert_eq!(canvas.circles().count(), 64);
    assert_eq!(view.timer().rendered(), 1);
    assert_eq!(view.timer().skipped(), 1);
}

#[test]
fn frame_draws_clear_dots_then_edge_mask() {
    let mut view = view(InteractionMode::Pointer);
    let host = TestHost::square(200.0);
    let mut canvas = RecordingCanvas::new();
    view.frame(12.0, &host, &mut canvas);

    let cmds = canvas.commands();
    assert_eq!(
        cmds[0],
        DrawCommand::ResizeBacking {
            width: 200,
            height: 200
        }
    );
    assert_eq!(cmds[1], DrawCommand::SetTransform { scale: 1.0 });
    assert_eq!(
        cmds[2],
        DrawCommand::Clear {
            width: 200.0,
            height: 200.0
        }
    );
    assert_eq!(
        cmds[3],
        DrawCommand::SetComposite {
            op: CompositeOp::SourceOver
        }
    );
    assert_eq!(cmds.len(), 4 + 64 * 3 + 6);
    let tail = &cmds[cmds.len() - 6..];
    assert_eq!(
        tail[0],
        DrawCommand::SetComposite {
            op: CompositeOp::DestinationOut
        }
    );
    assert!(tail[1..5]
        .iter()
        .all(|c| matches!(c, DrawCommand::FillRectGradient { .. })));
}

#[test]
fn detached_surface_is_not_ready() {
    let mut view = view(InteractionMode::Pointer);
    let host = TestHost {
        layout: None,
        dpr: 1.0,
    };
    let mut canvas = RecordingCanvas::new();
    assert_eq!(view.frame(12.0, &host, &mut canvas), FrameOutcome::NotReady);
    assert!(view.field().dots().is_empty());
    assert!(canvas.commands().is_empty());
}

#[test]
fn high_dpr_scales_backing_store_only() {
    let mut view = view(InteractionMode::Pointer);
    let host = TestHost {
        dpr: 2.0,
        ..TestHost::square(200.0)
    };
    let mut canvas = RecordingCanvas::new();
    view.frame(12.0, &host, &mut canvas);
    assert_eq!(canvas.backing_size(), (400, 400));
    assert_eq!(view.field().dims(), GridDims { cols: 8, rows: 8 });
}

#[test]
fn size_change_rebuilds_grid() {
    let mut view = view(InteractionMode::Pointer);
    let mut host = TestHost::square(200.0);
    let mut canvas = RecordingCanvas::new();
    view.frame(12.0, &host, &mut canvas);

    host.layout = TestHost::square(100.0).layout;
    canvas.take();
    assert_eq!(view.frame(24.0, &host, &mut canvas), FrameOutcome::Rendered);
    assert_eq!(view.field().dims(), GridDims { cols: 4, rows: 4 });
    assert_eq!(canvas.circles().count(), 16);
}

#[test]
fn resize_notification_settles_running_transition() {
    let mut view = view(InteractionMode::Pointer);
    let host = TestHost::square(200.0);
    let mut canvas = RecordingCanvas::new();
    view.frame(12.0, &host, &mut canvas);

    view.set_mode(InteractionMode::Hand);
    assert!(view.field().is_transitioning());
    view.notify_resized();
    view.frame(24.0, &host, &mut canvas);
    assert!(!view.field().is_transitioning());
    assert_eq!(view.field().mode(), InteractionMode::Hand);
}

#[test]
fn mode_change_animates_over_frames() {
    let mut view = view(InteractionMode::Pointer);
    let host = TestHost::square(200.0);
    let mut canvas = RecordingCanvas::new();
    view.frame(12.0, &host, &mut canvas);

    view.set_mode(InteractionMode::Hand);
    view.frame(24.0, &host, &mut canvas);
    assert!(view.field().is_transitioning());
    let p = view.field().dots()[0].progress;
    assert!(p > 0.0 && p < 1.0, "progress {p}");

    let mut t = 24.0;
    while t < 700.0 {
        t += 12.0;
        view.frame(t, &host, &mut canvas);
    }
    assert!(!view.field().is_transitioning());
}

#[test]
fn mode_change_gates_cursor_producer() {
    let mut view = view(InteractionMode::Pointer);
    assert!(view.hub().submit_cursor(Point::new(5.0, 5.0)));
    view.set_mode(InteractionMode::Hand);
    assert!(!view.hub().submit_cursor(Point::new(6.0, 6.0)));
    assert!(view.hub().snapshot().is_empty());
}

#[test]
fn theme_change_rebuilds_settled_at_new_colors() {
    let mut view = view(InteractionMode::Pointer);
    let host = TestHost::square(200.0);
    let mut canvas = RecordingCanvas::new();
    view.frame(12.0, &host, &mut canvas);

    view.set_theme(Theme::Light);
    assert_eq!(view.theme(), Theme::Light);
    assert!(!view.field().is_transitioning());
    let (start, _) = view
        .config()
        .endpoints(Theme::Light, InteractionMode::Pointer);
    assert_eq!(view.field().dots()[0].current_color, start);
}

#[test]
fn cursor_near_dot_displaces_it() {
    let mut view = view(InteractionMode::Pointer);
    let host = TestHost::square(200.0);
    let mut canvas = RecordingCanvas::new();
    view.hub().submit_cursor(Point::new(60.0, 50.0));
    view.frame(12.0, &host, &mut canvas);

    let index = view
        .field()
        .dots()
        .iter()
        .position(|d| d.position == Point::new(50.0, 50.0))
        .unwrap();
    let (center, _, _) = canvas.circles().nth(index).unwrap();
    assert!(center.x < 50.0);
    assert_eq!(center.y, 50.0);
}

#[test]
fn replace_config_starts_new_session() {
    let mut view = view(InteractionMode::Pointer);
    let host = TestHost::square(200.0);
    let mut canvas = RecordingCanvas::new();
    view.frame(12.0, &host, &mut canvas);

    view.replace_config(config(50.0)).unwrap();
    assert_eq!(view.config().spacing, 50.0);
    assert_eq!(view.field().dims(), GridDims { cols: 4, rows: 4 });

    assert!(view.replace_config(config(-1.0)).is_err());
    assert_eq!(view.config().spacing, 50.0);
}

#[test]
fn teardown_stops_every_later_frame() {
    let mut view = view(InteractionMode::Pointer);
    let host = TestHost::square(200.0);
    let mut canvas = RecordingCanvas::new();
    view.teardown();
    view.teardown();
    assert!(!view.is_alive());
    assert_eq!(view.frame(12.0, &host, &mut canvas), FrameOutcome::Stopped);
    view.set_theme(Theme::Light);
    assert_eq!(view.theme(), Theme::Dark);
    assert!(canvas.commands().is_empty());
}

#[test]
fn pixel_canvas_edges_fade_center_stays_opaque() {
    let mut view = view(InteractionMode::Pointer);
    let host = TestHost::square(200.0);
    let mut canvas = PixelCanvas::new(1, 1);
    view.frame(12.0, &host, &mut canvas);

    assert_eq!((canvas.width(), canvas.height()), (200, 200));
    // Dot at (100, 100) sits outside every edge gradient
    assert!(canvas.alpha_at(100, 100) > 0.9);
    // Dot at (0, 0) is fully erased by the top and left masks
    assert!(canvas.alpha_at(0, 0) < 0.05);
}
