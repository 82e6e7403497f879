use line_sketch::raster::WHITE;
use line_sketch::{Command, DrawOp, EditorConfig, EditorState, Line, PixelBuffer, Point, Renderer};

fn run(state: &mut EditorState, commands: &[Command]) -> Vec<DrawOp> {
    commands.iter().flat_map(|&command| state.apply(command)).collect()
}

fn stroke(from: (i32, i32), to: (i32, i32)) -> [Command; 2] {
    [Command::BeginStroke(from.into()), Command::EndStroke(to.into())]
}

#[test]
fn test_polygon_mode_round_trip_commits_edges() {
    let mut state = EditorState::default();
    state.apply(Command::TogglePolygonMode);
    run(&mut state, &stroke((0, 0), (10, 0)));
    run(&mut state, &stroke((30, 30), (10, 10)));
    assert!(state.canvas().is_empty());

    let ops = state.apply(Command::TogglePolygonMode);
    assert!(!state.is_polygon_mode());
    assert_eq!(ops, vec![DrawOp::Clear, DrawOp::RasterizeCanvas]);
    assert_eq!(
        state.canvas().lines(),
        &[
            Line::new(Point::new(0, 0), Point::new(10, 0), false),
            Line::new(Point::new(10, 0), Point::new(10, 10), false),
            Line::new(Point::new(10, 10), Point::new(0, 0), false),
        ]
    );
}

#[test]
fn test_polygon_edges_take_dotted_flag_at_finalize() {
    let mut state = EditorState::default();
    state.apply(Command::TogglePolygonMode);
    run(&mut state, &stroke((0, 0), (10, 0)));
    run(&mut state, &stroke((30, 30), (10, 10)));
    state.apply(Command::ToggleDotted(true));
    state.apply(Command::TogglePolygonMode);

    assert_eq!(state.canvas().len(), 3);
    assert!(state.canvas().lines().iter().all(Line::is_dotted));
}

#[test]
fn test_short_polygon_is_discarded() {
    let mut state = EditorState::default();
    state.apply(Command::TogglePolygonMode);
    run(&mut state, &stroke((0, 0), (10, 0)));
    state.apply(Command::TogglePolygonMode);
    assert!(state.canvas().is_empty());
}

#[test]
fn test_polygon_motion_previews_edges_and_closure() {
    let mut state = EditorState::default();
    state.apply(Command::TogglePolygonMode);
    run(&mut state, &stroke((0, 0), (10, 0)));

    let ops = run(
        &mut state,
        &[Command::BeginStroke(Point::new(40, 40)), Command::UpdateStroke(Point::new(10, 10))],
    );
    assert_eq!(
        ops,
        vec![
            DrawOp::Clear,
            DrawOp::RasterizeCanvas,
            DrawOp::RasterizeLine(Line::new(Point::new(0, 0), Point::new(10, 0), false)),
            DrawOp::RasterizeLine(Line::new(Point::new(10, 0), Point::new(10, 10), false)),
            DrawOp::RasterizeLine(Line::new(Point::new(10, 10), Point::new(0, 0), false)),
        ]
    );
}

#[test]
fn test_snap_constrains_line_end() {
    let mut state = EditorState::default();
    state.apply(Command::ToggleSnap(true));
    run(&mut state, &stroke((0, 0), (20, 3)));
    assert_eq!(state.canvas().lines(), &[Line::new(Point::new(0, 0), Point::new(20, 0), false)]);
}

#[test]
fn test_snap_constrains_polygon_vertices() {
    let mut state = EditorState::default();
    state.apply(Command::ToggleSnap(true));
    state.apply(Command::TogglePolygonMode);
    run(&mut state, &stroke((0, 0), (20, 2)));
    run(&mut state, &stroke((40, 40), (41, 60)));

    let vertices = state.tool().as_polygon().map(|p| p.vertices().to_vec());
    assert_eq!(
        vertices,
        Some(vec![Point::new(0, 0), Point::new(20, 0), Point::new(40, 60)])
    );

    // The moving preview end is snapped against the press point too.
    let ops = run(
        &mut state,
        &[Command::BeginStroke(Point::new(80, 80)), Command::UpdateStroke(Point::new(81, 95))],
    );
    assert!(ops.contains(&DrawOp::RasterizeLine(Line::new(
        Point::new(40, 60),
        Point::new(80, 95),
        false
    ))));
}

#[test]
fn test_clear_all_empties_canvas() {
    let mut state = EditorState::default();
    run(&mut state, &stroke((0, 0), (20, 0)));
    run(&mut state, &stroke((0, 5), (20, 5)));
    assert_eq!(state.canvas().len(), 2);

    assert_eq!(state.apply(Command::ClearAll), vec![DrawOp::Clear]);
    assert!(state.canvas().is_empty());
}

#[test]
fn test_draw_ops_render_committed_line() {
    let config = EditorConfig {
        width: 10,
        height: 10,
        ..EditorConfig::default()
    };
    let mut state = EditorState::new(&config);
    let renderer = Renderer::new(&config);
    let mut buffer = PixelBuffer::new(config.width, config.height);

    for command in stroke((0, 0), (5, 0)) {
        let ops = state.apply(command);
        renderer.execute(&ops, state.canvas(), &mut buffer);
    }

    for x in 0..10 {
        let expected = if x <= 5 { WHITE } else { config.background };
        assert_eq!(buffer.pixel(x, 0), Some(expected));
    }
    assert!((0..10).all(|x| buffer.pixel(x, 1) == Some(config.background)));
}
