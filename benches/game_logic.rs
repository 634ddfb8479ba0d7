use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{GameConfig, GameState, Grid, Scenario};
use tui_snake::engine::{Controller, NullRender, PathFinder};
use tui_snake::types::{Command, Direction, Position};

fn bench_tick(c: &mut Criterion) {
    let mut config = GameConfig::default().with_seed(12345);
    config.move_interval = 1;

    c.bench_function("controller_tick_autopilot", |b| {
        let mut controller = Controller::new(config.clone(), Box::new(NullRender), None);
        controller.handle(Command::ToggleAutopilot);
        b.iter(|| {
            if controller.state().game_over() {
                controller.restart();
                controller.handle(Command::ToggleAutopilot);
            }
            black_box(controller.tick());
        })
    });
}

fn bench_apply_move(c: &mut Criterion) {
    // Single segment walking back and forth along an open row.
    let grid = Grid::new(40, 3);
    let mut state =
        GameState::from_parts(grid, &[Position::new(1, 0)], Direction::East, 1, 1_000).unwrap();
    let mut col = 0;
    let mut step = 1;

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            if col + step < 0 || col + step >= 40 {
                step = -step;
            }
            col += step;
            black_box(state.apply_move(Position::new(1, col)));
        })
    });
}

fn bench_search_open_board(c: &mut Criterion) {
    // Head in one corner, food in the opposite one: the search visits nearly every cell.
    let mut text = vec![".".repeat(40); 20];
    text[19].replace_range(39..40, "F");
    let grid = Grid::parse(&text.join("\n")).unwrap();
    let state =
        GameState::from_parts(grid, &[Position::new(0, 0)], Direction::East, 1, 1_000).unwrap();
    let mut pf = PathFinder::default();

    c.bench_function("bfs_40x20_corner_to_corner", |b| {
        b.iter(|| black_box(pf.search(black_box(&state))))
    });
}

fn bench_search_teleport(c: &mut Criterion) {
    let state = Scenario::TeleportShortcut.build().unwrap();
    let mut pf = PathFinder::default();

    c.bench_function("bfs_teleport_shortcut", |b| {
        b.iter(|| black_box(pf.search(black_box(&state))))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(&GameConfig::default());
    let mut snap = state.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_apply_move,
    bench_search_open_board,
    bench_search_teleport,
    bench_snapshot
);
criterion_main!(benches);
