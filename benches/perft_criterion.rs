use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use grid_chess::game_state::chess_rules::STARTING_PIECE_PLACEMENT;
use grid_chess::game_state::game_state::GameState;
use grid_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    placement: &'static str,
    depth: u8,
    /// Known node count, checked before measuring. `None` for layouts whose
    /// count is not pinned down.
    expected_nodes: Option<u64>,
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "startpos_d1",
        placement: STARTING_PIECE_PLACEMENT,
        depth: 1,
        expected_nodes: Some(20),
    },
    BenchCase {
        name: "startpos_d2",
        placement: STARTING_PIECE_PLACEMENT,
        depth: 2,
        expected_nodes: Some(400),
    },
    BenchCase {
        name: "startpos_d3",
        placement: STARTING_PIECE_PLACEMENT,
        depth: 3,
        expected_nodes: Some(8902),
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "startpos_d3",
        placement: STARTING_PIECE_PLACEMENT,
        depth: 3,
        expected_nodes: Some(8902),
    },
    BenchCase {
        name: "startpos_d4",
        placement: STARTING_PIECE_PLACEMENT,
        depth: 4,
        expected_nodes: None,
    },
    BenchCase {
        name: "wide_board_d3",
        placement: "1rnbqkbnr1/pppppppppp/10/10/10/10/PPPPPPPPPP/1RNBQKBNR1",
        depth: 3,
        expected_nodes: None,
    },
];

fn selected_cases() -> &'static [BenchCase] {
    match std::env::var("GRID_CHESS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let suite_name = match std::env::var("GRID_CHESS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = GameState::from_piece_placement(case.placement, 2)
            .expect("benchmark placement should parse");

        // Correctness guard before benchmarking.
        let warmup = perft(&game, case.depth).nodes as u64;
        if let Some(expected) = case.expected_nodes {
            assert_eq!(
                warmup, expected,
                "node mismatch in warmup for {}",
                case.name
            );
        }

        group.throughput(Throughput::Elements(warmup));
        group.bench_with_input(
            BenchmarkId::from_parameter(case.name),
            &warmup,
            |b, expected| {
                b.iter(|| {
                    let count = perft(black_box(&game), black_box(case.depth));
                    assert_eq!(count.nodes as u64, *expected);
                    black_box(count.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
