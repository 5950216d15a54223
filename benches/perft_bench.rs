use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ember::board::Board;

struct BenchCase {
    name: &'static str,
    fen: &'static str,
    depth: usize,
    nodes: u64,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depth: 4,
        nodes: 197_281,
    },
    BenchCase {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depth: 3,
        nodes: 97_862,
    },
    BenchCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depth: 4,
        nodes: 43_238,
    },
];

fn perft_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    for case in CASES {
        group.throughput(Throughput::Elements(case.nodes));
        group.bench_with_input(
            BenchmarkId::new(case.name, case.depth),
            &case.depth,
            |b, &depth| {
                let mut board = Board::from_fen(case.fen);
                b.iter(|| {
                    let nodes = board.perft(black_box(depth));
                    assert_eq!(nodes, case.nodes);
                    nodes
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, perft_benchmark);
criterion_main!(benches);
