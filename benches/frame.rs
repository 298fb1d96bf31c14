use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridline::{curve::bernstein, CurveEditor, Command, FrameInput, RasterPipeline};
use std::time::Duration;
use vek::*;

fn worst_case_input() -> FrameInput {
    FrameInput {
        vertices: [Vec2::new(-99, -99), Vec2::new(99, -99), Vec2::new(0, 99)],
        center: Vec2::zero(),
        radius: 99,
        fill: true,
    }
}

fn assemble_benchmark(c: &mut Criterion) {
    let mut pipeline = RasterPipeline::default();
    let input = worst_case_input();

    c.bench_function("assemble worst case", |b| {
        b.iter(|| pipeline.assemble(black_box(&input)))
    });
}

fn curve_benchmark(c: &mut Criterion) {
    let points = (0..50)
        .map(|i| Vec2::new(i as f32 / 25.0 - 1.0, (i as f32 * 0.7).sin() * 0.5))
        .collect::<Vec<_>>();

    c.bench_function("sample 50 point curve", |b| {
        b.iter(|| bernstein::sample(black_box(&points), 1000))
    });

    let mut editor = CurveEditor::default();
    points.iter().for_each(|p| editor.push(Command::Append(*p)));
    let mut time = 0.0;
    c.bench_function("curve editor frame", |b| {
        b.iter(|| {
            time += 0.016;
            editor.frame(black_box(time)).construction.point()
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .warm_up_time(Duration::from_millis(1000));
    targets = assemble_benchmark, curve_benchmark
}

criterion_main!(benches);
