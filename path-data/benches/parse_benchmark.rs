use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use path_data::{
    parse_number_list, parse_path, parse_points, PathCommand, PathPen, PenCommand, PenHandler,
    Point,
};
use rand::Rng;

/// Pen that only counts the commands it receives.
#[derive(Default)]
struct CountingPen(usize);

impl PathPen for CountingPen {
    fn move_to(&mut self, _x: f32, _y: f32) {
        self.0 += 1;
    }
    fn line_to(&mut self, _x: f32, _y: f32) {
        self.0 += 1;
    }
    fn quad_to(&mut self, _cx0: f32, _cy0: f32, _x: f32, _y: f32) {
        self.0 += 1;
    }
    fn curve_to(&mut self, _cx0: f32, _cy0: f32, _cx1: f32, _cy1: f32, _x: f32, _y: f32) {
        self.0 += 1;
    }
    fn close(&mut self) {
        self.0 += 1;
    }
}

fn random_points(count: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut text = String::new();
    for _ in 0..count {
        let x: f32 = rng.gen_range(-1000.0..1000.0);
        let y: f32 = rng.gen_range(-1000.0..1000.0);
        text.push_str(&format!("{x:.3},{y:.3} "));
    }
    text
}

pub fn path_benchmark(c: &mut Criterion) {
    let icons = path_test_data::ICONS;
    c.bench_function("parse_icons_to_commands", |b| {
        b.iter(|| {
            let mut commands: Vec<PathCommand> = Vec::new();
            for d in icons.lines() {
                parse_path(black_box(d), &mut commands);
            }
            commands
        })
    });
    c.bench_function("draw_icons", |b| {
        b.iter(|| {
            let mut pen = CountingPen::default();
            for d in icons.lines() {
                parse_path(black_box(d), &mut PenHandler::new(&mut pen));
            }
            pen.0
        })
    });
    c.bench_function("draw_icons_to_vec", |b| {
        b.iter(|| {
            let mut pen: Vec<PenCommand> = Vec::new();
            for d in icons.lines() {
                parse_path(black_box(d), &mut PenHandler::new(&mut pen));
            }
            pen
        })
    });
}

pub fn points_benchmark(c: &mut Criterion) {
    for count in [16, 1024, 65_536] {
        let text = random_points(count);
        c.bench_with_input(BenchmarkId::new("parse_points", count), &text, |b, text| {
            b.iter(|| {
                let mut points: Vec<Point> = Vec::with_capacity(count);
                parse_points(black_box(text), &mut points);
                points
            })
        });
        c.bench_with_input(
            BenchmarkId::new("parse_number_list", count * 2),
            &text,
            |b, text| {
                b.iter(|| {
                    let mut values: Vec<f32> = Vec::with_capacity(count * 2);
                    parse_number_list(black_box(text), &mut values);
                    values
                })
            },
        );
    }
}

criterion_group!(benches, path_benchmark, points_benchmark);
criterion_main!(benches);
