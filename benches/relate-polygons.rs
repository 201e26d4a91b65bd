use criterion::*;
use geo::{Coordinate, Polygon, Rect};
use geo_relate::{relate, Steric};
use rand::thread_rng;

#[path = "utils/random.rs"]
mod random;
use random::{circular_polygon, uniform_point};

fn pair(steps: usize, offset: f64) -> (Steric<f64>, Steric<f64>) {
    let center = Coordinate { x: 0., y: 0. };
    let p1: Polygon<f64> = circular_polygon(thread_rng(), center, 100., steps);
    let p2 = circular_polygon(
        thread_rng(),
        Coordinate {
            x: offset,
            y: 0.,
        },
        100.,
        steps,
    );
    (Steric::from(&p1), Steric::from(&p2))
}

fn polygon_relate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Circular polygon relate");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    (4..10).for_each(|scale| {
        let steps = 1 << scale;

        // Far apart: every edge pair is tested before classifying.
        let (a, b) = pair(steps, 1000.);
        group.bench_with_input(BenchmarkId::new("disjoint", steps), &(), |bench, _| {
            bench.iter(|| relate(black_box(&a), black_box(&b)))
        });

        // Overlapping: the scan stops at the first contact.
        let (a, b) = pair(steps, 120.);
        group.bench_with_input(BenchmarkId::new("crossing", steps), &(), |bench, _| {
            bench.iter(|| relate(black_box(&a), black_box(&b)))
        });
    });
}

fn line_relate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Polygon boundary against polygon");
    (4..9).for_each(|scale| {
        let steps = 1 << scale;
        let (a, b) = pair(steps, 120.);
        let boundary = match &a {
            Steric::Polygon(p) => Steric::Line(p.rings()[0].clone()),
            _ => unreachable!(),
        };
        group.bench_with_input(BenchmarkId::new("line-polygon", steps), &(), |bench, _| {
            bench.iter(|| relate(black_box(&boundary), black_box(&b)))
        });
    });
}

fn point_relate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random points against polygon");
    let bounds = Rect::new(
        Coordinate { x: -150., y: -150. },
        Coordinate { x: 150., y: 150. },
    );
    (4..9).for_each(|scale| {
        let steps = 1 << scale;
        let (a, _) = pair(steps, 0.);
        let mut rng = thread_rng();
        let points: Vec<Steric<f64>> = (0..64)
            .map(|_| Steric::Point(uniform_point(&mut rng, bounds)))
            .collect();
        group.bench_with_input(BenchmarkId::new("point-polygon", steps), &(), |bench, _| {
            bench.iter(|| {
                for p in &points {
                    let _ = relate(black_box(p), black_box(&a));
                }
            })
        });
    });
}

criterion_group!(benches, polygon_relate, line_relate, point_relate);
criterion_main!(benches);
