use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scanraster::colors::{self, Color};
use scanraster::math::{IVec2, IVec3};
use scanraster::render::{
    fill_triangle_flat, fill_triangle_shaded, fill_triangle_shaded_tiled, DepthBuffer,
    FrameBuffer, DEFAULT_BAND_ROWS,
};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;
const VERTEX_COLORS: [Color; 3] = [colors::RED, colors::GREEN, colors::BLUE];

fn small_triangle() -> [IVec3; 3] {
    [
        IVec3::new(100, 100, 0.1),
        IVec3::new(120, 100, 0.2),
        IVec3::new(110, 120, 0.3),
    ]
}

fn medium_triangle() -> [IVec3; 3] {
    [
        IVec3::new(100, 100, 0.1),
        IVec3::new(300, 100, 0.2),
        IVec3::new(200, 300, 0.3),
    ]
}

fn large_triangle() -> [IVec3; 3] {
    [
        IVec3::new(50, 50, 0.1),
        IVec3::new(750, 100, 0.2),
        IVec3::new(400, 550, 0.3),
    ]
}

fn buffers() -> (FrameBuffer, DepthBuffer) {
    let image = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
    let depth = DepthBuffer::for_image(&image);
    (image, depth)
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    for (name, points) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("flat", name), &points, |b, pts| {
            let (mut image, _) = buffers();
            let [p0, p1, p2] = pts.map(|p| p.xy());
            b.iter(|| fill_triangle_flat(&mut image, black_box(p0), p1, p2, colors::RED));
        });

        group.bench_with_input(BenchmarkId::new("shaded", name), &points, |b, pts| {
            let (mut image, mut depth) = buffers();
            b.iter(|| {
                depth.clear();
                fill_triangle_shaded(&mut image, &mut depth, black_box(*pts), VERTEX_COLORS, 1.0)
            });
        });

        group.bench_with_input(BenchmarkId::new("tiled", name), &points, |b, pts| {
            let (mut image, mut depth) = buffers();
            b.iter(|| {
                depth.clear();
                fill_triangle_shaded_tiled(
                    &mut image,
                    &mut depth,
                    black_box(*pts),
                    VERTEX_COLORS,
                    1.0,
                    DEFAULT_BAND_ROWS,
                )
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    // Generate a grid of small triangles
    let triangles: Vec<[IVec3; 3]> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col * 40;
                let y = row * 30;
                [
                    IVec3::new(x, y, 0.0),
                    IVec3::new(x + 35, y, 0.5),
                    IVec3::new(x + 17, y + 25, 1.0),
                ]
            })
        })
        .collect();

    group.bench_function("flat_400_triangles", |b| {
        let (mut image, _) = buffers();
        b.iter(|| {
            for pts in &triangles {
                let [p0, p1, p2]: [IVec2; 3] = pts.map(|p| p.xy());
                fill_triangle_flat(&mut image, black_box(p0), p1, p2, colors::RED);
            }
        });
    });

    group.bench_function("shaded_400_triangles", |b| {
        let (mut image, mut depth) = buffers();
        b.iter(|| {
            depth.clear();
            for pts in &triangles {
                fill_triangle_shaded(&mut image, &mut depth, black_box(*pts), VERTEX_COLORS, 1.0);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_many_triangles);
criterion_main!(benches);
