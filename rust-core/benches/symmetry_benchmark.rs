use criterion::{criterion_group, criterion_main, Criterion};
use crystal_symmetry::{AffineTransform, SymmetryGroup};
use std::hint::black_box;

const PBCA: [&str; 8] = [
    "x,y,z",
    "-x+1/2,-y,z+1/2",
    "x+1/2,-y+1/2,-z",
    "-x,y+1/2,-z+1/2",
    "-x,-y,-z",
    "x-1/2,y,-z-1/2",
    "-x-1/2,y-1/2,z",
    "x,-y-1/2,z-1/2",
];

// m-3m point group (48 operators) built from smaller factors
fn cubic_point_group() -> SymmetryGroup {
    let permutations = SymmetryGroup::from_xyz_strings([
        "x,y,z", "z,x,y", "y,z,x", "y,x,z", "x,z,y", "z,y,x",
    ])
    .unwrap();
    let signs = SymmetryGroup::from_xyz_strings([
        "x,y,z", "-x,-y,z", "-x,y,-z", "x,-y,-z", "-x,-y,-z", "x,y,-z", "x,-y,z", "-x,y,z",
    ])
    .unwrap();
    permutations.convolute(&signs)
}

fn face_centering() -> SymmetryGroup {
    SymmetryGroup::from_xyz_strings(["x,y,z", "x,y+1/2,z+1/2", "x+1/2,y,z+1/2", "x+1/2,y+1/2,z"])
        .unwrap()
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    group.bench_function("single_operator", |b| {
        b.iter(|| AffineTransform::parse(black_box("-x+1/2,y-1/3,-z+0.25")))
    });

    group.bench_function("pbca_group", |b| {
        b.iter(|| SymmetryGroup::from_xyz_strings(black_box(PBCA)))
    });

    group.finish();
}

fn bench_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("closure");

    let pbca = SymmetryGroup::from_xyz_strings(PBCA).unwrap();
    group.bench_function("pbca_is_space_group", |b| {
        b.iter(|| black_box(&pbca).is_space_group())
    });

    // Fm-3m: 192 operators, the worst case the closure test is meant for
    let fm3m = cubic_point_group().convolute(&face_centering());
    group.sample_size(10);
    group.bench_function("fm3m_is_space_group", |b| {
        b.iter(|| black_box(&fm3m).is_space_group())
    });

    group.finish();
}

fn bench_convolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("convolution");

    let point_group = cubic_point_group();
    let centering = face_centering();
    group.bench_function("m3m_x_f_centering", |b| {
        b.iter(|| black_box(&point_group).convolute(black_box(&centering)))
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_closure, bench_convolution);
criterion_main!(benches);
