use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math_dense_linalg::{LinearSystem, Matrix, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn dominant_matrix(n: usize, rng: &mut StdRng) -> Matrix {
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
        row[i] += n as f64;
        rows.push(row);
    }
    Matrix::from_rows(&rows).unwrap()
}

fn bench_inverse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    for n in [50, 100, 200] {
        let m = dominant_matrix(n, &mut rng);
        c.bench_function(&format!("inverse_{n}"), |b| {
            b.iter(|| black_box(&m).inverse().unwrap())
        });
    }
}

fn bench_solve(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    for n in [50, 100, 200] {
        let m = dominant_matrix(n, &mut rng);
        let rhs = Vector::new((0..n).map(|_| rng.gen_range(-10.0..10.0)).collect());
        c.bench_function(&format!("solve_{n}"), |b| {
            b.iter(|| {
                let mut system = LinearSystem::new(m.clone(), rhs.clone());
                system.solve().unwrap();
                black_box(system.error())
            })
        });
    }
}

criterion_group!(benches, bench_inverse, bench_solve);
criterion_main!(benches);
