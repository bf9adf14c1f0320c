use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math_sparse_bcsr::{BcsrMatrix, CooMatrix};

/// Build a banded n x n test matrix with a pentadiagonal pattern
fn banded_coo(n: usize) -> CooMatrix {
    let mut coo = CooMatrix::with_capacity(n, n, 5 * n);
    for i in 0..n {
        for offset in [-2i64, -1, 0, 1, 2] {
            let j = i as i64 + offset;
            if j >= 0 && (j as usize) < n {
                coo.push(i, j as usize, 1.0 / (1.0 + offset.abs() as f64))
                    .unwrap();
            }
        }
    }
    coo
}

fn bench_from_coo(c: &mut Criterion) {
    let coo = banded_coo(1024);

    c.bench_function("from_coo_1024_b2", |b| {
        b.iter(|| BcsrMatrix::from_coo(black_box(&coo), 2).unwrap())
    });

    c.bench_function("from_coo_1024_b4", |b| {
        b.iter(|| BcsrMatrix::from_coo(black_box(&coo), 4).unwrap())
    });
}

fn bench_from_dense(c: &mut Criterion) {
    let dense = banded_coo(512).to_dense();

    c.bench_function("from_dense_512_b4", |b| {
        b.iter(|| BcsrMatrix::from_dense(black_box(&dense), 4, 1e-15).unwrap())
    });
}

criterion_group!(benches, bench_from_coo, bench_from_dense);
criterion_main!(benches);
