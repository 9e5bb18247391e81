use criterion::{black_box, criterion_group, criterion_main, Criterion};
use enopt::{
    catalog::ProblemId,
    nalgebra::DVector,
    problems::{PlanetaryGearTrainDesign, StepConePulley, TensionCompressionSpringDesign},
    Evaluator, Problem, ProblemExt,
};
use rand::{rngs::StdRng, SeedableRng};

const N_POINTS: usize = 64;

fn points<P: Problem + ?Sized>(f: &P) -> Vec<DVector<f64>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..N_POINTS).map(|_| f.domain().sample(&mut rng)).collect()
}

fn evaluate_all<P: Problem + ?Sized>(evaluator: &Evaluator<'_, P>, xs: &[DVector<f64>]) -> f64 {
    xs.iter()
        .filter_map(|x| evaluator.evaluate(x).ok())
        .sum()
}

fn spring(c: &mut Criterion) {
    let f = TensionCompressionSpringDesign::new();
    let xs = points(&f);
    let evaluator = Evaluator::new(&f).unwrap();

    c.bench_function("evaluate spring", |b| {
        b.iter(|| evaluate_all(&evaluator, black_box(&xs)))
    });

    c.bench_function("constraints spring", |b| {
        b.iter(|| {
            for x in &xs {
                black_box(f.cons(x).unwrap());
            }
        })
    });
}

fn amended(c: &mut Criterion) {
    let f = PlanetaryGearTrainDesign::new();
    let xs = points(&f);
    let evaluator = Evaluator::builder(&f)
        .reject_non_finite(false)
        .build()
        .unwrap();

    c.bench_function("evaluate planetary gear train", |b| {
        b.iter(|| evaluate_all(&evaluator, black_box(&xs)))
    });
}

fn equality(c: &mut Criterion) {
    let f = StepConePulley::new();
    let xs = points(&f);
    let evaluator = Evaluator::new(&f).unwrap();

    c.bench_function("evaluate step-cone pulley", |b| {
        b.iter(|| evaluate_all(&evaluator, black_box(&xs)))
    });
}

fn catalog(c: &mut Criterion) {
    let problems = ProblemId::ALL
        .iter()
        .map(|id| id.build())
        .collect::<Vec<_>>();
    let xs = problems
        .iter()
        .map(|f| points(f.as_ref()))
        .collect::<Vec<_>>();

    c.bench_function("evaluate catalog", |b| {
        b.iter(|| {
            problems
                .iter()
                .zip(xs.iter())
                .map(|(f, xs)| {
                    let evaluator = Evaluator::builder(f.as_ref())
                        .reject_non_finite(false)
                        .build()
                        .unwrap();
                    evaluate_all(&evaluator, black_box(xs))
                })
                .sum::<f64>()
        })
    });
}

criterion_group!(evaluate, spring, amended, equality, catalog);
criterion_main!(evaluate);
