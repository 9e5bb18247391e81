use std::env;

use enopt::catalog::ProblemId;
use enopt::nalgebra::DVector;
use enopt::Evaluator;
use rand::rngs::StdRng;
use rand::SeedableRng;

const MAX_FE: usize = 10_000;

fn main() -> Result<(), String> {
    let name = env::args().nth(1).unwrap_or_else(|| "CCSDP".to_string());
    let id = name
        .parse::<ProblemId>()
        .map_err(|error| format!("{error}"))?;

    let problem = id.build();
    let evaluator = Evaluator::new(problem.as_ref()).map_err(|error| format!("{error}"))?;
    let mut rng = StdRng::seed_from_u64(0);

    println!("{} ({})", problem.name(), id.code());

    let mut best: Option<(DVector<f64>, f64)> = None;

    while evaluator.n_fe() < MAX_FE {
        let x = evaluator.create_solution(&mut rng);

        // Points with non-finite values are skipped.
        let fitness = match evaluator.evaluate(&x) {
            Ok(fitness) => fitness,
            Err(_) => continue,
        };

        if best.as_ref().map_or(true, |(_, best)| fitness < *best) {
            println!("n_fe = {}\tfitness = {}", evaluator.n_fe(), fitness);
            best = Some((x, fitness));
        }
    }

    let (x, _) = best.ok_or_else(|| "no valid point found".to_string())?;
    let evaluation = evaluator
        .evaluate_full(&x)
        .map_err(|error| format!("{error}"))?;
    let report = evaluation.report();

    println!("x = {:?}", evaluation.x().as_slice());
    println!("objs = {:?}", evaluation.objs().as_slice());
    println!(
        "feasible = {}\tviolated = {:?}\ttotal violation = {}",
        report.is_feasible(),
        report.violated(),
        report.total_violation()
    );

    Ok(())
}
