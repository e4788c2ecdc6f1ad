use mlq_model::report::{Report, ReportError};
use mlq_model::{Cyclic, Engine, ProcessSpec, SinglePass};
use rand::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let batch = bernoulli_batch(40, 0.3, 2, 6, 0);

    let mut single = Engine::<SinglePass>::new();
    let mut cyclic = Engine::<Cyclic>::new();
    for spec in &batch {
        single.admit(spec.clone());
        cyclic.admit(spec.clone());
    }

    println!("Single-pass run over {} processes:", batch.len());
    for event in single.run() {
        println!("  {event:?}");
    }
    print_report("Single-pass results", single.report());

    cyclic.run();
    print_report("Cyclic round-robin results", cyclic.report());
}

// Random batch spread across all three priority bands
fn bernoulli_batch(
    ticks: i64,
    p_arrival: f64,
    short_burst: i64,
    long_burst: i64,
    seed: u64,
) -> Vec<ProcessSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut batch = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            batch.push(ProcessSpec {
                pid: batch.len() as i64 + 1,
                priority: rng.random_range(0..150),
                arrival_time: t,
                burst_time: rng.random_range(short_burst..=long_burst),
            });
        }
    }

    batch
}

fn print_report(label: &str, report: Result<Report, ReportError>) {
    match report {
        Ok(report) => {
            println!("\n{label}:");
            println!(
                "{:<8} {:<12} {:<10} {:<15} {:<12}",
                "PID", "Arrival", "Burst", "Completion", "Waiting"
            );
            for row in &report.rows {
                println!(
                    "{:<8} {:<12} {:<10} {:<15} {:<12}",
                    row.pid, row.arrival_time, row.burst_time, row.completion_time, row.waiting
                );
            }
            println!("Average waiting time: {:.2} ticks", report.avg_waiting);
            println!("Average turnaround time: {:.2} ticks", report.avg_turnaround);
        }
        Err(err) => println!("\n{label}: {err}"),
    }
}
