use prime_cluster::aggregate::types::Outcome;
use prime_cluster::group::types::RunSpec;
use prime_cluster::group::find_nth_prime;
use prime_cluster::primes::FIRST_PRIMES;

/// Worker count used when the launcher does not supply one.
const DEFAULT_WORKERS: usize = 4;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <n> [--workers <count>]", args[0]);
        eprintln!("Example: {} 100", args[0]);
        eprintln!("Example: {} 100000 --workers 8", args[0]);

        std::process::exit(1);
    }

    let mut n: Option<usize> = None;
    let mut workers = DEFAULT_WORKERS;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--workers" => {
                workers = args[i + 1].parse()?;
                i += 2;
            }
            value => {
                n = value.parse().ok();
                i += 1;
            }
        }
    }

    let n = match n {
        Some(n) if n >= 1 => n,
        _ => {
            eprintln!("n must be a positive integer.");
            std::process::exit(1);
        }
    };

    // The first four primes are answered directly, with no group launched.
    if n <= FIRST_PRIMES.len() {
        println!("The {}-th prime number is {}", n, FIRST_PRIMES[n - 1]);
        return Ok(());
    }

    let report = find_nth_prime(RunSpec::new(n), workers).await?;

    match report.outcome {
        Outcome::Answer(prime) => {
            println!("The {}-th prime number is {}", n, prime);
        }
        Outcome::InsufficientBound { bound } => {
            println!(
                "The estimated upper bound ({}) was not enough to find the {}-th prime.",
                bound, n
            );
        }
    }

    println!("Elapsed time: {:.2} seconds", report.elapsed.as_secs_f64());

    Ok(())
}
