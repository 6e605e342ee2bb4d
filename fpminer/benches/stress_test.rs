use fpminer::{FpGrowth, FrequentItemsets, MinSupport, MiningConfig, TransactionMultiset};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> TransactionMultiset<usize> {
    let mut rng = rand::thread_rng();

    let rows = (0..num_transactions).map(|_| {
        let random_factor: f64 = rng.r#gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        (0..num_items_in_tx)
            .filter_map(|_| {
                let density_check: f64 = rng.r#gen();
                if density_check < density {
                    Some(rng.gen_range(0..num_items))
                } else {
                    None
                }
            })
            .collect::<Vec<usize>>()
    });

    TransactionMultiset::from_transactions(rows.filter(|row| !row.is_empty()).collect::<Vec<_>>())
}

fn timed(config: MiningConfig, transactions: &TransactionMultiset<usize>) -> (FrequentItemsets<usize>, Duration) {
    let start = Instant::now();
    let result = FpGrowth::new(config).mine(transactions);
    let elapsed = start.elapsed();
    match result {
        Ok(found) => (found, elapsed),
        Err(e) => panic!("mining failed: {e}"),
    }
}

fn stress_test_scaling() {
    info!("=== Scaling ===");

    let configs = vec![
        ("10K x 50", 10_000, 50, 15),
        ("50K x 80", 50_000, 80, 20),
        ("100K x 100", 100_000, 100, 25),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let start_gen = Instant::now();
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);
        info!(dataset = name, distinct = transactions.len(), elapsed = ?start_gen.elapsed(), "generated");

        let (found, elapsed) = timed(MiningConfig::new(MinSupport::Fraction(0.01)), &transactions);
        info!(dataset = name, patterns = found.len(), ?elapsed, "completed");
    }
}

fn stress_test_sequential_vs_parallel() {
    info!("=== Sequential vs Parallel ===");

    let transactions = generate_transactions(50_000, 100, 20, 0.7);
    let base = MiningConfig::new(MinSupport::Fraction(0.01));

    let (sequential, sequential_time) = timed(base.clone(), &transactions);
    let (parallel, parallel_time) = timed(base.clone().with_parallel(true), &transactions);
    let (shortcut, shortcut_time) = timed(base.with_parallel(true).with_single_path_shortcut(true), &transactions);

    info!(patterns = sequential.len(), elapsed = ?sequential_time, "sequential");
    info!(patterns = parallel.len(), elapsed = ?parallel_time, "parallel");
    info!(patterns = shortcut.len(), elapsed = ?shortcut_time, "parallel + single path");

    if sequential != parallel {
        warn!("parallel output differs from sequential output");
    }
    if shortcut.len() != sequential.len() {
        warn!("single path shortcut found a different number of patterns");
    }

    let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64();
    info!(speedup = %format!("{:.2}x", speedup), "parallel speedup");
}

fn stress_test_extreme_low_support() {
    info!("=== Extreme Low Support ===");

    let transactions = generate_transactions(20_000, 100, 20, 0.6);

    for &min_support in &[0.05, 0.02, 0.01, 0.005] {
        let config = MiningConfig::new(MinSupport::Fraction(min_support)).with_parallel(true);
        let (found, elapsed) = timed(config, &transactions);
        let levels = found.clone().into_levels();

        info!(min_support, patterns = found.len(), max_itemset_size = levels.len(), ?elapsed, "completed");
        if found.len() > 1_000_000 {
            warn!(min_support, "pattern explosion detected");
        }
    }
}

fn stress_test_dense_data() {
    info!("=== Dense Data (worst case) ===");

    let configs = vec![
        ("Dense 80%", 10_000, 50, 40, 0.8),
        ("Dense 90%", 10_000, 50, 45, 0.9),
    ];

    for (name, num_tx, num_items, avg_size, density) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, density);

        // Cap the length so the run stays bounded on dense data
        let config = MiningConfig::new(MinSupport::Fraction(0.1))
            .with_parallel(true)
            .with_max_len(4);
        let (found, elapsed) = timed(config, &transactions);
        info!(dataset = name, patterns = found.len(), ?elapsed, "completed");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("=== FP-Growth Stress Testing Suite ===");

    stress_test_scaling();
    stress_test_sequential_vs_parallel();
    stress_test_extreme_low_support();
    stress_test_dense_data();

    info!("=== Stress Testing Complete ===");
}
