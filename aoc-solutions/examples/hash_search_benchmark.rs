//! Benchmark comparing the sequential and parallel MD5 zero-prefix search.
//!
//! Run with: cargo run --example hash_search_benchmark --release
//!
//! Both searches must return the same counter for every secret; the parallel
//! one is timed with a few batch sizes.

use aoc_solutions::utils::hash_search::{DEFAULT_BATCH_SIZE, find_first_match, find_first_match_parallel};
use std::time::Instant;

const SECRETS: [&str; 3] = ["abcdef", "pqrstuv", "iwrupvqb"];
const ZERO_NIBBLES: u8 = 5;
const BATCH_SIZES: [u64; 3] = [1 << 10, 1 << 14, DEFAULT_BATCH_SIZE];

fn main() {
    println!("MD5 Zero-Prefix Search Benchmark");
    println!("================================");
    println!(
        "Searching {} secrets for {} leading zero nibbles on {} threads\n",
        SECRETS.len(),
        ZERO_NIBBLES,
        rayon::current_num_threads()
    );

    let mut all_match = true;
    for secret in SECRETS {
        let start = Instant::now();
        let sequential = find_first_match(secret.as_bytes(), ZERO_NIBBLES);
        let sequential_time = start.elapsed();
        println!("{secret}: {sequential:?}");
        println!("  sequential:              {:?}", sequential_time);

        for batch_size in BATCH_SIZES {
            let start = Instant::now();
            let parallel = find_first_match_parallel(secret.as_bytes(), ZERO_NIBBLES, batch_size);
            let parallel_time = start.elapsed();
            println!(
                "  parallel (batch {:>6}):  {:?} ({:.2}x)",
                batch_size,
                parallel_time,
                sequential_time.as_secs_f64() / parallel_time.as_secs_f64()
            );
            if parallel != sequential {
                println!("  ✗ mismatch: parallel returned {parallel:?}");
                all_match = false;
            }
        }
        println!();
    }

    if all_match {
        println!("✓ Sequential and parallel searches agree!");
    } else {
        println!("✗ Results do not match!");
    }
}
