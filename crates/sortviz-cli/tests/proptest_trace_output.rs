//! Property tests for `sortviz trace` output.

use proptest::prelude::*;
use serde_json::Value;
use sortviz_cli::config::SortArgs;
use sortviz_cli::trace::{TraceArgs, write_trace};
use sortviz_core::{Algorithm, SIZE_MAX, SIZE_MIN, SIZE_STEP};

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn size(max: usize) -> impl Strategy<Value = usize> {
    (SIZE_MIN / SIZE_STEP..=max / SIZE_STEP).prop_map(|k| k * SIZE_STEP)
}

fn trace(algorithm: Algorithm, size: usize, seed: u64, summary: bool) -> Vec<Value> {
    let args = TraceArgs {
        sort: SortArgs {
            algorithm,
            size,
            speed: 100,
            seed: Some(seed),
        },
        summary,
    };
    let mut out = Vec::new();
    write_trace(&args, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn numbers(value: &Value) -> Vec<u64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn summary_output_is_sorted_permutation_of_input(
        algorithm in algorithm(),
        size in size(SIZE_MAX),
        seed in any::<u64>(),
    ) {
        let lines = trace(algorithm, size, seed, true);
        prop_assert_eq!(lines.len(), 1);
        let mut input = numbers(&lines[0]["input"]);
        let output = numbers(&lines[0]["output"]);
        prop_assert_eq!(input.len(), size);
        prop_assert!(input.iter().all(|v| (10..410).contains(v)));
        input.sort_unstable();
        prop_assert_eq!(input, output);
    }

    #[test]
    fn step_lines_match_summary_count(
        algorithm in algorithm(),
        size in size(30),
        seed in any::<u64>(),
    ) {
        let steps = trace(algorithm, size, seed, false);
        let summary = trace(algorithm, size, seed, true);
        prop_assert_eq!(summary[0]["steps"].as_u64(), Some(steps.len() as u64));
        let terminal: Vec<bool> = steps
            .iter()
            .map(|line| line["terminal"].as_bool().unwrap())
            .collect();
        prop_assert!(terminal.last().copied().unwrap_or(false));
        prop_assert!(terminal[..terminal.len() - 1].iter().all(|t| !t));
    }
}
