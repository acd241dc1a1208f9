#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sortviz_core::{Algorithm, Element};

#[derive(Debug, Arbitrary)]
struct Input {
    algorithm: u8,
    values: Vec<u16>,
}

fuzz_target!(|input: Input| {
    if input.values.len() > 256 {
        return;
    }
    let algorithm = Algorithm::ALL[usize::from(input.algorithm) % Algorithm::ALL.len()];
    let values: Vec<u32> = input.values.iter().map(|&v| u32::from(v)).collect();
    let elements = Element::from_values(&values);

    let run = algorithm.run(&elements);

    // Every run ends with exactly one terminal step.
    let (last, body) = run.steps.split_last().expect("at least one step");
    assert!(last.is_terminal());
    if values.len() > 1 {
        assert!(body.iter().all(|s| !s.is_terminal()), "early terminal step");
    }

    // The terminal snapshot is the sorted input.
    let mut expected = values.clone();
    expected.sort_unstable();
    assert_eq!(last.values(), expected);

    // Every snapshot has the input's length and in-range marks.
    for step in &run.steps {
        assert_eq!(step.len(), values.len());
        assert!(step.comparing().iter().all(|&i| i < values.len()));
        assert!(step.swapping().iter().all(|&i| i < values.len()));
        assert!(step.pivot().is_none_or(|p| p < values.len()));
    }
});
