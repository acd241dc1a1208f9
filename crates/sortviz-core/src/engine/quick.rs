//! Partition sort.

use super::{Algorithm, SortEngine};
use crate::element::Element;
use crate::step::{Marks, Step, StepLog};

/// Quicksort with the Lomuto partition scheme; the pivot is always the last
/// element of the current range.
///
/// Average O(n log n), worst O(n²) on already-ordered input. Recursion depth
/// is bounded by the range length.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl SortEngine for QuickSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Quick
    }

    fn record_steps(&self, input: &[Element]) -> Vec<Step> {
        let mut arr = input.to_vec();
        let mut log = StepLog::new();
        if !arr.is_empty() {
            let high = arr.len() - 1;
            sort_range(&mut arr, &mut log, 0, high);
        }
        log.finish(&arr)
    }
}

fn sort_range(arr: &mut [Element], log: &mut StepLog, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let settled = partition(arr, log, low, high);
    if settled > low {
        sort_range(arr, log, low, settled - 1);
    }
    sort_range(arr, log, settled + 1, high);
}

/// Partition `[low, high]` around `arr[high]` and return the pivot's final index.
fn partition(arr: &mut [Element], log: &mut StepLog, low: usize, high: usize) -> usize {
    let pivot = arr[high].value;
    log.push(arr, Marks::pivot(high));

    // `boundary` is one past the last element known to be below the pivot.
    let mut boundary = low;
    for j in low..high {
        log.push(arr, Marks::comparing(&[j]).with_pivot(high));
        if arr[j].value < pivot {
            arr.swap(boundary, j);
            log.push(arr, Marks::swapping(&[boundary, j]).with_pivot(high));
            boundary += 1;
        }
    }

    arr.swap(boundary, high);
    log.push(arr, Marks::swapping(&[boundary, high]));
    boundary
}
