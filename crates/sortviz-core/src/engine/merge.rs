//! Divide-and-merge sort.

use super::{Algorithm, SortEngine};
use crate::element::Element;
use crate::step::{Marks, Step, StepLog};

/// Top-down merge sort over inclusive bounds `[left, right]`.
///
/// Each merge copies both halves, records a comparing step over the two
/// candidates' original positions before every decision, then a swapping
/// step on the destination index after every placement. Ties take the left
/// run first, so the sort is stable. No sorted-set tracking until the
/// terminal step.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl SortEngine for MergeSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Merge
    }

    fn record_steps(&self, input: &[Element]) -> Vec<Step> {
        let mut arr = input.to_vec();
        let mut log = StepLog::new();
        if !arr.is_empty() {
            let right = arr.len() - 1;
            sort_range(&mut arr, &mut log, 0, right);
        }
        log.finish(&arr)
    }
}

fn sort_range(arr: &mut [Element], log: &mut StepLog, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    sort_range(arr, log, left, mid);
    sort_range(arr, log, mid + 1, right);
    merge(arr, log, left, mid, right);
}

fn merge(arr: &mut [Element], log: &mut StepLog, left: usize, mid: usize, right: usize) {
    let left_run = arr[left..=mid].to_vec();
    let right_run = arr[mid + 1..=right].to_vec();
    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        log.push(arr, Marks::comparing(&[left + i, mid + 1 + j]));
        if left_run[i].value <= right_run[j].value {
            arr[k] = left_run[i];
            i += 1;
        } else {
            arr[k] = right_run[j];
            j += 1;
        }
        log.push(arr, Marks::swapping(&[k]));
        k += 1;
    }

    for rest in left_run[i..].iter().chain(&right_run[j..]) {
        arr[k] = *rest;
        log.push(arr, Marks::swapping(&[k]));
        k += 1;
    }
}
