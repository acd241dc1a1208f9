//! Selection sort.

use super::{Algorithm, SortEngine};
use crate::element::Element;
use crate::step::{Marks, SortedSet, Step, StepLog};

/// For each position, scan the rest for the minimum and swap it in.
///
/// Every candidate produces a comparing step against the current minimum
/// index. A minimum update emits nothing by itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortEngine for SelectionSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Selection
    }

    fn record_steps(&self, input: &[Element]) -> Vec<Step> {
        let mut arr = input.to_vec();
        let n = arr.len();
        let mut log = StepLog::new();
        let mut sorted = SortedSet::new(n);

        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            for j in i + 1..n {
                log.push(&arr, Marks::comparing(&[min, j]).with_sorted(&sorted));
                if arr[j].value < arr[min].value {
                    min = j;
                }
            }
            if min != i {
                arr.swap(i, min);
                log.push(&arr, Marks::swapping(&[i, min]).with_sorted(&sorted));
            }
            sorted.insert(i);
        }

        log.finish(&arr)
    }
}
