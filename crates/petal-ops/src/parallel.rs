//! Row-parallel pixel passes.
//!
//! With the `parallel` feature (default) rows are distributed over the Rayon
//! pool; without it the same closure runs sequentially. Per-row results are
//! summed, so passes must be pure per pixel for the output to be independent
//! of scheduling.

use std::ops::Add;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs `f` on every row of `data` and sums the per-row results.
pub(crate) fn fold_rows<S, F>(data: &mut [u8], stride: usize, f: F) -> S
where
    S: Default + Add<Output = S> + Send,
    F: Fn(&mut [u8]) -> S + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        data.par_chunks_mut(stride)
            .map(|row| f(row))
            .reduce(S::default, |a, b| a + b)
    }

    #[cfg(not(feature = "parallel"))]
    {
        data.chunks_mut(stride)
            .map(|row| f(row))
            .fold(S::default(), |a, b| a + b)
    }
}

/// Read-only variant of [`fold_rows`].
pub(crate) fn fold_rows_ref<S, F>(data: &[u8], stride: usize, f: F) -> S
where
    S: Default + Add<Output = S> + Send,
    F: Fn(&[u8]) -> S + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        data.par_chunks(stride)
            .map(|row| f(row))
            .reduce(S::default, |a, b| a + b)
    }

    #[cfg(not(feature = "parallel"))]
    {
        data.chunks(stride).map(|row| f(row)).fold(S::default(), |a, b| a + b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_rows_visits_every_row() {
        let mut data: Vec<u8> = (0..24).collect();
        let touched: usize = fold_rows(&mut data, 8, |row| {
            for b in row.iter_mut() {
                *b = b.wrapping_mul(2);
            }
            row.len()
        });
        assert_eq!(touched, 24);
        assert_eq!(data[23], 46);
    }

    #[test]
    fn test_fold_rows_ref_sums() {
        let data = vec![1u8; 40];
        let sum: usize = fold_rows_ref(&data, 10, |row| row.iter().map(|&b| b as usize).sum());
        assert_eq!(sum, 40);
    }
}
