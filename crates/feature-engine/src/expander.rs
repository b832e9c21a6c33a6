//! Feature Expansion (48 -> 398)
//!
//! Output layout per sample:
//! - `[0, 48)`: the input, unchanged
//! - `[48, 96)`: elementwise squares
//! - `[96, 398)`: `x[i] * x[(i + k) % 48]` for shifts `k = 1, 2, ...`, one block
//!   of 48 per shift, the last block truncated to fill the vector exactly
//!
//! The classifier weights are keyed to this exact layout.

use crate::error::FeatureError;
use ndarray::{Array2, ArrayView1, ArrayView2};

/// Answers per questionnaire (6 letters x 8 items)
pub const INPUT_WIDTH: usize = 48;

/// Width of the expanded feature vector
pub const EXPANDED_WIDTH: usize = 398;

/// Stateless 48 -> 398 feature expander
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureExpander;

impl FeatureExpander {
    /// Create a new expander
    pub fn new() -> Self {
        Self
    }

    /// Expand a single sample
    pub fn expand(&self, sample: &[f64]) -> Result<Vec<f64>, FeatureError> {
        check_width(sample.len())?;

        let mut out = vec![0.0; EXPANDED_WIDTH];
        fill(sample, &mut out);
        Ok(out)
    }

    /// Expand a batch of samples, one per row
    pub fn transform(&self, samples: ArrayView2<'_, f64>) -> Result<Array2<f64>, FeatureError> {
        check_width(samples.ncols())?;

        let mut out = Array2::zeros((samples.nrows(), EXPANDED_WIDTH));
        let mut expanded = vec![0.0; EXPANDED_WIDTH];
        for (row, mut dst) in samples.outer_iter().zip(out.outer_iter_mut()) {
            fill(&row.to_vec(), &mut expanded);
            dst.assign(&ArrayView1::from(&expanded[..]));
        }
        Ok(out)
    }
}

fn check_width(actual: usize) -> Result<(), FeatureError> {
    if actual != INPUT_WIDTH {
        return Err(FeatureError::InvalidShape {
            expected: INPUT_WIDTH,
            actual,
        });
    }
    Ok(())
}

/// `input` is exactly `INPUT_WIDTH` long, `out` exactly `EXPANDED_WIDTH`
fn fill(input: &[f64], out: &mut [f64]) {
    out[..INPUT_WIDTH].copy_from_slice(input);

    for (dst, &x) in out[INPUT_WIDTH..2 * INPUT_WIDTH].iter_mut().zip(input) {
        *dst = x * x;
    }

    let mut pos = 2 * INPUT_WIDTH;
    let mut shift = 1;
    while pos < EXPANDED_WIDTH {
        let take = INPUT_WIDTH.min(EXPANDED_WIDTH - pos);
        for (i, dst) in out[pos..pos + take].iter_mut().enumerate() {
            *dst = input[i] * input[(i + shift) % INPUT_WIDTH];
        }
        pos += take;
        shift += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use proptest::prelude::*;

    fn answers() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec((1i64..=5).prop_map(|v| v as f64), INPUT_WIDTH)
    }

    fn unit(index: usize, value: f64) -> Vec<f64> {
        let mut v = vec![0.0; INPUT_WIDTH];
        v[index] = value;
        v
    }

    #[test]
    fn test_zeros_expand_to_zeros() {
        let out = FeatureExpander::new().expand(&[0.0; INPUT_WIDTH]).unwrap();
        assert_eq!(out.len(), EXPANDED_WIDTH);
        assert!(out.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_single_leading_one() {
        // A lone nonzero at index 0 never pairs with itself for shifts 1..=7,
        // so only the copy and the square carry it.
        let out = FeatureExpander::new().expand(&unit(0, 1.0)).unwrap();

        assert_eq!(out[0], 1.0);
        assert_eq!(out[48], 1.0);
        let nonzero: Vec<usize> = (0..EXPANDED_WIDTH).filter(|&i| out[i] != 0.0).collect();
        assert_eq!(nonzero, vec![0, 48]);
    }

    #[test]
    fn test_shift_block_positions() {
        // x[5] = 2 and x[8] = 3 meet at shift 3, position 5 of that block
        let mut input = unit(5, 2.0);
        input[8] = 3.0;
        let out = FeatureExpander::new().expand(&input).unwrap();

        let block3 = 96 + 2 * INPUT_WIDTH;
        assert_eq!(out[block3 + 5], 6.0);
        let products: Vec<usize> = (96..EXPANDED_WIDTH).filter(|&i| out[i] != 0.0).collect();
        assert_eq!(products, vec![block3 + 5]);
    }

    #[test]
    fn test_wraparound_shift() {
        // x[47] * x[(47 + 1) % 48] = x[47] * x[0]
        let mut input = unit(47, 4.0);
        input[0] = 5.0;
        let out = FeatureExpander::new().expand(&input).unwrap();
        assert_eq!(out[96 + 47], 20.0);
    }

    #[test]
    fn test_last_block_is_truncated() {
        // Shift 7 only fills 14 slots: [384, 398)
        let input: Vec<f64> = (1..=INPUT_WIDTH).map(|v| v as f64).collect();
        let out = FeatureExpander::new().expand(&input).unwrap();

        let start = 96 + 6 * INPUT_WIDTH;
        assert_eq!(start, 384);
        for i in 0..14 {
            assert_eq!(out[start + i], input[i] * input[(i + 7) % INPUT_WIDTH]);
        }
    }

    #[test]
    fn test_rejects_wrong_widths() {
        let expander = FeatureExpander::new();
        for width in [0, 47, 49] {
            let err = expander.expand(&vec![1.0; width]).unwrap_err();
            assert_eq!(
                err,
                FeatureError::InvalidShape {
                    expected: INPUT_WIDTH,
                    actual: width
                }
            );
        }
    }

    #[test]
    fn test_batch_rejects_wrong_width() {
        let batch = Array2::<f64>::ones((3, 47));
        assert!(FeatureExpander::new().transform(batch.view()).is_err());
    }

    #[test]
    fn test_batch_from_strided_view() {
        // Columns of a (48, 3) array, read through a transposed view
        let columns = Array2::from_shape_fn((INPUT_WIDTH, 3), |(i, s)| (i % 5 + s) as f64);
        let expander = FeatureExpander::new();

        let out = expander.transform(columns.t()).unwrap();
        assert_eq!(out.dim(), (3, EXPANDED_WIDTH));
        for s in 0..3 {
            let single = expander.expand(&columns.column(s).to_vec()).unwrap();
            assert_eq!(out.row(s).to_vec(), single);
        }
    }

    #[test]
    fn test_empty_batch() {
        let batch = Array2::<f64>::zeros((0, INPUT_WIDTH));
        let out = FeatureExpander::new().transform(batch.view()).unwrap();
        assert_eq!(out.dim(), (0, EXPANDED_WIDTH));
    }

    proptest! {
        #[test]
        fn prop_width_prefix_and_squares(input in answers()) {
            let out = FeatureExpander::new().expand(&input).unwrap();
            prop_assert_eq!(out.len(), EXPANDED_WIDTH);
            prop_assert_eq!(&out[..INPUT_WIDTH], &input[..]);
            for i in 0..INPUT_WIDTH {
                prop_assert_eq!(out[INPUT_WIDTH + i], input[i] * input[i]);
            }
        }

        #[test]
        fn prop_deterministic(input in prop::collection::vec(-10.0f64..10.0, INPUT_WIDTH)) {
            let expander = FeatureExpander::new();
            let a = expander.expand(&input).unwrap();
            let b = expander.expand(&input).unwrap();
            let bits_a: Vec<u64> = a.iter().map(|v| v.to_bits()).collect();
            let bits_b: Vec<u64> = b.iter().map(|v| v.to_bits()).collect();
            prop_assert_eq!(bits_a, bits_b);
        }

        #[test]
        fn prop_batch_rows_are_independent(rows in prop::collection::vec(answers(), 1..6)) {
            let expander = FeatureExpander::new();
            let flat: Vec<f64> = rows.iter().flatten().copied().collect();
            let batch = Array2::from_shape_vec((rows.len(), INPUT_WIDTH), flat).unwrap();

            let out = expander.transform(batch.view()).unwrap();
            prop_assert_eq!(out.dim(), (rows.len(), EXPANDED_WIDTH));
            for (i, row) in rows.iter().enumerate() {
                let single = expander.expand(row).unwrap();
                prop_assert_eq!(out.row(i).to_vec(), single);
            }
        }
    }
}
