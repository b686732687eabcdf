use crate::math::matrix::Matrix;

/// Multiclass structured hinge loss, whole-matrix formulation.
///
/// Computes the same loss as `HingeLoss` as a fixed number of matrix
/// operations: one score multiply, one per-row broadcast subtract, one
/// clamp, one mask build, one transpose multiply.
pub struct BatchHingeLoss;

const DELTA: f64 = 1.0;

impl BatchHingeLoss {
    /// Same contract as `HingeLoss::compute`.
    ///
    /// The regularization term of the gradient is `reg · Σ W` added to every
    /// entry (a scalar broadcast), not `reg · W` element-wise as in the
    /// element-wise formulation. The two gradients therefore agree on the
    /// data term only; callers that need the exact L2 gradient should use
    /// `HingeLoss`.
    ///
    /// # Panics
    /// Panics if a label is out of range or the shapes are inconsistent.
    pub fn compute(weights: &Matrix, inputs: &Matrix, labels: &[usize], reg: f64) -> (f64, Matrix) {
        let num_train = inputs.rows;
        assert_eq!(
            num_train,
            labels.len(),
            "inputs and labels must have equal length"
        );
        assert!(
            labels.iter().all(|&c| c < weights.cols),
            "label out of range"
        );

        // (num_train, num_classes) raw scores, one row per example.
        let scores = inputs.clone() * weights.clone();

        // Hinge margins: subtract each example's correct-class score from its
        // whole row, shift by Δ, clamp at zero.
        let correct: Vec<f64> = labels
            .iter()
            .enumerate()
            .map(|(i, &c)| scores.data[i][c])
            .collect();
        let mut margins = sub_row_scalar(&scores, &correct).map(|m| (m + DELTA).max(0.0));

        // The correct class must never contribute to its own loss.
        for (i, &c) in labels.iter().enumerate() {
            margins.data[i][c] = 0.0;
        }

        let mut loss = margins.sum() / num_train as f64;
        loss += 0.5 * reg * weights.map(|w| w * w).sum();

        // Indicator of violating margins; each row's correct-class entry is
        // overwritten with -(number of violations in that row).
        let mut mask = margins.map(|m| if m > 0.0 { 1.0 } else { 0.0 });
        for (i, &c) in labels.iter().enumerate() {
            let violations: f64 = mask.data[i].iter().sum();
            mask.data[i][c] = -violations;
        }

        let mut grad = (inputs.transpose() * mask).map(|g| g / num_train as f64);

        let weight_sum = weights.sum();
        grad = grad.map(|g| g + reg * weight_sum);

        (loss, grad)
    }
}

/// Subtracts `row_values[i]` from every entry of row `i`.
fn sub_row_scalar(m: &Matrix, row_values: &[f64]) -> Matrix {
    assert_eq!(m.rows, row_values.len());
    let data = m
        .data
        .iter()
        .zip(row_values.iter())
        .map(|(row, &v)| row.iter().map(|x| x - v).collect())
        .collect();
    Matrix::from_data(data)
}
