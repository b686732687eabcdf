use crate::math::matrix::Matrix;

/// Multiclass structured hinge loss ("SVM loss"), element-wise formulation.
///
/// Walks every example and every class with explicit loops. Easy to follow
/// and easy to trust; `BatchHingeLoss` computes the same function with
/// whole-matrix operations and is tested against this one.
pub struct HingeLoss;

/// Required score gap between the correct class and every other class.
const DELTA: f64 = 1.0;

impl HingeLoss {
    /// Computes the mean structured hinge loss of a mini-batch together with
    /// its gradient with respect to the weights:
    ///   L = (1/N)·Σᵢ Σ_{j≠yᵢ} max(sᵢⱼ − sᵢ,yᵢ + Δ, 0) + 0.5·reg·Σ W²
    ///
    /// `weights` — (num_features, num_classes)
    /// `inputs`  — (num_train, num_features), one example per row
    /// `labels`  — ground-truth class per example, each in [0, num_classes)
    /// `reg`     — L2 regularization strength
    ///
    /// Returns `(loss, grad)` with `grad` the same shape as `weights`.
    ///
    /// A margin of exactly zero adds nothing to the loss but still counts as
    /// a violation, so it does move the gradient.
    ///
    /// # Panics
    /// Panics if a label is out of range or the shapes are inconsistent.
    pub fn compute(weights: &Matrix, inputs: &Matrix, labels: &[usize], reg: f64) -> (f64, Matrix) {
        let num_classes = weights.cols;
        let num_features = weights.rows;
        let num_train = inputs.rows;
        assert_eq!(
            num_train,
            labels.len(),
            "inputs and labels must have equal length"
        );
        assert!(
            labels.iter().all(|&c| c < num_classes),
            "label out of range"
        );

        let mut loss = 0.0;
        let mut grad = Matrix::zeros(num_features, num_classes);

        for i in 0..num_train {
            let example = &inputs.data[i];
            let scores = score_row(example, weights);
            let correct_score = scores[labels[i]];

            let mut violations = 0;
            for j in 0..num_classes {
                if j == labels[i] {
                    continue;
                }
                let margin = scores[j] - correct_score + DELTA;
                if margin >= 0.0 {
                    violations += 1;
                    loss += margin;
                    for d in 0..num_features {
                        grad.data[d][j] += example[d];
                    }
                }
            }
            // The correct class is pushed down once per violating class.
            for d in 0..num_features {
                grad.data[d][labels[i]] -= violations as f64 * example[d];
            }
        }

        loss /= num_train as f64;
        grad = grad.map(|g| g / num_train as f64);

        // L2 penalty: 0.5·reg·Σ W² on the loss, reg·W on the gradient.
        loss += 0.5 * reg * weights.map(|w| w * w).sum();
        for d in 0..num_features {
            for j in 0..num_classes {
                grad.data[d][j] += reg * weights.data[d][j];
            }
        }

        (loss, grad)
    }
}

/// Per-class scores for one example: row · weights, length num_classes.
fn score_row(example: &[f64], weights: &Matrix) -> Vec<f64> {
    assert_eq!(example.len(), weights.rows, "Matrices are of incorrect sizes");
    (0..weights.cols)
        .map(|j| {
            example
                .iter()
                .zip(weights.data.iter())
                .map(|(x, w_row)| x * w_row[j])
                .sum()
        })
        .collect()
}
