use rand::Rng;

use crate::classifier::train_config::TrainConfig;
use crate::loss::hinge::HingeLoss;
use crate::loss::hinge_batch::BatchHingeLoss;
use crate::loss::loss_variant::LossVariant;
use crate::math::matrix::Matrix;
use crate::optim::sgd::Sgd;

/// A multiclass linear classifier trained with the structured hinge loss.
///
/// Owns the (num_features, num_classes) weight matrix across training steps.
/// The loss kernels themselves are stateless and only read it.
pub struct LinearSvm {
    pub weights: Matrix,
}

impl LinearSvm {
    /// Small gaussian weights, so initial scores are near zero for every class.
    pub fn new(num_features: usize, num_classes: usize) -> LinearSvm {
        LinearSvm {
            weights: Matrix::gaussian(num_features, num_classes, 0.001),
        }
    }

    /// Raw class scores X·W, one row per example.
    pub fn scores(&self, inputs: &Matrix) -> Matrix {
        inputs.clone() * self.weights.clone()
    }

    /// Highest-scoring class index for every example.
    pub fn predict(&self, inputs: &Matrix) -> Vec<usize> {
        self.scores(inputs).data.iter().map(|row| argmax(row)).collect()
    }

    /// Runs `config.iterations` steps of mini-batch SGD and returns the loss
    /// recorded at every step.
    ///
    /// Each step samples `config.batch_size` examples with replacement,
    /// computes loss and gradient with the configured formulation, and lets
    /// the optimizer apply the update.
    ///
    /// # Panics
    /// Panics if `inputs` is empty, lengths mismatch, or `batch_size == 0`.
    pub fn train(
        &mut self,
        inputs: &Matrix,
        labels: &[usize],
        optimizer: &Sgd,
        config: &TrainConfig,
    ) -> Vec<f64> {
        assert!(inputs.rows > 0, "inputs must not be empty");
        assert_eq!(
            inputs.rows,
            labels.len(),
            "inputs and labels must have equal length"
        );
        assert!(config.batch_size > 0, "batch_size must be at least 1");

        let mut rng = rand::thread_rng();
        let mut history = Vec::with_capacity(config.iterations);

        for _ in 0..config.iterations {
            let (batch_inputs, batch_labels) =
                sample_batch(inputs, labels, config.batch_size, &mut rng);

            let (loss, grad) = compute_loss(
                &self.weights,
                &batch_inputs,
                &batch_labels,
                config.reg,
                config.variant,
            );

            history.push(loss);
            optimizer.step(&mut self.weights, &grad);
        }

        history
    }
}

/// Loss and gradient for one mini-batch — dispatches on `LossVariant`.
fn compute_loss(
    weights: &Matrix,
    inputs: &Matrix,
    labels: &[usize],
    reg: f64,
    variant: LossVariant,
) -> (f64, Matrix) {
    match variant {
        LossVariant::PerExample => HingeLoss::compute(weights, inputs, labels, reg),
        LossVariant::Batch => BatchHingeLoss::compute(weights, inputs, labels, reg),
    }
}

/// Samples `batch_size` (example, label) pairs uniformly with replacement.
fn sample_batch<R: Rng>(
    inputs: &Matrix,
    labels: &[usize],
    batch_size: usize,
    rng: &mut R,
) -> (Matrix, Vec<usize>) {
    let mut rows = Vec::with_capacity(batch_size);
    let mut picked = Vec::with_capacity(batch_size);
    for _ in 0..batch_size {
        let idx = rng.gen_range(0..inputs.rows);
        rows.push(inputs.data[idx].clone());
        picked.push(labels[idx]);
    }
    (Matrix::from_data(rows), picked)
}

/// Index of the maximum element in a slice.
fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_takes_row_argmax() {
        let mut svm = LinearSvm::new(2, 3);
        svm.weights = Matrix::from_data(vec![vec![1.0, 0.0, -1.0], vec![0.0, 1.0, 0.0]]);
        let inputs = Matrix::from_data(vec![
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![-1.0, 0.0],
        ]);
        assert_eq!(svm.predict(&inputs), vec![0, 1, 2]);
    }

    #[test]
    fn training_reduces_loss_on_separable_data() {
        // Two well-separated point clouds, with a trailing bias feature.
        let mut rows = Vec::new();
        let mut labels = Vec::new();
        for i in 0..20 {
            let t = i as f64 / 20.0;
            rows.push(vec![t, 5.0 + t, 1.0]);
            labels.push(0);
            rows.push(vec![5.0 + t, t, 1.0]);
            labels.push(1);
        }
        let inputs = Matrix::from_data(rows);

        let mut svm = LinearSvm::new(3, 2);
        let optimizer = Sgd::new(0.01);
        let config = TrainConfig::new(300, 40, 1e-4, LossVariant::PerExample);
        let history = svm.train(&inputs, &labels, &optimizer, &config);

        let early: f64 = history[..10].iter().sum::<f64>() / 10.0;
        let late: f64 = history[history.len() - 10..].iter().sum::<f64>() / 10.0;
        assert!(late < early, "loss should fall: early {early:.4}, late {late:.4}");

        let predictions = svm.predict(&inputs);
        let correct = predictions
            .iter()
            .zip(labels.iter())
            .filter(|(p, y)| p == y)
            .count();
        assert!(correct >= 36, "only {correct}/40 training points classified correctly");
    }

    #[test]
    fn batch_variant_records_one_loss_per_step() {
        let inputs = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        let labels = vec![0, 1];
        let mut svm = LinearSvm::new(2, 2);
        let optimizer = Sgd::new(0.1);
        let config = TrainConfig::new(25, 2, 0.01, LossVariant::Batch);
        let history = svm.train(&inputs, &labels, &optimizer, &config);
        assert_eq!(history.len(), 25);
        assert!(history.iter().all(|loss| loss.is_finite()));
    }
}
