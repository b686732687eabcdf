use crate::loss::loss_variant::LossVariant;

/// Configuration for a `LinearSvm::train` run.
///
/// # Fields
/// - `iterations` — number of SGD steps; each step samples one mini-batch
/// - `batch_size` — examples per mini-batch, sampled with replacement
/// - `reg`        — L2 regularization strength passed to the loss kernel
/// - `variant`    — which hinge-loss formulation computes loss and gradient
pub struct TrainConfig {
    pub iterations: usize,
    pub batch_size: usize,
    pub reg: f64,
    pub variant: LossVariant,
}

impl TrainConfig {
    pub fn new(iterations: usize, batch_size: usize, reg: f64, variant: LossVariant) -> Self {
        TrainConfig {
            iterations,
            batch_size,
            reg,
            variant,
        }
    }
}
