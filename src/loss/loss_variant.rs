/// Selects which hinge-loss formulation the training loop uses.
///
/// - `PerExample` — explicit per-example/per-class loops (`HingeLoss`);
///   the reference implementation.
/// - `Batch`      — whole-matrix formulation (`BatchHingeLoss`); same loss,
///   slightly different regularization gradient (see
///   `BatchHingeLoss::compute`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossVariant {
    PerExample,
    Batch,
}
