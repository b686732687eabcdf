pub mod math;
pub mod loss;
pub mod optim;
pub mod classifier;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use loss::hinge::HingeLoss;
pub use loss::hinge_batch::BatchHingeLoss;
pub use loss::loss_variant::LossVariant;
pub use optim::sgd::Sgd;
pub use classifier::linear_svm::LinearSvm;
pub use classifier::train_config::TrainConfig;
