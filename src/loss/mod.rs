pub mod hinge;
pub mod hinge_batch;
pub mod loss_variant;

pub use hinge::HingeLoss;
pub use hinge_batch::BatchHingeLoss;
pub use loss_variant::LossVariant;
