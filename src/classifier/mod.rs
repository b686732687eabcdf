pub mod linear_svm;
pub mod train_config;

pub use linear_svm::LinearSvm;
pub use train_config::TrainConfig;
