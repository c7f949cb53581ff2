mod builder;
mod defaults;
mod file;

pub use builder::{build_enumerate_config, build_fold_config};
