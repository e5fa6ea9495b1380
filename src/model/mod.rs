mod policy;
mod regression;

pub use policy::{Action, PolicyTable};
pub use regression::RegressionModel;
