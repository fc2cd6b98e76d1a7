pub mod model;
pub mod nse;
pub mod task;
