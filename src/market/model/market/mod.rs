pub mod indices;
pub mod movers;
pub mod sectors;
pub mod volume;
