pub mod amount;
pub mod timestamp;
