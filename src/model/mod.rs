pub mod categories;
pub mod num;
pub mod observation;
pub mod weights;
