pub mod errors;
pub mod inventory;
pub mod late_fee;
pub mod notice;
pub mod value_objects;

pub use errors::*;
pub use inventory::Inventory;
pub use late_fee::calculate_dynamic_late_fee;
pub use notice::LendingNotice;
pub use value_objects::*;
