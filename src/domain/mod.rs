mod food;
mod patch;

pub use food::{CreatedFood, FoodDto, NewFood};
pub use patch::PatchOperation;
