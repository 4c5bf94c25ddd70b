pub mod prediction;
pub mod user;

pub use prediction::PredictionRecord;
pub use user::{User, UserPublic};
