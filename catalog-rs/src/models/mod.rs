// Re-export all model types
pub use self::product::*;

mod product;
