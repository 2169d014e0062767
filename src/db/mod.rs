pub mod entities;
pub mod lookups;
pub mod repositories;

pub use entities::*;
pub use repositories::*;
