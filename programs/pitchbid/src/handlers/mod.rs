pub mod bid;
pub mod initialize;
pub mod pitch;
pub mod project;
pub mod registration;
pub mod roster;
pub mod user;

pub use bid::*;
pub use initialize::*;
pub use pitch::*;
pub use project::*;
pub use registration::*;
pub use roster::*;
pub use user::*;
