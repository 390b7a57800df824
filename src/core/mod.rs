pub mod constants;
pub mod contact;
pub mod particles;
pub mod schedule;
pub mod theme;
pub mod typing;

pub use contact::*;
pub use particles::*;
pub use schedule::*;
pub use theme::*;
pub use typing::*;
