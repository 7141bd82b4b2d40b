mod award;
mod event;
mod r#match;
mod points;
mod team;

pub use award::*;
pub use event::*;
pub use points::*;
pub use r#match::*;
pub use team::*;

/// A team identifier such as `frc254`.
pub type TeamKey = String;
