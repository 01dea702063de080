pub mod error;
pub mod math;
pub mod projection;
pub mod ranking;
pub mod visibility;

pub use error::{ArgumentError, AzimuthError, Result};
pub use projection::{Facing, Locatable, Pose};
pub use ranking::{RankContext, RankMode, TieBreak};
pub use visibility::{FieldOfView, ViewCone};
