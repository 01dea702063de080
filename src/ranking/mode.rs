/// How a target's angular offset from forward is turned into a rank key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankMode {
    /// Unsigned angle from forward in `[0, 180]`; left and right rank alike.
    #[default]
    Magnitude,
    /// Clockwise sweep from forward in `[0, 360)`.
    Clockwise,
    /// Counter-clockwise sweep from forward in `[0, 360)`.
    CounterClockwise,
}

/// Secondary ordering applied when two targets have equal rank keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Tied targets compare equal; their relative order is unspecified.
    #[default]
    None,
    /// The target closer to the observer ranks first.
    Nearest,
    /// The target farther from the observer ranks first.
    Farthest,
}
