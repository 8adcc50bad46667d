use serde::{
    Deserialize,
    Serialize,
};

/// Data about a particular move.
///
/// Whether a move is a fast attack or a special attack is not part of the move data. It depends on
/// how species reference the move, so it is always computed from species data.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    /// Unique identifier of the move.
    pub id: i64,
    /// Name of the move.
    ///
    /// Lookup by name is case-insensitive.
    pub name: String,
    /// Name of the move's type.
    #[serde(rename = "type")]
    pub move_type: String,
    /// Damage dealt to the target.
    pub damage: i64,
    /// Energy the move generates or consumes.
    pub energy: i64,
    /// Damage per second.
    pub dps: f64,
    /// Duration of the move, in milliseconds.
    pub duration: i64,
}
