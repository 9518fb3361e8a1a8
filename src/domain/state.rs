use std::fmt;

/// Lifecycle state of a single key
///
/// `Failed` is transient: a failed transform reports its failure and the key
/// returns to `Loaded` with the previous sequence intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum KeyState {
    Absent = 0,
    Loaded = 1,
    Transforming = 2,
    Failed = 3,
}

impl KeyState {
    /// Decode a state previously stored with `as u8`
    pub fn from_u8(raw: u8) -> Self {
        match raw {
            1 => KeyState::Loaded,
            2 => KeyState::Transforming,
            3 => KeyState::Failed,
            _ => KeyState::Absent,
        }
    }
}

impl fmt::Display for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyState::Absent => "absent",
            KeyState::Loaded => "loaded",
            KeyState::Transforming => "transforming",
            KeyState::Failed => "failed",
        };
        f.write_str(name)
    }
}
