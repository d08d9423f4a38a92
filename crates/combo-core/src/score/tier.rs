use serde::{Serialize, Serializer};
use strum::IntoStaticStr;

/// Rating of a genre/game combination.
///
/// Ordering follows the numeric value, so `Masterpiece` is the greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IntoStaticStr)]
#[repr(u8)]
pub enum ScoreTier {
    #[strum(serialize = "not bad")]
    NotBad = 1,
    #[strum(serialize = "original")]
    Original = 2,
    #[strum(serialize = "masterpiece")]
    Masterpiece = 4,
}

impl ScoreTier {
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// English display label
    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Korean display label
    pub fn localized_label(&self) -> &'static str {
        match self {
            Self::Masterpiece => "걸작",
            Self::Original => "독창적",
            Self::NotBad => "나쁘지 않음",
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Serialized as the bare integer so JSON output matches the CSV tier numbers.
impl Serialize for ScoreTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}
