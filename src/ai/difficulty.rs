use serde::{Deserialize, Serialize};

/// User-facing strength of the engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Demonic,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Demonic,
    ];

    /// 1-based level, Easy = 1.
    pub fn level(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Demonic => 4,
        }
    }

    /// Search depth in plies: twice the level, except the top tier which
    /// jumps to 10.
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Demonic => 10,
            other => other.level() * 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Demonic => "Demonic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_mapping() {
        let depths: Vec<u32> = Difficulty::ALL.iter().map(|d| d.depth()).collect();
        assert_eq!(depths, vec![2, 4, 6, 10]);
    }

    #[test]
    fn levels_and_names() {
        let levels: Vec<u32> = Difficulty::ALL.iter().map(|d| d.level()).collect();
        assert_eq!(levels, vec![1, 2, 3, 4]);
        assert_eq!(Difficulty::Demonic.name(), "Demonic");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            level: Difficulty,
        }
        let parsed: Wrapper = toml::from_str("level = \"demonic\"").unwrap();
        assert_eq!(parsed.level, Difficulty::Demonic);
    }
}
