//! Playable characters

/// A selectable character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub name: &'static str,
    /// Texture key of the portrait, also used as the in-game sprite
    pub sprite: &'static str,
    /// Sound key played when the pointer moves over the portrait
    pub voice: Option<&'static str>,
}

/// Roster in grid order
pub const ROSTER: [Character; 7] = [
    Character { name: "Sila", sprite: "sila", voice: Some("sila-sound") },
    Character { name: "Cigdem", sprite: "cigdem", voice: Some("cigdem-sound") },
    Character { name: "Ilker", sprite: "ilker", voice: Some("ilker-sound") },
    Character { name: "Eren", sprite: "eren", voice: Some("eren-sound") },
    Character { name: "Beyza", sprite: "beyza", voice: None },
    Character { name: "Ali", sprite: "ali", voice: Some("ali-sound") },
    Character { name: "Zeynep", sprite: "zeynep", voice: Some("zeynep-sound") },
];

impl Default for Character {
    fn default() -> Self {
        ROSTER[0]
    }
}

#[cfg(test)]
pub fn find(name: &str) -> Option<Character> {
    ROSTER.iter().copied().find(|c| c.name == name)
}
