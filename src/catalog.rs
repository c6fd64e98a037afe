//! Static game data: ingredient catalog, creature part lists, flavor text
//!
//! Index order of every list here is part of the generation contract.
//! Reordering an entry changes which creature a recipe produces.

use serde::{Deserialize, Serialize};

/// A catalog ingredient the player can drop into the cauldron
#[derive(Debug, PartialEq, Eq)]
pub struct Ingredient {
    /// Stable short key (what recipes and fingerprints are built from)
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    /// Display color as `#rrggbb`
    pub color: &'static str,
    /// CSS glow color
    pub glow: &'static str,
    /// Name fragments used by the name synthesizer
    pub syllables: &'static [&'static str],
}

/// The six ingredients on the shelf
pub static INGREDIENTS: [Ingredient; 6] = [
    Ingredient {
        id: "fire",
        name: "Fire Crystals",
        emoji: "🔴",
        color: "#ff4a4a",
        glow: "rgba(255,74,74,0.5)",
        syllables: &["Blaze", "Pyr", "Ign", "Flam"],
    },
    Ingredient {
        id: "moon",
        name: "Moon Dust",
        emoji: "🟣",
        color: "#c4b5fd",
        glow: "rgba(196,181,253,0.5)",
        syllables: &["Luna", "Nyx", "Cres", "Lum"],
    },
    Ingredient {
        id: "star",
        name: "Star Nectar",
        emoji: "🟡",
        color: "#ffd700",
        glow: "rgba(255,215,0,0.5)",
        syllables: &["Stella", "Nova", "Ast", "Sol"],
    },
    Ingredient {
        id: "ocean",
        name: "Ocean Tears",
        emoji: "🔵",
        color: "#4ac3ff",
        glow: "rgba(74,195,255,0.5)",
        syllables: &["Aqua", "Tidal", "Mar", "Rip"],
    },
    Ingredient {
        id: "forest",
        name: "Forest Moss",
        emoji: "🟢",
        color: "#4aff91",
        glow: "rgba(74,255,145,0.5)",
        syllables: &["Fern", "Moss", "Leaf", "Sylv"],
    },
    Ingredient {
        id: "thunder",
        name: "Thunder Sparks",
        emoji: "⚡",
        color: "#ffe44a",
        glow: "rgba(255,228,74,0.5)",
        syllables: &["Volt", "Zap", "Bolt", "Storm"],
    },
];

/// Find a catalog ingredient by id
pub fn lookup(id: &str) -> Option<&'static Ingredient> {
    INGREDIENTS.iter().find(|ing| ing.id == id)
}

/// Flavor text pool, indexed by `fingerprint % len`
pub static DESCRIPTIONS: [&str; 10] = [
    "Loves to dance in the moonlight and eat sparkle berries.",
    "This shy creature hides behind clouds when startled.",
    "Known for its melodious humming at dawn.",
    "Leaves a trail of glitter wherever it bounces.",
    "Can change color depending on its mood!",
    "Enjoys splashing in puddles of liquid starlight.",
    "Has been spotted juggling small comets for fun.",
    "Sleeps curled up inside a rainbow cocoon.",
    "Its laughter sounds like tiny wind chimes.",
    "Collects shiny pebbles from enchanted rivers.",
];

/// Declares a creature part enum with its fixed draw order and string tags.
macro_rules! part_list {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All variants in draw order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }

            pub fn from_str(s: &str) -> Option<Self> {
                match s {
                    $($tag => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

part_list!(
    /// Overall silhouette
    BodyShape {
        Blob => "blob",
        Round => "round",
        Tall => "tall",
        Spiky => "spiky",
        Winged => "winged",
        Squid => "squid",
    }
);

part_list!(
    /// Eye style
    EyeStyle {
        Big => "big",
        Cat => "cat",
        Multi => "multi",
        Cyclops => "cyclops",
        Sparkly => "sparkly",
        Sleepy => "sleepy",
    }
);

part_list!(
    /// Limbs and other attachments
    Appendage {
        Arms => "arms",
        Legs => "legs",
        Wings => "wings",
        Tail => "tail",
        Antennae => "antennae",
        Tentacles => "tentacles",
    }
);

part_list!(
    /// Cosmetic accessory. `None` must stay first: rare draws skip index 0.
    Accessory {
        None => "none",
        Crown => "crown",
        Bow => "bow",
        Glasses => "glasses",
        Scarf => "scarf",
        Horns => "horns",
    }
);
