//! Categorical hairstyle attributes.
//!
//! Every enum is totally ordered by declaration order, so comparisons like
//! `length >= HairLength::ShoulderLength` read the way a stylist would say
//! them. Reordering variants changes scoring.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::Gender;

macro_rules! hair_attribute {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Lower-case human-readable name.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

hair_attribute! {
    /// Shortest to longest.
    HairLength {
        None => "none",
        VeryShort => "very short",
        EarLength => "ear length",
        ChinLength => "chin length",
        ShoulderLength => "shoulder length",
        MidBackLength => "mid back length",
        WaistLength => "waist length",
    }
}

hair_attribute! {
    /// Straightest to tightest curl.
    HairTexture {
        None => "none",
        Straight => "straight",
        Wavy => "wavy",
        Curly => "curly",
        Coily => "coily",
    }
}

hair_attribute! {
    HairVolume {
        None => "none",
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

hair_attribute! {
    HairLayers {
        None => "none",
        Light => "light",
        Medium => "medium",
        Marked => "marked",
    }
}

hair_attribute! {
    HairBangs {
        None => "none",
        FullBangs => "full bangs",
        SideSwept => "side swept",
        CurtainBangs => "curtain bangs",
        WispyBangs => "wispy bangs",
        MicroBangs => "micro bangs",
    }
}

hair_attribute! {
    /// Overall cut. Ordering carries no meaning here.
    HairStructure {
        GeneralCut => "general cut",
        Afro => "afro",
        Bald => "bald",
        Beehive => "beehive",
        Bob => "bob",
        Bouffant => "bouffant",
        BowlCut => "bowl cut",
        Braid => "braid",
        Bun => "bun",
        Caesar => "caesar",
        Chonmage => "chonmage",
        CombOver => "comb over",
        Cornrows => "cornrows",
        CrewCut => "crew cut",
        Crop => "crop",
        CroydonFacelift => "croydon facelift",
        CurtainedHair => "curtained hair",
        Devilock => "devilock",
        Dreadlocks => "dreadlocks",
        Ducktail => "ducktail",
        EmoHair => "emo hair",
        Fauxhawk => "fauxhawk",
        Flattop => "flattop",
        FrenchBraid => "french braid",
        FrenchTwist => "french twist",
        HiTopFade => "hi top fade",
        HimeCut => "hime cut",
        HorseshoeFlattop => "horseshoe flattop",
        InductionCut => "induction cut",
        JimmyLinHairstyle => "jimmy lin hairstyle",
        LayeredHair => "layered hair",
        LibertySpikesHair => "liberty spikes hair",
        MenPompadour => "men pompadour",
        MenWithSquareAngles => "men with square angles",
        Mohawk => "mohawk",
        MopTopHair => "mop top hair",
        Mullet => "mullet",
        OdangoHair => "odango hair",
        Pageboy => "pageboy",
        Perm => "perm",
        Pixie => "pixie",
        Ponytail => "ponytail",
        Quiff => "quiff",
        Rattail => "rattail",
        RazorCut => "razor cut",
        Ringlet => "ringlet",
        Shag => "shag",
        SidePartStyle => "side part style",
        SlickedBackStyle => "slicked back style",
        SpikyHair => "spiky hair",
        TaperedSidesStyle => "tapered sides style",
        TheRachel => "the rachel",
        TonsureHair => "tonsure hair",
        Updo => "updo",
        WaveHairStyle => "wave hair style",
    }
}

hair_attribute! {
    HairParting {
        NoneDefined => "none defined",
        Center => "center",
        Side => "side",
        DeepSide => "deep side",
        ZigZag => "zig zag",
    }
}

/// Attributes of one taxonomy entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HairstyleAttributes {
    pub length: HairLength,
    pub texture: HairTexture,
    pub volume: HairVolume,
    pub layers: HairLayers,
    pub bangs: HairBangs,
    pub structure: HairStructure,
    pub parting: HairParting,
    #[serde(default = "both_genders")]
    pub applicable_gender: BTreeSet<Gender>,
}

fn both_genders() -> BTreeSet<Gender> {
    BTreeSet::from([Gender::Female, Gender::Male])
}

impl HairstyleAttributes {
    /// Whether the style is offered to `gender`. `Unknown` matches every style.
    pub fn suits_gender(&self, gender: Gender) -> bool {
        gender == Gender::Unknown || self.applicable_gender.contains(&gender)
    }

    pub fn has_bangs(&self) -> bool {
        self.bangs != HairBangs::None
    }

    pub fn has_layers(&self) -> bool {
        self.layers != HairLayers::None
    }
}
