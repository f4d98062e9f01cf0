//! The built-in hairstyle catalog.
//!
//! Entries keep their declaration order; ranking ties in the recommender
//! resolve in this order.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::analysis::Gender;
use crate::error::{Error, Result};
use crate::hair::{
    HairBangs as Bangs, HairLayers as Layers, HairLength as Length, HairParting as Parting,
    HairStructure as Structure, HairTexture as Texture, HairVolume as Volume, HairstyleAttributes,
};

/// A named style and its attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HairstyleEntry {
    pub name: String,
    #[serde(flatten)]
    pub attributes: HairstyleAttributes,
}

/// Read-only mapping from style name to attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    entries: Vec<HairstyleEntry>,
}

impl Taxonomy {
    /// Build a taxonomy, rejecting blank or duplicate names and styles that
    /// apply to no gender.
    pub fn new(entries: Vec<HairstyleEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(Error::InvalidTaxonomy("style with empty name".into()));
            }
            if entry.attributes.applicable_gender.is_empty() {
                return Err(Error::InvalidTaxonomy(format!(
                    "style {} applies to no gender",
                    entry.name
                )));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(Error::DuplicateStyle(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The catalog compiled into the crate, built on first use.
    pub fn builtin() -> &'static Taxonomy {
        static BUILTIN: OnceLock<Taxonomy> = OnceLock::new();
        BUILTIN.get_or_init(|| Taxonomy {
            entries: builtin_entries(),
        })
    }

    /// Load a taxonomy from a JSON array of entries.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let entries: Vec<HairstyleEntry> = serde_json::from_reader(BufReader::new(file))?;
        Self::new(entries)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<HairstyleEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn get(&self, name: &str) -> Option<&HairstyleAttributes> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.attributes)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HairstyleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const MALE: &[Gender] = &[Gender::Male];
const FEMALE: &[Gender] = &[Gender::Female];
const ANY: &[Gender] = &[Gender::Female, Gender::Male];

#[allow(clippy::too_many_arguments)]
fn style(
    name: &str,
    length: Length,
    texture: Texture,
    volume: Volume,
    layers: Layers,
    bangs: Bangs,
    structure: Structure,
    parting: Parting,
    genders: &[Gender],
) -> HairstyleEntry {
    HairstyleEntry {
        name: name.to_string(),
        attributes: HairstyleAttributes {
            length,
            texture,
            volume,
            layers,
            bangs,
            structure,
            parting,
            applicable_gender: genders.iter().copied().collect(),
        },
    }
}

#[rustfmt::skip]
fn builtin_entries() -> Vec<HairstyleEntry> {
    vec![
        style("Aaron_Kwok", Length::EarLength, Texture::Straight, Volume::Medium, Layers::Light, Bangs::None, Structure::GeneralCut, Parting::Side, MALE),
        style("Afro", Length::EarLength, Texture::Coily, Volume::High, Layers::None, Bangs::None, Structure::Afro, Parting::NoneDefined, ANY),
        style("Bald", Length::None, Texture::None, Volume::None, Layers::None, Bangs::None, Structure::Bald, Parting::NoneDefined, ANY),
        style("Beehive", Length::ShoulderLength, Texture::Straight, Volume::High, Layers::None, Bangs::None, Structure::Beehive, Parting::NoneDefined, FEMALE),
        style("Bob", Length::ChinLength, Texture::Straight, Volume::Medium, Layers::Light, Bangs::None, Structure::Bob, Parting::Side, FEMALE),
        style("Bouffant", Length::ShoulderLength, Texture::Straight, Volume::High, Layers::Light, Bangs::None, Structure::Bouffant, Parting::NoneDefined, FEMALE),
        style("Bowl_Cut", Length::EarLength, Texture::Straight, Volume::Medium, Layers::None, Bangs::FullBangs, Structure::BowlCut, Parting::NoneDefined, ANY),
        style("Bun", Length::MidBackLength, Texture::Straight, Volume::Medium, Layers::None, Bangs::None, Structure::Bun, Parting::NoneDefined, FEMALE),
        style("Caesar", Length::VeryShort, Texture::Straight, Volume::Low, Layers::Light, Bangs::FullBangs, Structure::Caesar, Parting::NoneDefined, MALE),
        style("Chonmage", Length::MidBackLength, Texture::Straight, Volume::Medium, Layers::None, Bangs::None, Structure::Chonmage, Parting::NoneDefined, MALE),
        style("Comb_Over", Length::EarLength, Texture::Straight, Volume::Low, Layers::Light, Bangs::None, Structure::CombOver, Parting::Side, MALE),
        style("Cornrows", Length::ShoulderLength, Texture::Coily, Volume::Low, Layers::None, Bangs::None, Structure::Cornrows, Parting::NoneDefined, ANY),
        style("Crew_Cut", Length::VeryShort, Texture::Straight, Volume::Low, Layers::None, Bangs::None, Structure::CrewCut, Parting::NoneDefined, MALE),
        style("Crop", Length::VeryShort, Texture::Straight, Volume::Medium, Layers::Marked, Bangs::FullBangs, Structure::Crop, Parting::NoneDefined, MALE),
        style("Croydon_Facelift", Length::MidBackLength, Texture::Straight, Volume::Low, Layers::None, Bangs::None, Structure::CroydonFacelift, Parting::NoneDefined, FEMALE),
        style("Curly", Length::ShoulderLength, Texture::Curly, Volume::High, Layers::Marked, Bangs::None, Structure::GeneralCut, Parting::Side, ANY),
        style("Curly_Hair", Length::ShoulderLength, Texture::Curly, Volume::High, Layers::Marked, Bangs::None, Structure::GeneralCut, Parting::Side, ANY),
        style("Curtained_Hair", Length::ChinLength, Texture::Straight, Volume::Medium, Layers::Light, Bangs::CurtainBangs, Structure::CurtainedHair, Parting::Center, ANY),
        style("Cute_Ponytails", Length::MidBackLength, Texture::Straight, Volume::Medium, Layers::None, Bangs::None, Structure::Ponytail, Parting::Center, FEMALE),
        style("Devilock", Length::ChinLength, Texture::Straight, Volume::Medium, Layers::None, Bangs::FullBangs, Structure::Devilock, Parting::NoneDefined, MALE),
        style("Dreadlocks", Length::MidBackLength, Texture::Coily, Volume::High, Layers::None, Bangs::None, Structure::Dreadlocks, Parting::NoneDefined, ANY),
        style("Ducktail", Length::EarLength, Texture::Straight, Volume::Medium, Layers::Light, Bangs::None, Structure::Ducktail, Parting::NoneDefined, MALE),
        style("Emo_hair", Length::ShoulderLength, Texture::Straight, Volume::Medium, Layers::Marked, Bangs::SideSwept, Structure::EmoHair, Parting::DeepSide, ANY),
        style("Fauxhawk", Length::EarLength, Texture::Straight, Volume::Medium, Layers::Light, Bangs::None, Structure::Fauxhawk, Parting::NoneDefined, ANY),
        style("Flattop", Length::VeryShort, Texture::Straight, Volume::Medium, Layers::None, Bangs::None, Structure::Flattop, Parting::NoneDefined, MALE),
        style("French_Braid", Length::MidBackLength, Texture::Straight, Volume::Medium, Layers::None, Bangs::None, Structure::FrenchBraid, Parting::NoneDefined, FEMALE),
        style("French_Twist", Length::ShoulderLength, Texture::Straight, Volume::Medium, Layers::None, Bangs::None, Structure::FrenchTwist, Parting::NoneDefined, FEMALE),
        style("Hi-top_Fade", Length::EarLength, Texture::Coily, Volume::High, Layers::None, Bangs::None, Structure::HiTopFade, Parting::NoneDefined, MALE),
        style("Hime_Cut", Length::WaistLength, Texture::Straight, Volume::Medium, Layers::None, Bangs::FullBangs, Structure::HimeCut, Parting::NoneDefined, FEMALE),
        style("Horseshoe_Flattop", Length::VeryShort, Texture::Straight, Volume::Low, Layers::None, Bangs::None, Structure::HorseshoeFlattop, Parting::NoneDefined, MALE),
        style("Induction_Cut", Length::VeryShort, Texture::Straight, Volume::Low, Layers::None, Bangs::None, Structure::InductionCut, Parting::NoneDefined, MALE),
        style("Jimmy_Lin_Hairstyle", Length::EarLength, Texture::Straight, Volume::Medium, Layers::Light, Bangs::None, Structure::JimmyLinHairstyle, Parting::Center, MALE),
        style("Layered_Hair", Length::ShoulderLength, Texture::Wavy, Volume::Medium, Layers::Marked, Bangs::None, Structure::LayeredHair, Parting::Side, ANY),
        style("Liberty_Spikes_Hair", Length::ChinLength, Texture::Straight, Volume::High, Layers::None, Bangs::None, Structure::LibertySpikesHair, Parting::NoneDefined, ANY),
        style("Long_Hair", Length::MidBackLength, Texture::Wavy, Volume::Medium, Layers::Light, Bangs::None, Structure::GeneralCut, Parting::Center, ANY),
        style("Medium-Length_Hair", Length::ShoulderLength, Texture::Straight, Volume::Medium, Layers::Light, Bangs::None, Structure::GeneralCut, Parting::Side, ANY),
        style("Men_Pompadour", Length::EarLength, Texture::Straight, Volume::High, Layers::Light, Bangs::None, Structure::MenPompadour, Parting::NoneDefined, MALE),
        style("Men_With_Square_Angles", Length::EarLength, Texture::Straight, Volume::Medium, Layers::Light, Bangs::None, Structure::MenWithSquareAngles, Parting::Side, MALE),
        style("Mohawk", Length::ChinLength, Texture::Straight, Volume::High, Layers::None, Bangs::None, Structure::Mohawk, Parting::NoneDefined, ANY),
        style("Mop-Top_Hair", Length::ChinLength, Texture::Straight, Volume::Medium, Layers::Light, Bangs::FullBangs, Structure::MopTopHair, Parting::NoneDefined, MALE),
        style("Mullet", Length::ShoulderLength, Texture::Straight, Volume::Medium, Layers::Marked, Bangs::None, Structure::Mullet, Parting::NoneDefined, ANY),
        style("Odango_Hair", Length::MidBackLength, Texture::Straight, Volume::Medium, Layers::None, Bangs::None, Structure::OdangoHair, Parting::Center, FEMALE),
        style("Pageboy", Length::ChinLength, Texture::Straight, Volume::Medium, Layers::None, Bangs::FullBangs, Structure::Pageboy, Parting::NoneDefined, FEMALE),
        style("Perm", Length::ShoulderLength, Texture::Curly, Volume::High, Layers::Light, Bangs::None, Structure::Perm, Parting::Side, ANY),
        style("Pixie_Cut", Length::EarLength, Texture::Straight, Volume::Medium, Layers::Marked, Bangs::SideSwept, Structure::Pixie, Parting::Side, FEMALE),
        style("Ponytail", Length::MidBackLength, Texture::Straight, Volume::Medium, Layers::None, Bangs::None, Structure::Ponytail, Parting::NoneDefined, FEMALE),
        style("Quiff", Length::EarLength, Texture::Straight, Volume::High, Layers::Light, Bangs::None, Structure::Quiff, Parting::NoneDefined, MALE),
        style("Rattail", Length::ShoulderLength, Texture::Straight, Volume::Low, Layers::None, Bangs::None, Structure::Rattail, Parting::NoneDefined, ANY),
        style("Razor_Cut", Length::ShoulderLength, Texture::Straight, Volume::Medium, Layers::Marked, Bangs::SideSwept, Structure::RazorCut, Parting::Side, ANY),
        style("Ringlet", Length::ShoulderLength, Texture::Curly, Volume::High, Layers::Light, Bangs::None, Structure::Ringlet, Parting::Side, FEMALE),
        style("Shag", Length::ShoulderLength, Texture::Wavy, Volume::High, Layers::Marked, Bangs::CurtainBangs, Structure::Shag, Parting::Center, ANY),
        style("Shoulder-Length_Hair", Length::ShoulderLength, Texture::Wavy, Volume::Medium, Layers::Light, Bangs::None, Structure::GeneralCut, Parting::Side, ANY),
        style("Side_Part", Length::EarLength, Texture::Straight, Volume::Medium, Layers::Light, Bangs::None, Structure::SidePartStyle, Parting::Side, ANY),
        style("Slicked-back", Length::EarLength, Texture::Straight, Volume::Low, Layers::None, Bangs::None, Structure::SlickedBackStyle, Parting::NoneDefined, MALE),
        style("Spiky_Hair", Length::VeryShort, Texture::Straight, Volume::Medium, Layers::Marked, Bangs::None, Structure::SpikyHair, Parting::NoneDefined, MALE),
        style("Tapered_Sides", Length::VeryShort, Texture::Straight, Volume::Medium, Layers::Light, Bangs::None, Structure::TaperedSidesStyle, Parting::Side, MALE),
        style("The_Rachel", Length::ShoulderLength, Texture::Straight, Volume::High, Layers::Marked, Bangs::SideSwept, Structure::TheRachel, Parting::Side, FEMALE),
        style("Tonsure_Hair", Length::EarLength, Texture::Straight, Volume::Low, Layers::None, Bangs::None, Structure::TonsureHair, Parting::NoneDefined, MALE),
        style("Updo", Length::MidBackLength, Texture::Straight, Volume::Medium, Layers::None, Bangs::None, Structure::Updo, Parting::NoneDefined, FEMALE),
        style("Waist-Length_Hair", Length::WaistLength, Texture::Straight, Volume::Medium, Layers::None, Bangs::None, Structure::GeneralCut, Parting::Center, ANY),
        style("Wave_Hair", Length::ShoulderLength, Texture::Wavy, Volume::Medium, Layers::Light, Bangs::None, Structure::WaveHairStyle, Parting::Side, ANY),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn builtin_catalog() {
        let taxonomy = Taxonomy::builtin();
        assert_eq!(taxonomy.len(), 61);
        // Built-in names are unique and valid
        assert!(Taxonomy::new(taxonomy.iter().cloned().collect()).is_ok());

        let bob = taxonomy.get("Bob").unwrap();
        assert_eq!(bob.length, Length::ChinLength);
        assert_eq!(bob.structure, Structure::Bob);
        assert_eq!(bob.applicable_gender, BTreeSet::from([Gender::Female]));

        assert!(taxonomy.get("Buzz_Cut").is_none());
    }

    #[test]
    fn builtin_order_is_stable() {
        let names: Vec<_> = Taxonomy::builtin().iter().take(3).map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Aaron_Kwok", "Afro", "Bald"]);
    }

    #[test]
    fn parses_json_entries() {
        let json = r#"[
            {"name": "Lob", "length": "SHOULDER_LENGTH", "texture": "WAVY", "volume": "MEDIUM",
             "layers": "LIGHT", "bangs": "NONE", "structure": "BOB", "parting": "SIDE",
             "applicable_gender": ["FEMALE"]},
            {"name": "Buzz", "length": "VERY_SHORT", "texture": "STRAIGHT", "volume": "LOW",
             "layers": "NONE", "bangs": "NONE", "structure": "CREW_CUT", "parting": "NONE_DEFINED"}
        ]"#;
        let taxonomy = Taxonomy::from_json(json).unwrap();
        assert_eq!(taxonomy.len(), 2);
        assert_eq!(taxonomy.get("Lob").unwrap().texture, Texture::Wavy);
        // Missing gender list defaults to both
        assert_eq!(
            taxonomy.get("Buzz").unwrap().applicable_gender,
            ANY.iter().copied().collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn repeated_genders_collapse() {
        let json = r#"[
            {"name": "Crop", "length": "VERY_SHORT", "texture": "STRAIGHT", "volume": "LOW",
             "layers": "NONE", "bangs": "FULL_BANGS", "structure": "CROP", "parting": "NONE_DEFINED",
             "applicable_gender": ["MALE", "MALE"]}
        ]"#;
        let taxonomy = Taxonomy::from_json(json).unwrap();
        assert_eq!(
            taxonomy.get("Crop").unwrap().applicable_gender,
            BTreeSet::from([Gender::Male])
        );
    }

    #[test]
    fn rejects_duplicates_and_blank_names() {
        let entry = style("Bob", Length::ChinLength, Texture::Straight, Volume::Medium,
            Layers::Light, Bangs::None, Structure::Bob, Parting::Side, FEMALE);

        let err = Taxonomy::new(vec![entry.clone(), entry.clone()]).unwrap_err();
        assert!(matches!(err, Error::DuplicateStyle(name) if name == "Bob"));

        let blank = HairstyleEntry { name: "  ".into(), ..entry.clone() };
        assert!(matches!(Taxonomy::new(vec![blank]), Err(Error::InvalidTaxonomy(_))));

        let mut genderless = entry;
        genderless.attributes.applicable_gender.clear();
        assert!(matches!(Taxonomy::new(vec![genderless]), Err(Error::InvalidTaxonomy(_))));
    }

    #[test]
    fn empty_taxonomy_is_allowed() {
        let taxonomy = Taxonomy::from_json("[]").unwrap();
        assert!(taxonomy.is_empty());
    }
}
