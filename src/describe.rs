//! Human-readable text derived from the taxonomy.

use crate::analysis::Gender;
use crate::hair::{HairBangs, HairLayers};
use crate::taxonomy::Taxonomy;

/// Display form of a style name: underscores become spaces.
pub fn display_name(name: &str) -> String {
    name.replace('_', " ")
}

/// One-paragraph description of a style. Unknown names get only the title.
pub fn describe_hairstyle(name: &str, taxonomy: &Taxonomy) -> String {
    let mut description = format!("Style: {}.", display_name(name));
    let Some(attrs) = taxonomy.get(name) else {
        return description;
    };

    description.push_str(&format!(
        " Features: length {}, texture {}, volume {}.",
        attrs.length, attrs.texture, attrs.volume
    ));
    if attrs.bangs != HairBangs::None {
        description.push_str(&format!(" Bangs: {}.", attrs.bangs));
    }
    if attrs.layers != HairLayers::None {
        description.push_str(&format!(" Layers: {}.", attrs.layers));
    }
    description.push_str(&format!(" Overall structure: {}.", attrs.structure));
    description
}

/// Search phrase used to find an example photo of a style.
pub fn image_search_query(name: &str, gender: Gender) -> String {
    let person = if gender == Gender::Male { "man" } else { "woman" };
    format!("{person} with {} hairstyle portrait", display_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_known_style() {
        let text = describe_hairstyle("Pixie_Cut", Taxonomy::builtin());
        assert_eq!(
            text,
            "Style: Pixie Cut. Features: length ear length, texture straight, volume medium. \
             Bangs: side swept. Layers: marked. Overall structure: pixie."
        );
    }

    #[test]
    fn omits_missing_bangs_and_layers() {
        let text = describe_hairstyle("Afro", Taxonomy::builtin());
        assert!(!text.contains("Bangs"));
        assert!(!text.contains("Layers"));
        assert!(text.ends_with("Overall structure: afro."));
    }

    #[test]
    fn unknown_style_only_has_title() {
        assert_eq!(describe_hairstyle("Buzz_Cut", Taxonomy::builtin()), "Style: Buzz Cut.");
    }

    #[test]
    fn search_queries() {
        assert_eq!(
            image_search_query("Men_Pompadour", Gender::Male),
            "man with Men Pompadour hairstyle portrait"
        );
        assert_eq!(
            image_search_query("Bob", Gender::Unknown),
            "woman with Bob hairstyle portrait"
        );
    }
}
