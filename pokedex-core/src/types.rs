//! Entity types for the pokedex catalog

use serde::{Deserialize, Serialize};

/// The fixed enumeration of valid type tags.
///
/// Defined once for the process lifetime and exposed verbatim through the
/// `/types` endpoint; catalog validation rejects any tag outside this list.
const VALID_TYPES: [&str; 18] = [
    "Bug", "Dark", "Dragon", "Electric", "Fairy", "Fighting", "Fire", "Flying", "Ghost", "Grass",
    "Ground", "Ice", "Normal", "Poison", "Psychic", "Rock", "Steel", "Water",
];

/// All valid type tags, in stable order.
pub fn valid_types() -> &'static [&'static str] {
    &VALID_TYPES
}

/// Check whether `tag` belongs to the type enumeration.
pub fn is_valid_type(tag: &str) -> bool {
    VALID_TYPES.contains(&tag)
}

/// One catalog entry.
///
/// Names are non-empty but not guaranteed unique. The tag list serializes
/// under the JSON key `type`, matching the wire shape
/// `{"name": ..., "type": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Display name.
    pub name: String,
    /// Type tags, each drawn from the type enumeration.
    #[serde(rename = "type")]
    pub types: Vec<String>,
}

impl Pokemon {
    /// Construct an entry from a name and its type tags.
    pub fn new(name: impl Into<String>, types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Pokemon {
            name: name.into(),
            types: types.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_types_is_the_fixed_enumeration() {
        assert_eq!(valid_types().len(), 18);
        assert!(is_valid_type("Fire"));
        assert!(is_valid_type("Fairy"));
        assert!(!is_valid_type("fire"));
        assert!(!is_valid_type(""));
        assert!(!is_valid_type("Shadow"));
    }

    #[test]
    fn entry_serializes_tags_under_the_type_key() {
        let entry = Pokemon::new("Bulbasaur", ["Grass", "Poison"]);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Bulbasaur", "type": ["Grass", "Poison"]})
        );
    }

    #[test]
    fn entry_deserializes_from_the_wire_shape() {
        let entry: Pokemon =
            serde_json::from_str(r#"{"name": "Charmander", "type": ["Fire"]}"#).unwrap();
        assert_eq!(entry, Pokemon::new("Charmander", ["Fire"]));
    }
}
