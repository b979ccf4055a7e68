//! Planet domain entity and related types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;
use uuid::Uuid;

/// Server-generated planet identifier, rendered as 32 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanetId(Uuid);

impl PlanetId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for PlanetId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for PlanetId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s).map(Self)
    }
}

impl Serialize for PlanetId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PlanetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Planet domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    #[schema(value_type = String, example = "6f1c2e0d9a4b4c3e8d7f6a5b4c3d2e1f")]
    pub id: PlanetId,
    #[schema(example = "Tatooine")]
    pub name: String,
    #[schema(example = "arid")]
    pub climate: String,
    #[schema(example = "desert")]
    pub terrain: String,
    /// Number of films the planet appears in, looked up at creation
    #[schema(example = 5)]
    pub films_appeared_in: u32,
}

impl Planet {
    /// Value of a searchable attribute
    pub fn field(&self, field: PlanetField) -> &str {
        match field {
            PlanetField::Name => &self.name,
            PlanetField::Climate => &self.climate,
            PlanetField::Terrain => &self.terrain,
        }
    }

    /// Whether every non-empty criterion is a substring of its field,
    /// compared with Unicode lowercasing on both sides.
    pub fn matches(&self, criteria: &PlanetCriteria) -> bool {
        criteria
            .iter()
            .filter(|(_, term)| !term.is_empty())
            .all(|(field, term)| {
                self.field(*field)
                    .to_lowercase()
                    .contains(&term.to_lowercase())
            })
    }
}

/// Validated input for creating a planet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub climate: String,
    pub terrain: String,
}

/// Planet attributes that can be searched on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlanetField {
    Name,
    Climate,
    Terrain,
}

impl PlanetField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanetField::Name => "name",
            PlanetField::Climate => "climate",
            PlanetField::Terrain => "terrain",
        }
    }
}

impl fmt::Display for PlanetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search criteria: each non-empty value is a case-insensitive substring
/// match on its field. An empty map matches every planet.
pub type PlanetCriteria = BTreeMap<PlanetField, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_id_renders_as_hex() {
        let id = PlanetId::generate();
        let rendered = id.to_string();

        assert_eq!(rendered.len(), 32);
        assert!(rendered.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(rendered.parse::<PlanetId>().unwrap(), id);
    }

    #[test]
    fn test_planet_id_rejects_garbage() {
        assert!("6016c8a5e18d9b3786d7eaf4".parse::<PlanetId>().is_err());
        assert!("not-an-id".parse::<PlanetId>().is_err());
        assert!("".parse::<PlanetId>().is_err());
    }

    #[test]
    fn test_planet_serializes_camel_case() {
        let planet = Planet {
            id: PlanetId::generate(),
            name: "Hoth".to_string(),
            climate: "frozen".to_string(),
            terrain: "tundra, ice caves, mountain ranges".to_string(),
            films_appeared_in: 1,
        };

        let json = serde_json::to_value(&planet).unwrap();
        assert_eq!(json["id"], planet.id.to_string());
        assert_eq!(json["filmsAppearedIn"], 1);
        assert!(json.get("films_appeared_in").is_none());
    }

    #[test]
    fn test_matches_folds_unicode_case() {
        let planet = Planet {
            id: PlanetId::generate(),
            name: "ÉCHO BASE".to_string(),
            climate: "frozen".to_string(),
            terrain: "tundra".to_string(),
            films_appeared_in: 0,
        };

        assert!(planet.matches(&PlanetCriteria::from([(PlanetField::Name, "écho".to_string())])));
        assert!(planet.matches(&PlanetCriteria::from([
            (PlanetField::Name, "base".to_string()),
            (PlanetField::Climate, "FRO".to_string()),
            (PlanetField::Terrain, String::new()),
        ])));
        assert!(!planet.matches(&PlanetCriteria::from([
            (PlanetField::Name, "echo".to_string()),
        ])));
        assert!(planet.matches(&PlanetCriteria::new()));
    }
}
