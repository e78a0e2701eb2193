// Assembled lookup result handed to the renderer

use crate::api::types::{PokemonRecord, TypeRecord};

/// Strong/weak lists are capped for display
pub const MAX_MATCHUPS: usize = 6;

/// Image URL for a primary record id: `{base}/{id}.png`
pub fn sprite_url(sprite_base_url: &str, id: u32) -> String {
    format!("{}/{}.png", sprite_base_url.trim_end_matches('/'), id)
}

/// Everything shown for one successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub description: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub base_experience: Option<u32>,
    pub stats: Vec<BaseStat>,
    pub moves: Vec<String>,
    /// None when the type lookup failed or the record lists no type
    pub matchups: Option<TypeMatchups>,
    /// None when the chain lookup failed; empty when the species does not evolve
    pub evolution: Option<Vec<EvolutionStage>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseStat {
    pub name: String,
    pub value: u32,
}

/// Damage relations of the first listed type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMatchups {
    pub type_name: String,
    pub strong_against: Vec<String>,
    pub weak_against: Vec<String>,
}

impl TypeMatchups {
    pub fn from_record(type_name: &str, record: TypeRecord) -> Self {
        let relations = record.damage_relations;
        Self {
            type_name: type_name.to_string(),
            strong_against: relations
                .double_damage_to
                .into_iter()
                .take(MAX_MATCHUPS)
                .map(|r| r.name)
                .collect(),
            weak_against: relations
                .double_damage_from
                .into_iter()
                .take(MAX_MATCHUPS)
                .map(|r| r.name)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionStage {
    pub name: String,
    pub id: u32,
    pub image_url: String,
}

impl PokemonDetail {
    pub fn from_record(
        record: PokemonRecord,
        description: String,
        matchups: Option<TypeMatchups>,
        evolution: Option<Vec<EvolutionStage>>,
        sprite_base_url: &str,
    ) -> Self {
        Self {
            id: record.id,
            image_url: sprite_url(sprite_base_url, record.id),
            name: record.name,
            types: record.types.into_iter().map(|t| t.kind.name).collect(),
            abilities: record.abilities.into_iter().map(|a| a.ability.name).collect(),
            description,
            height: record.height,
            weight: record.weight,
            base_experience: record.base_experience,
            stats: record
                .stats
                .into_iter()
                .map(|s| BaseStat {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            moves: record.moves.into_iter().map(|m| m.move_ref.name).collect(),
            matchups,
            evolution,
        }
    }

    /// Heading shown while this entity is current
    pub fn heading(&self) -> String {
        self.name.to_uppercase()
    }
}
