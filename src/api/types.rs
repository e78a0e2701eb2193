// PokeAPI response records, limited to the fields pokedex reads

use serde::Deserialize;

/// `{ "name": ..., "url": ... }` reference used all over PokeAPI
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// `{ "url": ... }` reference without a name (evolution chains)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// `GET /pokemon?limit=N`
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// `GET /pokemon/{nameOrId}`
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub moves: Vec<MoveEntry>,
    /// Decimetres
    #[serde(default)]
    pub height: u32,
    /// Hectograms
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub species: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
}

/// `GET {species.url}`
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesRecord {
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub evolution_chain: Option<ApiResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

/// `GET /type/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct TypeRecord {
    pub damage_relations: DamageRelations,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
}

/// `GET {evolution_chain.url}`
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChainRecord {
    pub chain: ChainLink,
}

/// One node of the evolution tree
#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}
