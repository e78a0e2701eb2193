//! Detail fetch pipeline
//!
//! Runs four dependent stages strictly one after another:
//! 1. primary record (non-success status ends the lookup as not found)
//! 2. species record for the description
//! 3. damage relations of the first listed type
//! 4. evolution chain, plus each stage's primary record for its image
//!
//! Stages 1 and 2 decide the outcome. Stages 3 and 4 only enrich it; their
//! failures drop the corresponding section.

use crate::api::types::{PokemonRecord, SpeciesRecord};
use crate::api::{ApiError, PokeApiClient};

use super::description::english_description;
use super::detail::{EvolutionStage, PokemonDetail, TypeMatchups, sprite_url};
use super::evolution::first_branch_lineage;

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Box<PokemonDetail>),
    NotFound { query: String },
    /// Stage 1 or 2 failed for a reason other than a missing record
    Failed { reason: String },
}

/// Look up `name_or_id`, which must already be lowercased and non-empty
pub async fn run_lookup(
    client: &PokeApiClient,
    sprite_base_url: &str,
    name_or_id: &str,
) -> LookupOutcome {
    let record = match client.fetch_pokemon(name_or_id).await {
        Ok(record) => record,
        Err(ApiError::NotFound(query)) => return LookupOutcome::NotFound { query },
        Err(e) => {
            log::debug!("Primary lookup for {} failed: {}", name_or_id, e);
            return LookupOutcome::Failed {
                reason: e.to_string(),
            };
        }
    };

    let species = match client.fetch_species(&record.species.url).await {
        Ok(species) => species,
        Err(e) => {
            log::debug!("Species lookup for {} failed: {}", record.name, e);
            return LookupOutcome::Failed {
                reason: e.to_string(),
            };
        }
    };

    let description = english_description(&species.flavor_text_entries);
    let matchups = fetch_matchups(client, &record).await;
    let evolution = fetch_evolution(client, sprite_base_url, &species).await;

    LookupOutcome::Found(Box::new(PokemonDetail::from_record(
        record,
        description,
        matchups,
        evolution,
        sprite_base_url,
    )))
}

/// Damage relations for the first listed type only
async fn fetch_matchups(client: &PokeApiClient, record: &PokemonRecord) -> Option<TypeMatchups> {
    let first_type = &record.types.first()?.kind.name;

    match client.fetch_type(first_type).await {
        Ok(type_record) => Some(TypeMatchups::from_record(first_type, type_record)),
        Err(e) => {
            log::debug!("Type lookup for {} failed, omitting matchups: {}", first_type, e);
            None
        }
    }
}

async fn fetch_evolution(
    client: &PokeApiClient,
    sprite_base_url: &str,
    species: &SpeciesRecord,
) -> Option<Vec<EvolutionStage>> {
    let chain_url = &species.evolution_chain.as_ref()?.url;

    let chain = match client.fetch_evolution_chain(chain_url).await {
        Ok(chain) => chain,
        Err(e) => {
            log::debug!("Evolution chain lookup failed, omitting lineage: {}", e);
            return None;
        }
    };

    let lineage = first_branch_lineage(&chain.chain);
    if lineage.len() <= 1 {
        return Some(Vec::new());
    }

    let mut stages = Vec::with_capacity(lineage.len());
    for name in lineage {
        match client.fetch_pokemon(&name).await {
            Ok(stage) => stages.push(EvolutionStage {
                image_url: sprite_url(sprite_base_url, stage.id),
                id: stage.id,
                name,
            }),
            Err(e) => {
                log::debug!("Evolution stage {} lookup failed, omitting lineage: {}", name, e);
                return None;
            }
        }
    }

    Some(stages)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod pipeline_tests;
