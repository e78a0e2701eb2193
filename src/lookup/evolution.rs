//! Evolution chain traversal
//!
//! Follows only the first `evolves_to` branch at every node. Sibling branches
//! (Eevee's evolutions, regional forms) are ignored.

use crate::api::types::ChainLink;

/// Upper bound on stages walked
pub const MAX_EVOLUTION_STAGES: usize = 8;

/// Species names from the base form to the final form along the first branch
pub fn first_branch_lineage(root: &ChainLink) -> Vec<String> {
    let mut lineage = Vec::new();
    let mut node = Some(root);

    while let Some(link) = node {
        if lineage.len() == MAX_EVOLUTION_STAGES {
            log::debug!(
                "Evolution chain deeper than {} stages, truncating",
                MAX_EVOLUTION_STAGES
            );
            break;
        }
        lineage.push(link.species.name.clone());
        node = link.evolves_to.first();
    }

    lineage
}

#[cfg(test)]
#[path = "evolution_tests.rs"]
mod evolution_tests;
