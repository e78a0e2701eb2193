// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/home";
pub const DEFAULT_CATALOG_LIMIT: u32 = 1000;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_sprite_base_url() -> String {
    DEFAULT_SPRITE_BASE_URL.to_string()
}

fn default_catalog_limit() -> u32 {
    DEFAULT_CATALOG_LIMIT
}

/// PokeAPI endpoints section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Images are served from `{sprite_base_url}/{id}.png`
    #[serde(default = "default_sprite_base_url")]
    pub sprite_base_url: String,
    /// Size of the name listing fetched for autocomplete
    #[serde(default = "default_catalog_limit")]
    pub catalog_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            sprite_base_url: default_sprite_base_url(),
            catalog_limit: default_catalog_limit(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}
