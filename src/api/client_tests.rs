//! Tests for PokeApiClient

use super::*;
use crate::test_utils::test_helpers::{block_on, pokemon_json};
use mockito::{Matcher, Server};

#[test]
fn test_new_rejects_invalid_base_url() {
    let result = PokeApiClient::new("not a url");
    assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
}

#[test]
fn test_new_rejects_cannot_be_a_base_url() {
    let result = PokeApiClient::new("mailto:ash@example.com");
    assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
}

#[test]
fn test_endpoint_appends_segments() {
    let client = PokeApiClient::new("https://pokeapi.co/api/v2").unwrap();
    let url = client.endpoint(&["pokemon", "25"]).unwrap();
    assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/25");
}

#[test]
fn test_endpoint_handles_trailing_slash_in_base() {
    let client = PokeApiClient::new("https://pokeapi.co/api/v2/").unwrap();
    let url = client.endpoint(&["type", "electric"]).unwrap();
    assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/type/electric");
}

#[test]
fn test_endpoint_encodes_user_input() {
    let client = PokeApiClient::new("https://pokeapi.co/api/v2").unwrap();
    let url = client.endpoint(&["pokemon", "mr mime/"]).unwrap();
    assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/mr%20mime%2F");
}

#[test]
fn test_resolve_keeps_absolute_urls() {
    let client = PokeApiClient::new("https://pokeapi.co/api/v2").unwrap();
    let url = client
        .resolve("https://pokeapi.co/api/v2/pokemon-species/25/")
        .unwrap();
    assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon-species/25/");
}

#[test]
fn test_fetch_catalog_requests_limit_and_keeps_order() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/pokemon")
        .match_query(Matcher::UrlEncoded("limit".into(), "1000".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"count": 3, "results": [
                {"name": "bulbasaur", "url": ""},
                {"name": "ivysaur", "url": ""},
                {"name": "venusaur", "url": ""}
            ]}"#,
        )
        .create();

    let client = PokeApiClient::new(&server.url()).unwrap();
    let names = block_on(client.fetch_catalog(1000)).unwrap();

    mock.assert();
    assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);
}

#[test]
fn test_fetch_pokemon_success() {
    let mut server = Server::new();
    let species_url = format!("{}/pokemon-species/25/", server.url());
    let _mock = server
        .mock("GET", "/pokemon/pikachu")
        .with_status(200)
        .with_body(pokemon_json(25, "pikachu", &species_url, &["electric"]))
        .create();

    let client = PokeApiClient::new(&server.url()).unwrap();
    let record = block_on(client.fetch_pokemon("pikachu")).unwrap();

    assert_eq!(record.id, 25);
    assert_eq!(record.name, "pikachu");
    assert_eq!(record.species.url, species_url);
    assert_eq!(record.types[0].kind.name, "electric");
}

#[test]
fn test_fetch_pokemon_non_success_is_not_found() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/pokemon/doesnotexist")
        .with_status(404)
        .with_body("Not Found")
        .create();

    let client = PokeApiClient::new(&server.url()).unwrap();
    let result = block_on(client.fetch_pokemon("doesnotexist"));

    assert_eq!(result.unwrap_err(), ApiError::NotFound("doesnotexist".to_string()));
}

#[test]
fn test_fetch_pokemon_server_error_is_not_found() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/pokemon/pikachu")
        .with_status(503)
        .create();

    let client = PokeApiClient::new(&server.url()).unwrap();
    let result = block_on(client.fetch_pokemon("pikachu"));

    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[test]
fn test_fetch_pokemon_malformed_body_is_parse_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/pokemon/pikachu")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create();

    let client = PokeApiClient::new(&server.url()).unwrap();
    let result = block_on(client.fetch_pokemon("pikachu"));

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[test]
fn test_fetch_type_status_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/type/electric")
        .with_status(500)
        .create();

    let client = PokeApiClient::new(&server.url()).unwrap();
    let result = block_on(client.fetch_type("electric"));

    assert!(matches!(result, Err(ApiError::Status { code: 500, .. })));
}

#[test]
fn test_network_error_when_server_unreachable() {
    // Port 9 (discard) on localhost is not served by anything in the test environment
    let client = PokeApiClient::new("http://127.0.0.1:9").unwrap();
    let result = block_on(client.fetch_catalog(10));

    assert!(matches!(result, Err(ApiError::Network(_))));
}
