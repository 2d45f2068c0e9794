//! Per-category detail formatters.
//!
//! Each formatter fetches the primary entity (a 404 there becomes
//! `ApiError::NotFound`), follows the references it needs in order, and
//! returns a [`DetailRecord`].

use std::collections::HashSet;

use serde_json::Value;

use super::error::ApiError;
use super::format::{
    NONE_LABEL, NOT_AVAILABLE, PLACEHOLDER_ITEM, PLACEHOLDER_POKEMON, PLACEHOLDER_ROUTE,
    english_entry, english_text, format_name, tm_display_name,
};
use super::service::ApiService;
use crate::state::{BaseStats, Category, DetailRecord};
use crate::util::{s, str_at, u32_at};

/// Route detail shows at most this many Pokémon.
const ROUTE_POKEMON_LIMIT: usize = 10;
/// Ability detail shows at most this many Pokémon.
const ABILITY_POKEMON_LIMIT: usize = 8;
/// Shown when a route has no encounter data.
pub const NO_ROUTE_POKEMON: &str = "No Pokémon data available";

/// Dispatch to the formatter for `category`.
pub(super) async fn fetch_details(
    api: &ApiService,
    category: Category,
    id: u32,
) -> Result<DetailRecord, ApiError> {
    let data = api
        .fetch(&api.entity_url(category, id))
        .await
        .map_err(|e| e.for_entity(category, id))?;
    let rec = match category {
        Category::Pokemon => pokemon_details(api, &data).await?,
        Category::Route => route_details(api, &data, id).await,
        Category::Item => item_details(&data),
        Category::Ability => ability_details(&data),
        Category::Nature => nature_details(&data),
        Category::Tm => tm_details(api, &data).await?,
    };
    tracing::info!(category = %category, id, name = rec.name(), "formatted details");
    Ok(rec)
}

/// `format_name` of the string at `pointer`, or `fallback`.
fn formatted_or(v: &Value, pointer: &str, fallback: &str) -> String {
    str_at(v, pointer).map_or_else(|| fallback.to_string(), format_name)
}

/// What: Base stats by stat name, defaulting missing ones to 0.
#[must_use]
pub fn base_stats(data: &Value) -> BaseStats {
    let stat = |name: &str| {
        data.get("stats")
            .and_then(Value::as_array)
            .and_then(|arr| {
                arr.iter()
                    .find(|st| str_at(st, "/stat/name") == Some(name))
            })
            .and_then(|st| u32_at(st, "/base_stat"))
            .unwrap_or(0)
    };
    BaseStats {
        hp: stat("hp"),
        attack: stat("attack"),
        defense: stat("defense"),
        speed: stat("speed"),
    }
}

/// Official artwork, then default sprite, then placeholder.
fn pokemon_image(data: &Value) -> String {
    let present = |pointer: &str| str_at(data, pointer).filter(|u| !u.is_empty());
    present("/sprites/other/official-artwork/front_default")
        .or_else(|| present("/sprites/front_default"))
        .unwrap_or(PLACEHOLDER_POKEMON)
        .to_string()
}

/// Pokémon: entity + species flavor text.
async fn pokemon_details(api: &ApiService, data: &Value) -> Result<DetailRecord, ApiError> {
    let species = api.follow(data, "/species/url").await?;
    let types = data
        .get("types")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|t| str_at(t, "/type/name"))
                .map(format_name)
                .collect()
        })
        .unwrap_or_default();
    Ok(DetailRecord::Pokemon {
        name: format_name(&s(data, "name")),
        description: english_text(&species, "flavor_text_entries", "flavor_text"),
        stats: base_stats(data),
        types,
        image: pokemon_image(data),
    })
}

/// What: Pokémon encountered in the first area of a location.
///
/// Output:
/// - Formatted, deduplicated names in first-seen order, at most [`ROUTE_POKEMON_LIMIT`].
async fn area_pokemon(api: &ApiService, location_id: u32) -> Result<Vec<String>, ApiError> {
    let areas = api
        .fetch(&api.endpoint(&format!("location-area?location={location_id}")))
        .await?;
    let Some(first_url) = str_at(&areas, "/results/0/url") else {
        return Ok(Vec::new());
    };
    let area = api.fetch(first_url).await?;
    let mut seen = HashSet::new();
    Ok(area
        .get("pokemon_encounters")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|enc| str_at(enc, "/pokemon/name"))
                .map(format_name)
                .filter(|n| seen.insert(n.clone()))
                .take(ROUTE_POKEMON_LIMIT)
                .collect()
        })
        .unwrap_or_default())
}

/// Route: entity + best-effort area encounters.
async fn route_details(api: &ApiService, data: &Value, id: u32) -> DetailRecord {
    let pokemon = match area_pokemon(api, id).await {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!(id, error = %e, "error fetching location areas");
            Vec::new()
        }
    };
    let name = format_name(&s(data, "name"));
    let region = str_at(data, "/region/name").unwrap_or("unknown").to_string();
    DetailRecord::Route {
        description: format!("{name} is located in the {region} region."),
        name,
        pokemon: if pokemon.is_empty() {
            vec![NO_ROUTE_POKEMON.to_string()]
        } else {
            pokemon
        },
        region,
        image: PLACEHOLDER_ROUTE.to_string(),
    }
}

/// Item: flavor text, cost and category.
fn item_details(data: &Value) -> DetailRecord {
    DetailRecord::Item {
        name: format_name(&s(data, "name")),
        description: english_text(data, "flavor_text_entries", "text"),
        price: u32_at(data, "/cost").unwrap_or(0),
        category: formatted_or(data, "/category/name", ""),
        image: str_at(data, "/sprites/default")
            .unwrap_or(PLACEHOLDER_ITEM)
            .to_string(),
    }
}

/// Ability: English effect text, first Pokémon, generation.
fn ability_details(data: &Value) -> DetailRecord {
    let pokemon = data
        .get("pokemon")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .take(ABILITY_POKEMON_LIMIT)
                .filter_map(|p| str_at(p, "/pokemon/name"))
                .map(format_name)
                .collect()
        })
        .unwrap_or_default();
    DetailRecord::Ability {
        name: format_name(&s(data, "name")),
        // Effect text is shown as-is; it carries intentional line breaks.
        description: english_entry(data, "effect_entries")
            .and_then(|e| e.get("effect"))
            .and_then(Value::as_str)
            .unwrap_or(super::format::NO_DESCRIPTION)
            .to_string(),
        pokemon,
        generation: formatted_or(data, "/generation/name", ""),
    }
}

/// Nature: stat deltas and flavor preferences.
fn nature_details(data: &Value) -> DetailRecord {
    let name = format_name(&s(data, "name"));
    let increased_stat = formatted_or(data, "/increased_stat/name", NONE_LABEL);
    let decreased_stat = formatted_or(data, "/decreased_stat/name", NONE_LABEL);
    DetailRecord::Nature {
        description: format!(
            "{name} nature increases {increased_stat} and decreases {decreased_stat}."
        ),
        name,
        increased_stat,
        decreased_stat,
        favors: formatted_or(data, "/likes_flavor/name", NONE_LABEL),
        dislikes: formatted_or(data, "/hates_flavor/name", NONE_LABEL),
    }
}

/// Positive number at `pointer` as text, else "N/A".
fn number_or_na(v: &Value, pointer: &str) -> String {
    match u32_at(v, pointer) {
        Some(n) if n > 0 => n.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// TM: machine, then its move, then its item.
async fn tm_details(api: &ApiService, machine: &Value) -> Result<DetailRecord, ApiError> {
    let move_data = api.follow(machine, "/move/url").await?;
    let item_data = api.follow(machine, "/item/url").await?;
    Ok(DetailRecord::Tm {
        name: tm_display_name(&s(&item_data, "name"), &s(&move_data, "name")),
        description: english_text(&move_data, "flavor_text_entries", "flavor_text"),
        power: number_or_na(&move_data, "/power"),
        accuracy: number_or_na(&move_data, "/accuracy"),
        move_type: formatted_or(&move_data, "/type/name", ""),
        damage_class: formatted_or(&move_data, "/damage_class/name", NOT_AVAILABLE),
        image: str_at(&item_data, "/sprites/default")
            .unwrap_or(PLACEHOLDER_ITEM)
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Missing stats default to 0 and present ones are looked up by name.
    fn base_stats_defaults_missing_to_zero() {
        let data = serde_json::json!({
            "stats": [
                {"base_stat": 35, "stat": {"name": "hp"}},
                {"base_stat": 55, "stat": {"name": "attack"}}
            ]
        });
        assert_eq!(
            base_stats(&data),
            BaseStats {
                hp: 35,
                attack: 55,
                defense: 0,
                speed: 0
            }
        );
    }

    #[test]
    /// What: Image preference is artwork, then sprite, then placeholder.
    fn pokemon_image_preference_order() {
        let both = serde_json::json!({"sprites": {
            "front_default": "sprite.png",
            "other": {"official-artwork": {"front_default": "art.png"}}
        }});
        let sprite_only = serde_json::json!({"sprites": {
            "front_default": "sprite.png",
            "other": {"official-artwork": {"front_default": null}}
        }});
        let empty_art = serde_json::json!({"sprites": {
            "front_default": "sprite.png",
            "other": {"official-artwork": {"front_default": ""}}
        }});
        let none = serde_json::json!({"sprites": {"front_default": ""}});
        assert_eq!(pokemon_image(&both), "art.png");
        assert_eq!(pokemon_image(&sprite_only), "sprite.png");
        assert_eq!(pokemon_image(&empty_art), "sprite.png");
        assert_eq!(pokemon_image(&none), PLACEHOLDER_POKEMON);
    }

    #[test]
    /// What: Natures without stat changes or flavors report "None".
    fn nature_defaults_to_none() {
        let data = serde_json::json!({
            "name": "hardy",
            "increased_stat": null,
            "decreased_stat": null,
            "likes_flavor": null,
            "hates_flavor": null
        });
        let DetailRecord::Nature {
            description,
            increased_stat,
            favors,
            ..
        } = nature_details(&data)
        else {
            panic!("expected nature record");
        };
        assert_eq!(increased_stat, "None");
        assert_eq!(favors, "None");
        assert_eq!(description, "Hardy nature increases None and decreases None.");
    }

    #[test]
    /// What: Ability detail keeps at most 8 Pokémon and formats the generation.
    fn ability_caps_pokemon_list() {
        let pokemon: Vec<_> = (0..12)
            .map(|i| serde_json::json!({"pokemon": {"name": format!("mon-{i}")}}))
            .collect();
        let data = serde_json::json!({
            "name": "static",
            "effect_entries": [{"effect": "May paralyze.", "language": {"name": "en"}}],
            "pokemon": pokemon,
            "generation": {"name": "generation-iii"}
        });
        let DetailRecord::Ability {
            pokemon,
            generation,
            description,
            ..
        } = ability_details(&data)
        else {
            panic!("expected ability record");
        };
        assert_eq!(pokemon.len(), 8);
        assert_eq!(pokemon[0], "Mon 0");
        assert_eq!(generation, "Generation Iii");
        assert_eq!(description, "May paralyze.");
    }

    #[test]
    /// What: Zero or null move power/accuracy render as "N/A".
    fn move_numbers_fall_back_to_na() {
        let v = serde_json::json!({"power": null, "accuracy": 100});
        assert_eq!(number_or_na(&v, "/power"), "N/A");
        assert_eq!(number_or_na(&v, "/accuracy"), "100");
    }
}
