//! Detail formatting per category against stubbed entities.

mod common;

use pokesearch::sources::ApiError;
use pokesearch::state::{BaseStats, Category, DetailRecord};
use serde_json::json;

use common::{Stub, url};

#[tokio::test]
/// What: Pokémon detail joins species flavor text, defaults missing stats to 0 and formats types.
async fn pokemon_details() {
    let stub = Stub::default()
        .with(
            "pokemon/25",
            json!({
                "name": "pikachu",
                "species": { "url": url("pokemon-species/25/") },
                "stats": [
                    { "base_stat": 35, "stat": { "name": "hp" } },
                    { "base_stat": 90, "stat": { "name": "speed" } }
                ],
                "types": [{ "type": { "name": "electric" } }],
                "sprites": {
                    "front_default": "sprite.png",
                    "other": { "official-artwork": { "front_default": "art.png" } }
                }
            }),
        )
        .with(
            "pokemon-species/25/",
            json!({
                "flavor_text_entries": [
                    { "flavor_text": "Souris\nélectrique", "language": { "name": "fr" } },
                    { "flavor_text": "When several of\nthese POKéMON\u{c}gather", "language": { "name": "en" } }
                ]
            }),
        );
    let (api, _) = common::api(stub);
    let rec = api.get_details(Category::Pokemon, 25).await.expect("pokemon");
    assert_eq!(
        rec,
        DetailRecord::Pokemon {
            name: "Pikachu".into(),
            description: "When several of these POKéMON gather".into(),
            stats: BaseStats {
                hp: 35,
                attack: 0,
                defense: 0,
                speed: 90
            },
            types: vec!["Electric".into()],
            image: "art.png".into(),
        }
    );
}

#[tokio::test]
/// What: A missing species reference is a decode error, not a silent default.
async fn pokemon_without_species_fails() {
    let stub = Stub::default().with("pokemon/1", json!({ "name": "bulbasaur" }));
    let (api, _) = common::api(stub);
    let err = api.get_details(Category::Pokemon, 1).await.expect_err("no species");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
/// What: TM detail combines machine, move and item into the display record.
async fn tm_details() {
    let stub = Stub::default()
        .with(
            "machine/1",
            json!({
                "item": { "name": "tm08", "url": url("item/312/") },
                "move": { "name": "body-slam", "url": url("move/34/") }
            }),
        )
        .with(
            "move/34/",
            json!({
                "name": "body-slam",
                "power": 85,
                "accuracy": null,
                "type": { "name": "normal" },
                "damage_class": { "name": "physical" },
                "flavor_text_entries": [
                    { "flavor_text": "May paralyze\nthe target.", "language": { "name": "en" } }
                ]
            }),
        )
        .with(
            "item/312/",
            json!({ "name": "tm08", "sprites": { "default": "tm-normal.png" } }),
        );
    let (api, _) = common::api(stub);
    let rec = api.get_details(Category::Tm, 1).await.expect("tm");
    assert_eq!(
        rec,
        DetailRecord::Tm {
            name: "TM08: Body Slam".into(),
            description: "May paralyze the target.".into(),
            power: "85".into(),
            accuracy: "N/A".into(),
            move_type: "Normal".into(),
            damage_class: "Physical".into(),
            image: "tm-normal.png".into(),
        }
    );
}

#[tokio::test]
/// What: Route detail dedups area encounters; a failed area lookup shows the placeholder list.
async fn route_details_and_area_fallback() {
    let route = json!({ "name": "kanto-route-1", "region": { "name": "kanto" } });
    let stub = Stub::default()
        .with("location/88", route.clone())
        .with(
            "location-area?location=88",
            json!({ "results": [{ "url": url("location-area/295/") }] }),
        )
        .with(
            "location-area/295/",
            json!({
                "pokemon_encounters": [
                    { "pokemon": { "name": "pidgey" } },
                    { "pokemon": { "name": "rattata" } },
                    { "pokemon": { "name": "pidgey" } }
                ]
            }),
        )
        .with("location/89", route)
        .failing("location-area?location=89");
    let (api, _) = common::api(stub);

    let DetailRecord::Route {
        name,
        description,
        pokemon,
        region,
        image,
    } = api.get_details(Category::Route, 88).await.expect("route")
    else {
        panic!("expected route record");
    };
    assert_eq!(name, "Kanto Route 1");
    assert_eq!(description, "Kanto Route 1 is located in the kanto region.");
    assert_eq!(pokemon, ["Pidgey", "Rattata"]);
    assert_eq!(region, "kanto");
    assert_eq!(image, "/api/placeholder/400/200");

    let DetailRecord::Route { pokemon, .. } =
        api.get_details(Category::Route, 89).await.expect("route")
    else {
        panic!("expected route record");
    };
    assert_eq!(pokemon, ["No Pokémon data available"]);
}

#[tokio::test]
/// What: Item detail reads flavor text, price, category and sprite with fallbacks.
async fn item_details() {
    let stub = Stub::default().with(
        "item/17",
        json!({
            "name": "potion",
            "cost": 200,
            "category": { "name": "healing" },
            "sprites": { "default": null },
            "flavor_text_entries": [
                { "text": "Restores 20 HP.", "language": { "name": "en" } }
            ]
        }),
    );
    let (api, _) = common::api(stub);
    let rec = api.get_details(Category::Item, 17).await.expect("item");
    assert_eq!(
        rec,
        DetailRecord::Item {
            name: "Potion".into(),
            description: "Restores 20 HP.".into(),
            price: 200,
            category: "Healing".into(),
            image: "/api/placeholder/150/150".into(),
        }
    );
}

#[tokio::test]
/// What: Unknown ids produce the category-specific not-found message.
async fn not_found_message() {
    let (api, _) = common::api(Stub::default());
    let err = api.get_details(Category::Ability, 9999).await.expect_err("missing");
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "No ability found with ID 9999");
}

#[tokio::test]
/// What: Transport failures on the primary fetch surface unchanged.
async fn transport_failure_surfaces() {
    let (api, _) = common::api(Stub::default().failing("nature/3"));
    let err = api.get_details(Category::Nature, 3).await.expect_err("fails");
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(err.to_string().starts_with("API error:"));
}
