//! Command-line details mode.

use std::fmt::Write;

use crate::args::utils::parse_detail_target;
use crate::sources::ApiService;
use crate::state::DetailRecord;

/// What: Render a detail record as plain text.
///
/// Output:
/// - Name heading, description, then `label: value` lines for the category fields.
#[must_use]
pub fn format_record(rec: &DetailRecord) -> String {
    let mut out = format!("{} ({})\n", rec.name(), rec.category().section_title());
    let _ = writeln!(out, "{}\n", rec.description());
    match rec {
        DetailRecord::Pokemon { stats, types, .. } => {
            let _ = writeln!(out, "Types: {}", types.join(", "));
            let _ = writeln!(
                out,
                "HP: {}  Attack: {}  Defense: {}  Speed: {}",
                stats.hp, stats.attack, stats.defense, stats.speed
            );
        }
        DetailRecord::Route {
            pokemon, region, ..
        } => {
            let _ = writeln!(out, "Region: {region}");
            let _ = writeln!(out, "Pokémon: {}", pokemon.join(", "));
        }
        DetailRecord::Item {
            price, category, ..
        } => {
            let _ = writeln!(out, "Category: {category}");
            let _ = writeln!(out, "Price: {price}");
        }
        DetailRecord::Ability {
            pokemon,
            generation,
            ..
        } => {
            let _ = writeln!(out, "Generation: {generation}");
            let _ = writeln!(out, "Pokémon: {}", pokemon.join(", "));
        }
        DetailRecord::Nature {
            increased_stat,
            decreased_stat,
            favors,
            dislikes,
            ..
        } => {
            let _ = writeln!(out, "Increases: {increased_stat}");
            let _ = writeln!(out, "Decreases: {decreased_stat}");
            let _ = writeln!(out, "Favors: {favors}");
            let _ = writeln!(out, "Dislikes: {dislikes}");
        }
        DetailRecord::Tm {
            power,
            accuracy,
            move_type,
            damage_class,
            ..
        } => {
            let _ = writeln!(out, "Type: {move_type}");
            let _ = writeln!(out, "Power: {power}  Accuracy: {accuracy}");
            let _ = writeln!(out, "Damage class: {damage_class}");
        }
    }
    if let Some(image) = rec.image() {
        let _ = writeln!(out, "Image: {image}");
    }
    out
}

/// What: Handle command-line details mode.
///
/// Inputs:
/// - `api`: Service used for the lookup.
/// - `kind`, `id`: Raw `TYPE ID` arguments.
/// - `json`: Emit the record as JSON instead of text.
///
/// Output:
/// - Process exit code: 0 on success, 1 on bad input or lookup failure.
pub async fn handle_details(api: &ApiService, kind: &str, id: &str, json: bool) -> i32 {
    let key = match parse_detail_target(kind, id) {
        Ok(k) => k,
        Err(msg) => {
            eprintln!("{msg}");
            return 1;
        }
    };
    tracing::info!(category = %key.category, id = key.id, "details mode requested from CLI");
    let rec = match api.get_details(key.category, key.id).await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "details lookup failed");
            eprintln!("{e}");
            return 1;
        }
    };
    if json {
        match serde_json::to_string_pretty(&rec) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to encode record: {e}");
                return 1;
            }
        }
    } else {
        print!("{}", format_record(&rec));
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: TM records print name, move fields and the sprite reference.
    fn format_tm_record() {
        let rec = DetailRecord::Tm {
            name: "TM08: Body Slam".into(),
            description: "May paralyze the target.".into(),
            power: "85".into(),
            accuracy: "100".into(),
            move_type: "Normal".into(),
            damage_class: "Physical".into(),
            image: "/api/placeholder/150/150".into(),
        };
        let out = format_record(&rec);
        assert!(out.starts_with("TM08: Body Slam (TMs)\n"));
        assert!(out.contains("Power: 85  Accuracy: 100"));
        assert!(out.contains("Damage class: Physical"));
        assert!(out.ends_with("Image: /api/placeholder/150/150\n"));
    }
}
