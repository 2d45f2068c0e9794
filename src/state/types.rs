//! Core value types used by pokesearch state.

use std::fmt;

/// Entity category searchable from the input line.
///
/// The set is closed: every list fetch, detail formatter, and dropdown
/// section dispatches over these six variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Pokémon species/forms (`/pokemon`).
    Pokemon,
    /// Routes and other locations (`/location`).
    Route,
    /// Bag items (`/item`).
    Item,
    /// Abilities (`/ability`).
    Ability,
    /// Natures (`/nature`).
    Nature,
    /// Technical machines (`/machine`).
    Tm,
}

impl Category {
    /// All categories in search aggregation order.
    pub const ALL: [Self; 6] = [
        Self::Pokemon,
        Self::Route,
        Self::Item,
        Self::Ability,
        Self::Nature,
        Self::Tm,
    ];

    /// Categories in dropdown display order.
    pub const DISPLAY_ORDER: [Self; 6] = [
        Self::Pokemon,
        Self::Tm,
        Self::Ability,
        Self::Nature,
        Self::Route,
        Self::Item,
    ];

    /// What: Stable lowercase identifier used in routes, CLI input and logs.
    ///
    /// Output:
    /// - One of `pokemon`, `route`, `item`, `ability`, `nature`, `tm`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::Route => "route",
            Self::Item => "item",
            Self::Ability => "ability",
            Self::Nature => "nature",
            Self::Tm => "tm",
        }
    }

    /// What: Parse a slug back into a category.
    ///
    /// Inputs:
    /// - `s`: Case-insensitive slug; `location` and `machine` are accepted as aliases.
    ///
    /// Output:
    /// - `Some(Category)` for known slugs, `None` otherwise.
    #[must_use]
    pub fn from_slug(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pokemon" => Some(Self::Pokemon),
            "route" | "location" => Some(Self::Route),
            "item" => Some(Self::Item),
            "ability" => Some(Self::Ability),
            "nature" => Some(Self::Nature),
            "tm" | "machine" => Some(Self::Tm),
            _ => None,
        }
    }

    /// Upstream resource path segment for this category.
    #[must_use]
    pub const fn resource(self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::Route => "location",
            Self::Item => "item",
            Self::Ability => "ability",
            Self::Nature => "nature",
            Self::Tm => "machine",
        }
    }

    /// Number of entries requested from the listing endpoint.
    #[must_use]
    pub const fn list_limit(self) -> u32 {
        match self {
            Self::Pokemon => 151,
            Self::Route | Self::Item => 50,
            Self::Ability | Self::Tm => 100,
            Self::Nature => 25,
        }
    }

    /// Section heading shown in the dropdown.
    #[must_use]
    pub const fn section_title(self) -> &'static str {
        match self {
            Self::Pokemon => "Pokémon",
            Self::Route => "Routes",
            Self::Item => "Items",
            Self::Ability => "Abilities",
            Self::Nature => "Natures",
            Self::Tm => "TMs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Minimal search result: enough to render a dropdown row and to route to
/// the detail view.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SuggestionItem {
    /// Upstream numeric identifier.
    pub id: u32,
    /// Display name (already formatted).
    pub name: String,
    /// Category the item belongs to.
    #[serde(rename = "type")]
    pub category: Category,
}

/// Base stats shown for a Pokémon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct BaseStats {
    /// Hit points.
    pub hp: u32,
    /// Attack.
    pub attack: u32,
    /// Defense.
    pub defense: u32,
    /// Speed.
    pub speed: u32,
}

/// Fully formatted, category-specific payload for the detail view.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DetailRecord {
    /// Pokémon detail.
    Pokemon {
        /// Display name.
        name: String,
        /// English flavor text.
        description: String,
        /// Base stats.
        stats: BaseStats,
        /// Formatted type names.
        types: Vec<String>,
        /// Artwork URL or placeholder path.
        image: String,
    },
    /// Route/location detail.
    Route {
        /// Display name.
        name: String,
        /// Synthesized description sentence.
        description: String,
        /// Pokémon found in the first area of the location.
        pokemon: Vec<String>,
        /// Raw region name, or `unknown`.
        region: String,
        /// Placeholder image path.
        image: String,
    },
    /// Item detail.
    Item {
        /// Display name.
        name: String,
        /// English flavor text.
        description: String,
        /// Shop price.
        price: u32,
        /// Formatted item category.
        category: String,
        /// Sprite URL or placeholder path.
        image: String,
    },
    /// Ability detail.
    Ability {
        /// Display name.
        name: String,
        /// English effect text.
        description: String,
        /// Pokémon that can have this ability (at most 8).
        pokemon: Vec<String>,
        /// Generation that introduced the ability.
        generation: String,
    },
    /// Nature detail.
    Nature {
        /// Display name.
        name: String,
        /// Synthesized description sentence.
        description: String,
        /// Stat raised by the nature, or "None".
        increased_stat: String,
        /// Stat lowered by the nature, or "None".
        decreased_stat: String,
        /// Liked flavor, or "None".
        favors: String,
        /// Disliked flavor, or "None".
        dislikes: String,
    },
    /// Technical machine detail.
    Tm {
        /// `TM<number>: <Move>`.
        name: String,
        /// English move flavor text.
        description: String,
        /// Move power or "N/A".
        power: String,
        /// Move accuracy or "N/A".
        accuracy: String,
        /// Formatted move type.
        move_type: String,
        /// Formatted damage class or "N/A".
        damage_class: String,
        /// Item sprite URL or placeholder path.
        image: String,
    },
}

impl DetailRecord {
    /// Display name common to every variant.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Pokemon { name, .. }
            | Self::Route { name, .. }
            | Self::Item { name, .. }
            | Self::Ability { name, .. }
            | Self::Nature { name, .. }
            | Self::Tm { name, .. } => name,
        }
    }

    /// Description common to every variant.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Pokemon { description, .. }
            | Self::Route { description, .. }
            | Self::Item { description, .. }
            | Self::Ability { description, .. }
            | Self::Nature { description, .. }
            | Self::Tm { description, .. } => description,
        }
    }

    /// Image reference, when the category has one.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        match self {
            Self::Pokemon { image, .. }
            | Self::Route { image, .. }
            | Self::Item { image, .. }
            | Self::Tm { image, .. } => Some(image),
            Self::Ability { .. } | Self::Nature { .. } => None,
        }
    }

    /// Category this record was produced for.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Pokemon { .. } => Category::Pokemon,
            Self::Route { .. } => Category::Route,
            Self::Item { .. } => Category::Item,
            Self::Ability { .. } => Category::Ability,
            Self::Nature { .. } => Category::Nature,
            Self::Tm { .. } => Category::Tm,
        }
    }
}

/// Search query sent to the background search worker.
#[derive(Clone, Debug)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Raw query text entered by the user.
    pub text: String,
}

/// Results corresponding to a prior [`QueryInput`].
#[derive(Clone, Debug)]
pub struct SearchResults {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Matching suggestions in category order.
    pub items: Vec<SuggestionItem>,
}

/// Detail view address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DetailKey {
    /// Entity category.
    pub category: Category,
    /// Upstream identifier.
    pub id: u32,
}

/// Outcome of a detail fetch delivered back to the main loop.
#[derive(Clone, Debug)]
pub struct DetailsOutcome {
    /// Address the fetch was issued for.
    pub key: DetailKey,
    /// Formatted record, or a user-facing error message.
    pub result: Result<DetailRecord, String>,
}
