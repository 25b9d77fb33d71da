//! Drink Catalog
//!
//! Domain model built from provider wire objects: drinks with paired
//! ingredient lines, and the result set one fetch delivers to a front end.

use crate::api::model::ApiDrink;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::OnceLock;

// ============================================================================
// Drink
// ============================================================================

/// Alcohol classification the provider assigns to a drink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AlcoholClass {
    #[serde(rename = "Alcoholic")]
    Alcoholic,
    #[serde(rename = "Non alcoholic")]
    NonAlcoholic,
    #[serde(rename = "Optional alcohol")]
    OptionalAlcohol,
    #[default]
    #[serde(rename = "Unknown")]
    Unknown,
}

impl AlcoholClass {
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some("Alcoholic") => AlcoholClass::Alcoholic,
            Some("Non alcoholic") | Some("Non Alcoholic") => AlcoholClass::NonAlcoholic,
            Some("Optional alcohol") => AlcoholClass::OptionalAlcohol,
            _ => AlcoholClass::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlcoholClass::Alcoholic => "Alcoholic",
            AlcoholClass::NonAlcoholic => "Non alcoholic",
            AlcoholClass::OptionalAlcohol => "Optional alcohol",
            AlcoholClass::Unknown => "Unknown",
        }
    }
}

/// One paired ingredient/measure line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientLine {
    pub name: String,
    pub measure: Option<String>,
}

static MEASURE_RE: OnceLock<Regex> = OnceLock::new();

impl IngredientLine {
    /// Split the measure into a numeric amount and a unit remainder.
    ///
    /// Handles the provider's usual shapes: "1 1/2 oz", "1/2 oz", "2.5 cl",
    /// "1 dash". Measures with no leading number ("Juice of 1 lime") yield
    /// `None`.
    pub fn parsed_measure(&self) -> Option<(f64, String)> {
        let measure = self.measure.as_deref()?.trim();
        let re = MEASURE_RE.get_or_init(|| {
            Regex::new(r"^(\d+\s+\d+/\d+|\d+/\d+|\d+\.\d+|\d+)\s*(.*)$").unwrap()
        });

        let caps = re.captures(measure)?;
        let amount = parse_amount(caps.get(1)?.as_str())?;
        let unit = caps.get(2).map(|m| m.as_str().trim().to_string())?;
        Some((amount, unit))
    }

    /// Render for display: "1 1/2 oz Tequila" or bare "Salt"
    pub fn display(&self) -> String {
        match &self.measure {
            Some(measure) => format!("{} {}", measure, self.name),
            None => self.name.clone(),
        }
    }
}

fn parse_amount(text: &str) -> Option<f64> {
    if let Some((whole, frac)) = text.split_once(char::is_whitespace) {
        return Some(parse_amount(whole.trim())? + parse_amount(frac.trim())?);
    }
    if let Some((num, den)) = text.split_once('/') {
        let den: f64 = den.parse().ok()?;
        if den == 0.0 {
            return None;
        }
        let num: f64 = num.parse().ok()?;
        return Some(num / den);
    }
    text.parse().ok()
}

/// One drink with everything the UI and exporters need
#[derive(Debug, Clone, Default, Serialize)]
pub struct Drink {
    /// Provider id ("11007")
    pub id: String,
    /// Display name
    pub name: String,
    /// Provider category ("Ordinary Drink")
    pub category: String,
    /// Alcohol classification
    pub alcoholic: AlcoholClass,
    /// Serving glass
    pub glass: String,
    /// Preparation instructions
    pub instructions: String,
    /// Thumbnail URL
    pub thumb_url: String,
    /// Provider tags
    pub tags: Vec<String>,
    /// IBA listing, when the drink is an IBA official cocktail
    pub iba: Option<String>,
    /// Paired ingredient lines in slot order
    pub ingredients: Vec<IngredientLine>,
    /// Last provider-side modification, when given and parseable
    #[serde(skip)]
    pub date_modified: Option<chrono::NaiveDateTime>,
}

impl Drink {
    /// Build from a wire object. Missing fields become empty defaults;
    /// callers drop drinks without a name, as the UIs cannot render them.
    pub fn from_api(raw: &ApiDrink) -> Self {
        let tags = raw
            .tags
            .as_deref()
            .map(|t| {
                t.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let ingredients = raw
            .ingredient_slots()
            .map(|(name, measure)| IngredientLine { name, measure })
            .collect();

        let date_modified = raw.date_modified.as_deref().and_then(|d| {
            chrono::NaiveDateTime::parse_from_str(d.trim(), "%Y-%m-%d %H:%M:%S").ok()
        });

        Self {
            id: raw.id.clone().unwrap_or_default(),
            name: raw.name.clone().unwrap_or_default(),
            category: raw.category.clone().unwrap_or_default(),
            alcoholic: AlcoholClass::from_label(raw.alcoholic.as_deref()),
            glass: raw.glass.clone().unwrap_or_default(),
            instructions: raw.instructions.clone().unwrap_or_default(),
            thumb_url: raw.thumb.clone().unwrap_or_default(),
            tags,
            iba: raw.iba.clone().filter(|s| !s.trim().is_empty()),
            ingredients,
            date_modified,
        }
    }

    /// Modification date formatted for table cells, empty when unknown
    pub fn modified_label(&self) -> String {
        self.date_modified
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// The full recipe as copyable text
    pub fn recipe_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.name);
        out.push('\n');
        for line in &self.ingredients {
            out.push_str("- ");
            out.push_str(&line.display());
            out.push('\n');
        }
        if !self.instructions.is_empty() {
            out.push('\n');
            out.push_str(&self.instructions);
            out.push('\n');
        }
        out
    }
}

// ============================================================================
// Drink Set
// ============================================================================

/// Statistics about one result set
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetStats {
    pub total: usize,
    pub alcoholic: usize,
    pub non_alcoholic: usize,
    pub optional: usize,
    /// Distinct categories present
    pub categories: usize,
    /// Distinct glasses present
    pub glasses: usize,
}

/// The drinks one fetch returned for one term
#[derive(Debug, Clone, Serialize)]
pub struct DrinkSet {
    /// The term the fetch captured
    pub term: String,
    pub drinks: Vec<Drink>,
    pub stats: SetStats,
}

impl DrinkSet {
    /// Build a set, dropping unnamed drinks and computing statistics
    pub fn new(term: &str, drinks: Vec<Drink>) -> Self {
        let drinks: Vec<Drink> = drinks.into_iter().filter(|d| !d.name.is_empty()).collect();
        let stats = Self::compute_stats(&drinks);
        Self {
            term: term.to_string(),
            drinks,
            stats,
        }
    }

    /// An empty set for a term (used as the cleared state)
    pub fn empty(term: &str) -> Self {
        Self::new(term, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Drink> {
        self.drinks.get(index)
    }

    fn compute_stats(drinks: &[Drink]) -> SetStats {
        let mut stats = SetStats {
            total: drinks.len(),
            ..Default::default()
        };
        let mut categories = BTreeSet::new();
        let mut glasses = BTreeSet::new();

        for drink in drinks {
            match drink.alcoholic {
                AlcoholClass::Alcoholic => stats.alcoholic += 1,
                AlcoholClass::NonAlcoholic => stats.non_alcoholic += 1,
                AlcoholClass::OptionalAlcohol => stats.optional += 1,
                AlcoholClass::Unknown => {}
            }
            if !drink.category.is_empty() {
                categories.insert(drink.category.as_str());
            }
            if !drink.glass.is_empty() {
                glasses.insert(drink.glass.as_str());
            }
        }

        stats.categories = categories.len();
        stats.glasses = glasses.len();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drink(name: &str, category: &str, class: AlcoholClass) -> Drink {
        Drink {
            id: "1".to_string(),
            name: name.to_string(),
            category: category.to_string(),
            alcoholic: class,
            glass: "Highball glass".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn alcohol_class_maps_provider_labels() {
        assert_eq!(
            AlcoholClass::from_label(Some("Alcoholic")),
            AlcoholClass::Alcoholic
        );
        assert_eq!(
            AlcoholClass::from_label(Some("Non alcoholic")),
            AlcoholClass::NonAlcoholic
        );
        assert_eq!(
            AlcoholClass::from_label(Some("Optional alcohol")),
            AlcoholClass::OptionalAlcohol
        );
        assert_eq!(AlcoholClass::from_label(None), AlcoholClass::Unknown);
        assert_eq!(
            AlcoholClass::from_label(Some("Something new")),
            AlcoholClass::Unknown
        );
    }

    #[test]
    fn measures_parse_into_amount_and_unit() {
        let line = IngredientLine {
            name: "Tequila".to_string(),
            measure: Some("1 1/2 oz".to_string()),
        };
        assert_eq!(line.parsed_measure(), Some((1.5, "oz".to_string())));

        let line = IngredientLine {
            name: "Triple sec".to_string(),
            measure: Some("1/2 oz".to_string()),
        };
        assert_eq!(line.parsed_measure(), Some((0.5, "oz".to_string())));

        let line = IngredientLine {
            name: "Vodka".to_string(),
            measure: Some("2.5 cl".to_string()),
        };
        assert_eq!(line.parsed_measure(), Some((2.5, "cl".to_string())));

        let line = IngredientLine {
            name: "Bitters".to_string(),
            measure: Some("1 dash".to_string()),
        };
        assert_eq!(line.parsed_measure(), Some((1.0, "dash".to_string())));
    }

    #[test]
    fn non_numeric_measures_do_not_parse() {
        let line = IngredientLine {
            name: "Lime".to_string(),
            measure: Some("Juice of 1 lime".to_string()),
        };
        assert_eq!(line.parsed_measure(), None);

        let line = IngredientLine {
            name: "Salt".to_string(),
            measure: None,
        };
        assert_eq!(line.parsed_measure(), None);
    }

    #[test]
    fn ingredient_line_display_includes_measure_when_present() {
        let with = IngredientLine {
            name: "Gin".to_string(),
            measure: Some("2 oz".to_string()),
        };
        let without = IngredientLine {
            name: "Salt".to_string(),
            measure: None,
        };
        assert_eq!(with.display(), "2 oz Gin");
        assert_eq!(without.display(), "Salt");
    }

    #[test]
    fn set_drops_unnamed_drinks_and_counts_classes() {
        let drinks = vec![
            drink("Margarita", "Ordinary Drink", AlcoholClass::Alcoholic),
            drink("Virgin Colada", "Cocktail", AlcoholClass::NonAlcoholic),
            drink("", "Cocktail", AlcoholClass::Alcoholic),
            drink("Old Fashioned", "Cocktail", AlcoholClass::Alcoholic),
        ];
        let set = DrinkSet::new("o", drinks);

        assert_eq!(set.len(), 3);
        assert_eq!(set.stats.total, 3);
        assert_eq!(set.stats.alcoholic, 2);
        assert_eq!(set.stats.non_alcoholic, 1);
        assert_eq!(set.stats.categories, 2);
        assert_eq!(set.stats.glasses, 1);
    }

    #[test]
    fn empty_set_keeps_the_term() {
        let set = DrinkSet::empty("");
        assert!(set.is_empty());
        assert_eq!(set.term, "");
    }

    #[test]
    fn recipe_text_lists_ingredients_then_instructions() {
        let mut d = drink("Margarita", "Ordinary Drink", AlcoholClass::Alcoholic);
        d.ingredients = vec![
            IngredientLine {
                name: "Tequila".to_string(),
                measure: Some("1 1/2 oz".to_string()),
            },
            IngredientLine {
                name: "Salt".to_string(),
                measure: None,
            },
        ];
        d.instructions = "Shake with ice.".to_string();

        let text = d.recipe_text();
        assert!(text.starts_with("Margarita\n"));
        assert!(text.contains("- 1 1/2 oz Tequila\n"));
        assert!(text.contains("- Salt\n"));
        assert!(text.ends_with("Shake with ice.\n"));
    }

    #[test]
    fn tags_split_and_trim() {
        use crate::api::model::drinks_from_payload;
        let body = r#"{"drinks":[{
            "idDrink":"11007",
            "strDrink":"Margarita",
            "strTags":"IBA, ContemporaryClassic ,",
            "dateModified":"2015-08-18 14:42:59"
        }]}"#;
        let raw = drinks_from_payload(body, "search.php").unwrap();
        let drink = Drink::from_api(&raw[0]);

        assert_eq!(drink.tags, vec!["IBA", "ContemporaryClassic"]);
        assert_eq!(drink.modified_label(), "2015-08-18");
    }
}
