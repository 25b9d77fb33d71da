//! Wire format of TheCocktailDB JSON API v1
//!
//! Drink objects arrive with `str`-prefixed keys and up to fifteen numbered
//! ingredient/measure slot pairs. An empty result is `{"drinks": null}`;
//! some endpoints answer a non-array `drinks` value instead (the ingredient
//! filter is known to return a bare string), so payload handling must not
//! assume an array.

use serde::Deserialize;
use std::collections::HashMap;

/// Number of ingredient/measure slots a drink object carries
pub const INGREDIENT_SLOTS: usize = 15;

/// One drink as the provider serializes it.
///
/// Fields beyond the named ones (the numbered slots and anything the
/// provider adds later) are collected in `extra` and read by key.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiDrink {
    #[serde(rename = "idDrink")]
    pub id: Option<String>,
    #[serde(rename = "strDrink")]
    pub name: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strAlcoholic")]
    pub alcoholic: Option<String>,
    #[serde(rename = "strGlass")]
    pub glass: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strDrinkThumb")]
    pub thumb: Option<String>,
    #[serde(rename = "strTags")]
    pub tags: Option<String>,
    #[serde(rename = "strIBA")]
    pub iba: Option<String>,
    #[serde(rename = "dateModified")]
    pub date_modified: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Option<serde_json::Value>>,
}

impl ApiDrink {
    fn slot(&self, prefix: &str, index: usize) -> Option<String> {
        let value = self.extra.get(&format!("{}{}", prefix, index))?;
        let text = value.as_ref()?.as_str()?.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Walk the numbered slots, yielding `(ingredient, measure)` pairs.
    ///
    /// Slots are considered independently: a blank ingredient name skips
    /// that slot without ending the walk, and a measure without a name is
    /// dropped (the provider ships both shapes).
    pub fn ingredient_slots(&self) -> impl Iterator<Item = (String, Option<String>)> + '_ {
        (1..=INGREDIENT_SLOTS).filter_map(move |i| {
            let name = self.slot("strIngredient", i)?;
            Some((name, self.slot("strMeasure", i)))
        })
    }
}

/// Top-level response wrapper shared by every drink endpoint
#[derive(Debug, Deserialize)]
pub struct DrinksResponse {
    pub drinks: Option<Vec<ApiDrink>>,
}

/// One row of `list.php?c=list`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntry {
    #[serde(rename = "strCategory")]
    pub category: String,
}

/// Response wrapper for the category listing
#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    pub drinks: Option<Vec<CategoryEntry>>,
}

/// Extract the drink objects out of a raw payload.
///
/// Tolerates `null`, a missing key and non-array `drinks` values, all of
/// which the provider uses to mean "nothing found".
pub fn drinks_from_payload(body: &str, context: &str) -> crate::Result<Vec<ApiDrink>> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| crate::BarFindError::decode(context, e))?;

    match value.get("drinks") {
        Some(serde_json::Value::Array(_)) => {
            let response: DrinksResponse = serde_json::from_value(value)
                .map_err(|e| crate::BarFindError::decode(context, e))?;
            Ok(response.drinks.unwrap_or_default())
        }
        _ => Ok(Vec::new()),
    }
}

/// Extract the category names out of a `list.php` payload
pub fn categories_from_payload(body: &str, context: &str) -> crate::Result<Vec<String>> {
    let response: CategoriesResponse = serde_json::from_str(body)
        .map_err(|e| crate::BarFindError::decode(context, e))?;
    Ok(response
        .drinks
        .unwrap_or_default()
        .into_iter()
        .map(|entry| entry.category)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARGARITA: &str = r#"{
        "drinks": [{
            "idDrink": "11007",
            "strDrink": "Margarita",
            "strTags": "IBA,ContemporaryClassic",
            "strIBA": "Contemporary Classics",
            "strCategory": "Ordinary Drink",
            "strAlcoholic": "Alcoholic",
            "strGlass": "Cocktail glass",
            "strInstructions": "Rub the rim of the glass with the lime slice.",
            "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/5noda61589575158.jpg",
            "strIngredient1": "Tequila",
            "strIngredient2": "Triple sec",
            "strIngredient3": "Lime juice",
            "strIngredient4": "Salt",
            "strIngredient5": null,
            "strMeasure1": "1 1/2 oz ",
            "strMeasure2": "1/2 oz ",
            "strMeasure3": "1 oz ",
            "strMeasure4": null,
            "strMeasure5": null,
            "dateModified": "2015-08-18 14:42:59"
        }]
    }"#;

    #[test]
    fn decodes_a_full_drink_object() {
        let drinks = drinks_from_payload(MARGARITA, "search.php").unwrap();
        assert_eq!(drinks.len(), 1);

        let drink = &drinks[0];
        assert_eq!(drink.id.as_deref(), Some("11007"));
        assert_eq!(drink.name.as_deref(), Some("Margarita"));
        assert_eq!(drink.category.as_deref(), Some("Ordinary Drink"));
        assert_eq!(drink.alcoholic.as_deref(), Some("Alcoholic"));
    }

    #[test]
    fn pairs_ingredient_slots_and_trims_measures() {
        let drinks = drinks_from_payload(MARGARITA, "search.php").unwrap();
        let slots: Vec<_> = drinks[0].ingredient_slots().collect();

        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0], ("Tequila".to_string(), Some("1 1/2 oz".to_string())));
        // Salt has no measure; the slot still counts
        assert_eq!(slots[3], ("Salt".to_string(), None));
    }

    #[test]
    fn null_drinks_means_empty() {
        let drinks = drinks_from_payload(r#"{"drinks": null}"#, "search.php").unwrap();
        assert!(drinks.is_empty());
    }

    #[test]
    fn non_array_drinks_means_empty() {
        // filter.php answers a bare string when nothing matches
        let drinks =
            drinks_from_payload(r#"{"drinks": "None Found"}"#, "filter.php").unwrap();
        assert!(drinks.is_empty());
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let err = drinks_from_payload("{not json", "search.php").unwrap_err();
        assert!(err.to_string().contains("search.php"));
    }

    #[test]
    fn blank_slot_does_not_end_the_walk() {
        let body = r#"{
            "drinks": [{
                "idDrink": "1",
                "strDrink": "Gap Fizz",
                "strIngredient1": "Gin",
                "strIngredient2": " ",
                "strIngredient3": "Soda water",
                "strMeasure1": "2 oz"
            }]
        }"#;
        let drinks = drinks_from_payload(body, "search.php").unwrap();
        let slots: Vec<_> = drinks[0].ingredient_slots().collect();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[1].0, "Soda water");
    }

    #[test]
    fn category_listing_decodes_names() {
        let body = r#"{"drinks":[{"strCategory":"Ordinary Drink"},{"strCategory":"Cocktail"}]}"#;
        let categories = categories_from_payload(body, "list.php").unwrap();
        assert_eq!(categories, vec!["Ordinary Drink", "Cocktail"]);
    }
}
