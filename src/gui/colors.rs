use crate::catalog::AlcoholClass;
use eframe::egui::Color32;

/// Map a drink category to its row accent color
pub fn color_for_category(category: &str) -> Color32 {
    match category {
        "Ordinary Drink" => Color32::from_rgb(220, 220, 220),
        "Cocktail" => Color32::from_rgb(100, 200, 220),
        "Shake" => Color32::from_rgb(235, 220, 140),
        "Other / Unknown" | "Other/Unknown" => Color32::from_rgb(150, 150, 150),
        "Cocoa" => Color32::from_rgb(220, 150, 120),
        "Shot" => Color32::from_rgb(230, 110, 110),
        "Coffee / Tea" => Color32::from_rgb(200, 170, 110),
        "Homemade Liqueur" => Color32::from_rgb(200, 130, 220),
        "Punch / Party Drink" => Color32::from_rgb(230, 140, 200),
        "Beer" => Color32::from_rgb(235, 200, 90),
        "Soft Drink" => Color32::from_rgb(130, 210, 130),
        _ => Color32::from_rgb(220, 220, 220),
    }
}

/// Map an alcohol classification to its badge color
pub fn color_for_class(class: AlcoholClass) -> Color32 {
    match class {
        AlcoholClass::Alcoholic => Color32::from_rgb(230, 120, 110),
        AlcoholClass::NonAlcoholic => Color32::from_rgb(130, 210, 130),
        AlcoholClass::OptionalAlcohol => Color32::from_rgb(230, 200, 110),
        AlcoholClass::Unknown => Color32::from_rgb(150, 150, 150),
    }
}
