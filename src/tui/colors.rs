use crate::catalog::AlcoholClass;
use ratatui::style::Color;

pub fn color_for_category(category: &str) -> Color {
    match category {
        "Ordinary Drink" => Color::White,
        "Cocktail" => Color::Cyan,
        "Shake" => Color::LightYellow,
        "Other / Unknown" | "Other/Unknown" => Color::Gray,
        "Cocoa" => Color::LightRed,
        "Shot" => Color::Red,
        "Coffee / Tea" => Color::Yellow,
        "Homemade Liqueur" => Color::Magenta,
        "Punch / Party Drink" => Color::LightMagenta,
        "Beer" => Color::LightYellow,
        "Soft Drink" => Color::Green,
        _ => Color::White,
    }
}

pub fn color_for_class(class: AlcoholClass) -> Color {
    match class {
        AlcoholClass::Alcoholic => Color::LightRed,
        AlcoholClass::NonAlcoholic => Color::Green,
        AlcoholClass::OptionalAlcohol => Color::Yellow,
        AlcoholClass::Unknown => Color::DarkGray,
    }
}

pub fn icon_for_drink(class: AlcoholClass, category: &str) -> &'static str {
    match category {
        "Shot" => return "\u{1F943}",                  // tumbler
        "Beer" => return "\u{1F37A}",                  // beer mug
        "Coffee / Tea" => return "\u{2615}",           // coffee
        "Punch / Party Drink" => return "\u{1F379}",   // tropical drink
        "Cocoa" | "Shake" => return "\u{1F95B}",       // glass of milk
        _ => {}
    }
    match class {
        AlcoholClass::NonAlcoholic => "\u{1F964}",     // cup with straw
        _ => "\u{1F378}",                              // cocktail glass
    }
}
