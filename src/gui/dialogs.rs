use crate::catalog::Drink;
use eframe::egui;

// ============================================================================
// About dialog
// ============================================================================

pub fn render_about(ctx: &egui::Context, show: &mut bool) {
    if !*show {
        return;
    }
    egui::Window::new("About BarFind")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("BarFind");
                ui.label(format!("Version {}", crate::VERSION));
                ui.add_space(10.0);
                ui.label("Fast cocktail database search");
                ui.label("Data: TheCocktailDB");
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    *show = false;
                }
            });
        });
}

// ============================================================================
// Drink detail dialog
// ============================================================================

/// What the user asked for inside the detail dialog
#[derive(Default)]
pub struct DetailResponse {
    pub copy_recipe: bool,
    pub open_image: bool,
    pub close: bool,
}

pub fn render_detail(ctx: &egui::Context, drink: &Drink) -> DetailResponse {
    let mut response = DetailResponse::default();

    egui::Window::new(&drink.name)
        .collapsible(false)
        .resizable(true)
        .default_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("drink_meta").num_columns(2).show(ui, |ui| {
                ui.label("Category");
                ui.label(&drink.category);
                ui.end_row();

                ui.label("Glass");
                ui.label(&drink.glass);
                ui.end_row();

                ui.label("Type");
                ui.colored_label(
                    super::colors::color_for_class(drink.alcoholic),
                    drink.alcoholic.as_str(),
                );
                ui.end_row();

                if let Some(iba) = &drink.iba {
                    ui.label("IBA");
                    ui.label(iba);
                    ui.end_row();
                }
                if !drink.tags.is_empty() {
                    ui.label("Tags");
                    ui.label(drink.tags.join(", "));
                    ui.end_row();
                }
            });

            ui.separator();
            ui.strong("Ingredients");
            for line in &drink.ingredients {
                ui.label(format!("\u{2022} {}", line.display()));
            }

            if !drink.instructions.is_empty() {
                ui.separator();
                ui.strong("Instructions");
                ui.label(&drink.instructions);
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Copy Recipe").clicked() {
                    response.copy_recipe = true;
                }
                if !drink.thumb_url.is_empty() && ui.button("Open Image").clicked() {
                    response.open_image = true;
                }
                if ui.button("Close").clicked() {
                    response.close = true;
                }
            });
        });

    response
}
