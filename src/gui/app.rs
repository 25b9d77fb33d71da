//! Main BarFind window

use crate::catalog::DrinkSet;
use crate::gui::colors;
use crate::gui::dialogs;
use crate::gui::search::SearchState;
use crate::gui::table::{ResultsTable, SortColumn};
use crate::logging;
use crate::{AppConfig, DrinkClient};
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Message types for background operations
pub enum BackgroundMessage {
    FetchStarted(String),
    FetchComplete(Arc<DrinkSet>),
    FetchError(String),
}

/// Main application state
pub struct BarFindApp {
    /// Search state
    search: SearchState,
    /// Results table
    table: ResultsTable,
    /// Latest fetched result set
    results: Arc<DrinkSet>,
    /// Display order (indices into `results.drinks`)
    display_indices: Vec<usize>,
    /// Provider client shared with fetch threads
    client: Arc<DrinkClient>,
    /// Fetches currently in flight
    in_flight: usize,
    /// Term of the most recently started fetch
    fetching_term: String,
    /// Channel for background messages
    bg_receiver: Receiver<BackgroundMessage>,
    /// Sender handed to fetch threads
    bg_sender: Sender<BackgroundMessage>,
    /// Show about dialog
    show_about: bool,
    /// Show detail dialog for the selected drink
    show_detail: bool,
    /// Status bar message
    status_message: String,
}

impl BarFindApp {
    /// Create a new app; fails only when the HTTP client cannot be built
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> crate::Result<Self> {
        let client = Arc::new(DrinkClient::new(config.fetch_config())?);
        let (tx, rx) = channel();

        Ok(Self {
            search: SearchState::new(Duration::from_millis(config.debounce_ms)),
            table: ResultsTable::default(),
            results: Arc::new(DrinkSet::empty("")),
            display_indices: Vec::new(),
            client,
            in_flight: 0,
            fetching_term: String::new(),
            bg_receiver: rx,
            bg_sender: tx,
            show_about: false,
            show_detail: false,
            status_message: "Type to search the cocktail database".to_string(),
        })
    }

    fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    /// Start a background fetch for `term`
    fn start_fetch(&mut self, term: String) {
        self.in_flight += 1;

        let tx = self.bg_sender.clone();
        let client = Arc::clone(&self.client);

        thread::spawn(move || {
            let _ = tx.send(BackgroundMessage::FetchStarted(term.clone()));
            match client.search_by_name(&term) {
                Ok(set) => {
                    let _ = tx.send(BackgroundMessage::FetchComplete(Arc::new(set)));
                }
                Err(e) => {
                    let hint = if e.is_transient() {
                        " (File \u{2192} Search Again retries)"
                    } else {
                        ""
                    };
                    let _ = tx.send(BackgroundMessage::FetchError(format!(
                        "Search '{}' failed: {}{}",
                        term, e, hint
                    )));
                }
            }
        });
    }

    /// Process background messages
    fn process_messages(&mut self) {
        while let Ok(msg) = self.bg_receiver.try_recv() {
            match msg {
                BackgroundMessage::FetchStarted(term) => {
                    self.fetching_term = term;
                }
                BackgroundMessage::FetchComplete(set) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    self.display_indices = (0..set.len()).collect();
                    self.status_message = if set.term.is_empty() {
                        "Type to search the cocktail database".to_string()
                    } else {
                        format!("{} for '{}'", crate::format_count(set.len()), set.term)
                    };
                    self.results = set;
                    self.table.clear();
                    self.show_detail = false;
                }
                BackgroundMessage::FetchError(msg) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    logging::error("GUI", &msg);
                    self.status_message = msg;
                }
            }
        }
    }

    fn selected_drink(&self) -> Option<&crate::Drink> {
        let row = self.table.selected?;
        let idx = *self.display_indices.get(row)?;
        self.results.get(idx)
    }

    fn copy_to_clipboard(&mut self, what: &str, text: String) {
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
            Ok(()) => self.status_message = format!("Copied {}", what),
            Err(e) => {
                logging::warn("GUI", &format!("clipboard copy failed: {}", e));
                self.status_message = "Clipboard unavailable".to_string();
            }
        }
    }

    /// Render menu bar
    fn render_menu(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Search Again").clicked() {
                        let term = self.search.query.clone();
                        self.start_fetch(term);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    if ui.button("Copy Name").clicked() {
                        if let Some(name) = self.selected_drink().map(|d| d.name.clone()) {
                            self.copy_to_clipboard("drink name", name);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Copy Recipe").clicked() {
                        if let Some(text) = self.selected_drink().map(|d| d.recipe_text()) {
                            self.copy_to_clipboard("recipe", text);
                        }
                        ui.close_menu();
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About BarFind").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Render search bar
    fn render_search_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("search your favorite cocktail");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.search.query)
                        .desired_width(ui.available_width() - 10.0)
                        .hint_text("margarita, mojito, \u{2026}"),
                );

                if self.search.first_frame {
                    response.request_focus();
                    self.search.first_frame = false;
                }

                // The rendered value is already updated at this point; arm
                // the trigger for the text as it reads now. Pressing Enter
                // does not change the text, so it schedules nothing.
                if response.changed() {
                    let term = self.search.query.clone();
                    self.search.debouncer.schedule(term, Instant::now());
                }
            });
        });
    }

    /// Render status bar
    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_fetching() {
                    ui.spinner();
                    ui.label(format!("Searching '{}'\u{2026}", self.fetching_term));
                } else {
                    ui.label(&self.status_message);
                    if let Some(drink) = self.selected_drink() {
                        ui.separator();
                        ui.label(format!(
                            "{} \u{2014} {}, {}",
                            drink.name,
                            drink.category,
                            drink.glass
                        ));
                    }
                }
            });
        });
    }

    /// Render the results table
    fn render_results_table(&mut self, ui: &mut egui::Ui) {
        use egui_extras::{Column, TableBuilder};

        let row_count = self.display_indices.len();

        if row_count == 0 {
            ui.centered_and_justified(|ui| {
                let message = if self.is_fetching() {
                    format!("Searching '{}'\u{2026}", self.fetching_term)
                } else if self.results.term.is_empty() {
                    "Type to search the cocktail database".to_string()
                } else {
                    format!("No drinks found for '{}'", self.results.term)
                };
                ui.weak(message);
            });
            return;
        }

        let headers: [(&str, SortColumn); 5] = [
            ("Name", SortColumn::Name),
            ("Category", SortColumn::Category),
            ("Glass", SortColumn::Glass),
            ("Type", SortColumn::Type),
            ("Modified", SortColumn::Modified),
        ];

        let mut clicked_column: Option<SortColumn> = None;
        let mut new_selection: Option<usize> = None;
        let mut open_detail = false;

        let sort_column = self.table.sort_column;
        let sort_order = self.table.sort_order;
        let current_selection = self.table.selected;
        let available_height = ui.available_height();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(220.0).at_least(60.0).clip(true))
            .column(Column::initial(140.0).at_least(40.0).clip(true))
            .column(Column::remainder().at_least(40.0).clip(true))
            .column(Column::initial(110.0).at_least(40.0).clip(true))
            .column(Column::initial(90.0).at_least(40.0).clip(true))
            .min_scrolled_height(0.0)
            .max_scroll_height(available_height)
            .sense(egui::Sense::click())
            .header(20.0, |mut header| {
                for (label, column) in headers {
                    header.col(|ui| {
                        let text = if sort_column == column {
                            format!("{}{}", label, sort_order.indicator())
                        } else {
                            label.to_string()
                        };
                        if ui.selectable_label(sort_column == column, text).clicked() {
                            clicked_column = Some(column);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, row_count, |mut row| {
                    let row_index = row.index();
                    let is_selected = current_selection == Some(row_index);
                    if is_selected {
                        row.set_selected(true);
                    }

                    let drink = self
                        .display_indices
                        .get(row_index)
                        .and_then(|&idx| self.results.get(idx));
                    let Some(drink) = drink else {
                        return;
                    };

                    row.col(|ui| {
                        if ui.selectable_label(is_selected, &drink.name).clicked() {
                            new_selection = Some(row_index);
                        }
                    });
                    row.col(|ui| {
                        let color = colors::color_for_category(&drink.category);
                        if ui
                            .selectable_label(is_selected, egui::RichText::new(&drink.category).color(color))
                            .clicked()
                        {
                            new_selection = Some(row_index);
                        }
                    });
                    row.col(|ui| {
                        if ui.selectable_label(is_selected, &drink.glass).clicked() {
                            new_selection = Some(row_index);
                        }
                    });
                    row.col(|ui| {
                        let color = colors::color_for_class(drink.alcoholic);
                        if ui
                            .selectable_label(
                                is_selected,
                                egui::RichText::new(drink.alcoholic.as_str()).color(color),
                            )
                            .clicked()
                        {
                            new_selection = Some(row_index);
                        }
                    });
                    row.col(|ui| {
                        if ui
                            .selectable_label(is_selected, drink.modified_label())
                            .clicked()
                        {
                            new_selection = Some(row_index);
                        }
                    });

                    if row.response().double_clicked() {
                        new_selection = Some(row_index);
                        open_detail = true;
                    }
                });
            });

        if let Some(column) = clicked_column {
            self.table.click_column(column);
            let set = Arc::clone(&self.results);
            self.table.sort_indices(&set, &mut self.display_indices);
        }
        if let Some(row) = new_selection {
            self.table.selected = Some(row);
        }
        if open_detail {
            self.show_detail = true;
        }
    }

    fn render_detail_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_detail {
            return;
        }
        let drink = self.selected_drink().cloned();
        let Some(drink) = drink else {
            self.show_detail = false;
            return;
        };

        let response = dialogs::render_detail(ctx, &drink);
        if response.copy_recipe {
            self.copy_to_clipboard("recipe", drink.recipe_text());
        }
        if response.open_image {
            if let Err(e) = open::that(&drink.thumb_url) {
                logging::warn("GUI", &format!("open image failed: {}", e));
                self.status_message = "Could not open image".to_string();
            }
        }
        if response.close {
            self.show_detail = false;
        }
    }
}

impl eframe::App for BarFindApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_messages();

        let now = Instant::now();
        if let Some(term) = self.search.debouncer.poll(now) {
            logging::log_debounce_fire(&term);
            self.start_fetch(term);
        }
        // Wake up again when the armed trigger comes due; egui repaints on
        // input, not on a timer.
        if let Some(remaining) = self.search.debouncer.time_until_due(now) {
            ctx.request_repaint_after(remaining);
        }

        self.render_menu(ctx);
        self.render_search_bar(ctx);
        self.render_status_bar(ctx);
        dialogs::render_about(ctx, &mut self.show_about);
        self.render_detail_dialog(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_results_table(ui);
        });

        if self.is_fetching() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Window teardown: an armed trigger must never fire past this point.
        self.search.debouncer.cancel();
        logging::flush();
    }
}
