use crate::catalog::DrinkSet;
use crate::logging;
use crate::tui::search::SearchState;
use crate::tui::table::{SortColumn, SortOrder, TableState};
use crate::tui::ui;
use crate::{AppConfig, Drink, DrinkClient};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Messages from background fetch threads
pub enum BgMessage {
    FetchStarted(String),
    FetchComplete(Arc<DrinkSet>),
    FetchError(String),
}

/// Modal overlay above the result table
#[derive(Default, PartialEq)]
pub enum Overlay {
    #[default]
    None,
    Detail,
    Help,
}

pub struct App {
    // Data
    pub results: Arc<DrinkSet>,
    pub display_indices: Vec<usize>,

    // Sub-states
    pub search: SearchState,
    pub table: TableState,
    pub overlay: Overlay,

    // Fetch state
    client: Arc<DrinkClient>,
    in_flight: usize,
    pub fetching_term: String,
    pub status_message: String,

    // Channel
    bg_receiver: Receiver<BgMessage>,
    bg_sender: Sender<BgMessage>,

    // Quit flag
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> crate::Result<Self> {
        let client = Arc::new(DrinkClient::new(config.fetch_config())?);
        let (tx, rx) = channel();

        Ok(Self {
            results: Arc::new(DrinkSet::empty("")),
            display_indices: Vec::new(),
            search: SearchState::new(Duration::from_millis(config.debounce_ms)),
            table: TableState::default(),
            overlay: Overlay::None,
            client,
            in_flight: 0,
            fetching_term: String::new(),
            status_message: "Type to search the cocktail database".to_string(),
            bg_receiver: rx,
            bg_sender: tx,
            should_quit: false,
        })
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> crate::Result<()> {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        loop {
            terminal
                .draw(|frame| ui::draw(frame, self))
                .map_err(|e| crate::BarFindError::Terminal(e.to_string()))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    self.handle_key(key);
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.process_messages();
                if let Some(term) = self.search.debouncer.poll(Instant::now()) {
                    logging::log_debounce_fire(&term);
                    self.start_fetch(term);
                }
                last_tick = Instant::now();
            }

            if self.should_quit {
                // Teardown: a trigger armed at this point must never fire.
                self.search.debouncer.cancel();
                return Ok(());
            }
        }
    }

    /// Spawn a background thread running the provider search for `term`
    fn start_fetch(&mut self, term: String) {
        self.in_flight += 1;
        self.fetching_term = term.clone();

        let tx = self.bg_sender.clone();
        let client = Arc::clone(&self.client);

        thread::spawn(move || {
            let _ = tx.send(BgMessage::FetchStarted(term.clone()));
            match client.search_by_name(&term) {
                Ok(set) => {
                    let _ = tx.send(BgMessage::FetchComplete(Arc::new(set)));
                }
                Err(e) => {
                    let hint = if e.is_transient() { " (F5 retries)" } else { "" };
                    let _ = tx.send(BgMessage::FetchError(format!(
                        "Search '{}' failed: {}{}",
                        term, e, hint
                    )));
                }
            }
        });
    }

    fn process_messages(&mut self) {
        while let Ok(msg) = self.bg_receiver.try_recv() {
            match msg {
                BgMessage::FetchStarted(term) => {
                    self.fetching_term = term;
                }
                BgMessage::FetchComplete(set) => {
                    self.in_flight = self.in_flight.saturating_sub(1);

                    // No in-flight bookkeeping beyond the counter: the most
                    // recently completed fetch wins.
                    self.display_indices = (0..set.len()).collect();
                    self.status_message = if set.term.is_empty() {
                        "Type to search the cocktail database".to_string()
                    } else {
                        format!("{} for '{}'", crate::format_count(set.len()), set.term)
                    };
                    self.results = set;
                    self.table.reset(self.display_indices.len());
                }
                BgMessage::FetchError(msg) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    logging::error("TUI", &msg);
                    self.status_message = msg;
                }
            }
        }
    }

    /// The drink behind a display row
    pub fn drink_at(&self, row: usize) -> Option<&Drink> {
        let idx = *self.display_indices.get(row)?;
        self.results.get(idx)
    }

    pub fn selected_drink(&self) -> Option<&Drink> {
        self.drink_at(self.table.selected?)
    }

    pub fn handle_sort_click(&mut self, column: SortColumn) {
        let new_order = if self.table.sort_column == column {
            self.table.sort_order.toggled()
        } else {
            SortOrder::Ascending
        };
        self.table.sort_column = column;
        self.table.sort_order = new_order;

        // Result sets are tiny (the provider caps them around 25), sort in
        // place on the event thread.
        let set = Arc::clone(&self.results);
        self.display_indices.sort_by(|&a, &b| {
            let da = &set.drinks[a];
            let db = &set.drinks[b];
            let cmp = match column {
                SortColumn::Name => da.name.to_lowercase().cmp(&db.name.to_lowercase()),
                SortColumn::Category => da.category.cmp(&db.category),
                SortColumn::Glass => da.glass.cmp(&db.glass),
                SortColumn::Type => da.alcoholic.as_str().cmp(db.alcoholic.as_str()),
                SortColumn::Modified => da.date_modified.cmp(&db.date_modified),
            };
            if new_order == SortOrder::Descending {
                cmp.reverse()
            } else {
                cmp
            }
        });
    }

    /// Copy the selected drink's recipe to the system clipboard
    fn copy_selected_recipe(&mut self) {
        let Some(drink) = self.selected_drink() else {
            return;
        };
        let name = drink.name.clone();
        let text = drink.recipe_text();

        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
            Ok(()) => {
                self.status_message = format!("Copied recipe for '{}'", name);
            }
            Err(e) => {
                logging::warn("TUI", &format!("clipboard copy failed: {}", e));
                self.status_message = "Clipboard unavailable".to_string();
            }
        }
    }

    /// Reschedule the pending fetch for the query as it reads now.
    ///
    /// Called after every text mutation: the rendered value has already been
    /// updated, the old trigger (if any) is cancelled, and a fresh trigger
    /// capturing the current text is armed. The empty query schedules too.
    fn note_query_changed(&mut self) {
        let term = self.search.query.clone();
        self.search.debouncer.schedule(term, Instant::now());
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if self.overlay != Overlay::None {
            self.handle_overlay_key(key);
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.search.focused && !self.search.query.is_empty() {
                    // Clearing the field is a text change like any other:
                    // the (now empty) term is scheduled, not suppressed.
                    self.search.query.clear();
                    self.search.cursor_pos = 0;
                    self.note_query_changed();
                } else if self.search.focused {
                    self.search.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            KeyCode::F(5) => {
                // Explicit refresh bypasses the quiet period
                let term = self.search.query.clone();
                self.start_fetch(term);
                return;
            }
            _ => {}
        }

        if self.search.focused {
            self.handle_search_key(key);
        } else {
            self.handle_table_key(key);
        }
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                self.overlay = Overlay::None;
            }
            KeyCode::Char('c') if self.overlay == Overlay::Detail => {
                self.copy_selected_recipe();
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                self.search.query.insert(self.search.cursor_pos, c);
                self.search.cursor_pos += c.len_utf8();
                self.note_query_changed();
            }
            KeyCode::Backspace => {
                if self.search.cursor_pos > 0 {
                    // Find the previous character boundary
                    let prev = self.search.query[..self.search.cursor_pos]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.search.query.remove(prev);
                    self.search.cursor_pos = prev;
                    self.note_query_changed();
                }
            }
            KeyCode::Delete => {
                if self.search.cursor_pos < self.search.query.len() {
                    self.search.query.remove(self.search.cursor_pos);
                    self.note_query_changed();
                }
            }
            KeyCode::Left => {
                if self.search.cursor_pos > 0 {
                    let prev = self.search.query[..self.search.cursor_pos]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.search.cursor_pos = prev;
                }
            }
            KeyCode::Right => {
                if self.search.cursor_pos < self.search.query.len() {
                    let next = self.search.query[self.search.cursor_pos..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.search.cursor_pos + i)
                        .unwrap_or(self.search.query.len());
                    self.search.cursor_pos = next;
                }
            }
            KeyCode::Home => {
                self.search.cursor_pos = 0;
            }
            KeyCode::End => {
                self.search.cursor_pos = self.search.query.len();
            }
            // Submitting the form only moves focus; it never issues a
            // search of its own.
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.search.focused = false;
            }
            _ => {}
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        let total = self.display_indices.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.table.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.table.select_next(total),
            KeyCode::PageUp => self.table.page_up(),
            KeyCode::PageDown => self.table.page_down(total),
            KeyCode::Home => self.table.select_first(),
            KeyCode::End => self.table.select_last(total),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.search.focused = true;
            }

            KeyCode::Enter => {
                if self.selected_drink().is_some() {
                    self.overlay = Overlay::Detail;
                }
            }
            KeyCode::Char('c') => self.copy_selected_recipe(),
            KeyCode::Char('?') => self.overlay = Overlay::Help,

            // Sort columns
            KeyCode::F(1) => self.handle_sort_click(SortColumn::Name),
            KeyCode::F(2) => self.handle_sort_click(SortColumn::Category),
            KeyCode::F(3) => self.handle_sort_click(SortColumn::Glass),
            KeyCode::F(4) => self.handle_sort_click(SortColumn::Type),
            KeyCode::F(6) => self.handle_sort_click(SortColumn::Modified),

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.focused = true;
                self.search.query.push(c);
                self.search.cursor_pos = self.search.query.len();
                self.note_query_changed();
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AlcoholClass, DrinkSet};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::new(&AppConfig::default()).unwrap()
    }

    fn drink(name: &str, category: &str) -> Drink {
        Drink {
            id: name.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            alcoholic: AlcoholClass::Alcoholic,
            ..Default::default()
        }
    }

    fn install_results(app: &mut App, drinks: Vec<Drink>) {
        let set = Arc::new(DrinkSet::new("test", drinks));
        app.display_indices = (0..set.len()).collect();
        app.results = set;
        app.table.reset(app.display_indices.len());
    }

    #[test]
    fn typing_updates_query_synchronously_and_arms_the_trigger() {
        let mut app = test_app();

        app.handle_key(key(KeyCode::Char('m')));
        assert_eq!(app.search.query, "m");
        assert!(app.search.debouncer.is_pending());

        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.search.query, "ma");
        // Still exactly one pending trigger, now for the newer term
        assert!(app.search.debouncer.is_pending());
        let fired = app
            .search
            .debouncer
            .poll(Instant::now() + Duration::from_secs(2));
        assert_eq!(fired, Some("ma".to_string()));
    }

    #[test]
    fn enter_in_search_moves_focus_without_scheduling() {
        let mut app = test_app();

        app.handle_key(key(KeyCode::Enter));
        assert!(!app.search.focused);
        assert!(!app.search.debouncer.is_pending());
    }

    #[test]
    fn clearing_the_query_schedules_the_empty_term() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('m')));
        let _ = app
            .search
            .debouncer
            .poll(Instant::now() + Duration::from_secs(2));

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.search.query, "");
        let fired = app
            .search
            .debouncer
            .poll(Instant::now() + Duration::from_secs(2));
        assert_eq!(fired, Some(String::new()));
    }

    #[test]
    fn backspace_reschedules_with_the_shortened_term() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('r')));
        app.handle_key(key(KeyCode::Char('u')));
        app.handle_key(key(KeyCode::Char('m')));
        app.handle_key(key(KeyCode::Backspace));

        assert_eq!(app.search.query, "ru");
        let fired = app
            .search
            .debouncer
            .poll(Instant::now() + Duration::from_secs(2));
        assert_eq!(fired, Some("ru".to_string()));
    }

    #[test]
    fn typing_in_table_mode_refocuses_search_and_schedules() {
        let mut app = test_app();
        app.search.focused = false;

        app.handle_key(key(KeyCode::Char('g')));
        assert!(app.search.focused);
        assert_eq!(app.search.query, "g");
        assert!(app.search.debouncer.is_pending());
    }

    #[test]
    fn sort_orders_rows_and_toggles_direction() {
        let mut app = test_app();
        install_results(
            &mut app,
            vec![
                drink("Mojito", "Cocktail"),
                drink("Americano", "Ordinary Drink"),
                drink("Zombie", "Punch / Party Drink"),
            ],
        );

        app.search.focused = false;
        app.handle_key(key(KeyCode::F(1)));
        let names: Vec<_> = (0..3).map(|i| app.drink_at(i).unwrap().name.clone()).collect();
        assert_eq!(names, vec!["Americano", "Mojito", "Zombie"]);

        app.handle_key(key(KeyCode::F(1)));
        let names: Vec<_> = (0..3).map(|i| app.drink_at(i).unwrap().name.clone()).collect();
        assert_eq!(names, vec!["Zombie", "Mojito", "Americano"]);
    }

    #[test]
    fn enter_on_a_row_opens_the_detail_overlay() {
        let mut app = test_app();
        install_results(&mut app, vec![drink("Mojito", "Cocktail")]);
        app.search.focused = false;

        app.handle_key(key(KeyCode::Enter));
        assert!(app.overlay == Overlay::Detail);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.overlay == Overlay::None);
    }

    #[test]
    fn fetch_complete_replaces_results_and_resets_selection() {
        let mut app = test_app();
        install_results(&mut app, vec![drink("Old", "Cocktail")]);
        app.table.selected = Some(0);

        let newer = Arc::new(DrinkSet::new(
            "ma",
            vec![drink("Margarita", "Ordinary Drink"), drink("Mai Tai", "Cocktail")],
        ));
        app.bg_sender
            .send(BgMessage::FetchComplete(Arc::clone(&newer)))
            .unwrap();
        app.process_messages();

        assert_eq!(app.results.term, "ma");
        assert_eq!(app.display_indices.len(), 2);
        assert_eq!(app.table.selected, Some(0));
        assert!(app.status_message.contains("2 drinks"));
    }

    #[test]
    fn fetch_error_lands_in_the_status_bar() {
        let mut app = test_app();
        app.bg_sender
            .send(BgMessage::FetchError("Search 'x' failed: boom".to_string()))
            .unwrap();
        app.process_messages();
        assert!(app.status_message.contains("boom"));
    }
}
