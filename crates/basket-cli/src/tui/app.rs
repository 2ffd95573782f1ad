//! Application state and logic

use std::time::{Duration, Instant};

use uuid::Uuid;

use basket_core::{Config, Item, ListStore};

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode
    Normal,
    /// Add form (after pressing a)
    Add,
    /// Waiting for y/n on a removal
    ConfirmRemove,
}

/// Which field of the add form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Name,
    Quantity,
    Unit,
}

impl AddField {
    /// Move to the next field (wrapping)
    pub fn next(self) -> Self {
        match self {
            AddField::Name => AddField::Quantity,
            AddField::Quantity => AddField::Unit,
            AddField::Unit => AddField::Name,
        }
    }

    /// Move to the previous field (wrapping)
    pub fn prev(self) -> Self {
        match self {
            AddField::Name => AddField::Unit,
            AddField::Quantity => AddField::Name,
            AddField::Unit => AddField::Quantity,
        }
    }
}

/// Application state
pub struct App {
    /// The session's item list
    pub store: ListStore,
    /// Loaded configuration
    pub config: Config,
    /// Whether the app should exit
    pub should_quit: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Focused field of the add form
    pub add_field: AddField,
    /// Add form: name input
    pub name_input: String,
    /// Add form: quantity input
    pub quantity_input: String,
    /// Add form: unit input
    pub unit_input: String,
    /// Currently selected item index
    pub selected: usize,
    /// Status message to display temporarily
    pub status_message: Option<String>,
    /// When the status message was set (for auto-dismiss)
    pub status_message_time: Option<Instant>,
    /// Validation or action error, dismissed by the next key
    pub error_message: Option<String>,
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Pending 'g' keypress for gg sequence (with timestamp)
    pub pending_g: Option<Instant>,
    /// Item awaiting removal confirmation
    pub pending_remove: Option<Uuid>,
}

impl App {
    /// Create a new app with an empty list
    pub fn new(config: Config) -> Self {
        Self {
            store: ListStore::new(),
            config,
            should_quit: false,
            input_mode: InputMode::Normal,
            add_field: AddField::Name,
            name_input: String::new(),
            quantity_input: String::new(),
            unit_input: String::new(),
            selected: 0,
            status_message: None,
            status_message_time: None,
            error_message: None,
            show_help: false,
            pending_g: None,
            pending_remove: None,
        }
    }

    /// Get the currently selected item
    pub fn selected_item(&self) -> Option<&Item> {
        self.store.items().get(self.selected)
    }

    // ==================== Messages ====================

    /// Set a status message (will auto-dismiss after 3 seconds)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_message_time = Some(Instant::now());
    }

    /// Check and clear expired status message
    pub fn check_status_timeout(&mut self) {
        if let Some(time) = self.status_message_time {
            if time.elapsed() > Duration::from_secs(3) {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }

    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Whether an error is being shown
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Dismiss the error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // ==================== Navigation ====================

    /// Move selection up
    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected < self.store.item_count().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Move selection to the first item (vim 'gg')
    pub fn move_to_first(&mut self) {
        self.selected = 0;
    }

    /// Move selection to the last item (vim 'G')
    pub fn move_to_last(&mut self) {
        self.selected = self.store.item_count().saturating_sub(1);
    }

    /// Clamp selection after the list shrinks
    fn clamp_selection(&mut self) {
        if self.store.is_empty() {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(self.store.item_count() - 1);
        }
    }

    // ==================== Add form ====================

    /// Open the add form
    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Add;
        self.add_field = AddField::Name;
        self.name_input.clear();
        self.quantity_input.clear();
        self.unit_input = self.config.default_unit.clone().unwrap_or_default();
    }

    /// Close the add form, discarding input
    pub fn cancel_add(&mut self) {
        self.input_mode = InputMode::Normal;
        self.name_input.clear();
        self.quantity_input.clear();
        self.unit_input.clear();
    }

    /// Move focus to the next form field
    pub fn next_field(&mut self) {
        self.add_field = self.add_field.next();
    }

    /// Move focus to the previous form field
    pub fn prev_field(&mut self) {
        self.add_field = self.add_field.prev();
    }

    /// The input buffer of the focused field
    pub fn active_input(&self) -> &str {
        match self.add_field {
            AddField::Name => &self.name_input,
            AddField::Quantity => &self.quantity_input,
            AddField::Unit => &self.unit_input,
        }
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.add_field {
            AddField::Name => &mut self.name_input,
            AddField::Quantity => &mut self.quantity_input,
            AddField::Unit => &mut self.unit_input,
        }
    }

    /// Append a character to the focused field
    pub fn insert_char(&mut self, c: char) {
        self.active_input_mut().push(c);
    }

    /// Delete the last character of the focused field
    pub fn delete_char(&mut self) {
        self.active_input_mut().pop();
    }

    /// Submit the add form
    ///
    /// On success the form is cleared and stays open for the next entry;
    /// on a validation failure the inputs are kept for correction.
    pub fn submit_add(&mut self) {
        match self
            .store
            .add_item(&self.name_input, &self.quantity_input, &self.unit_input)
        {
            Ok(item) => {
                self.set_status(format!("Added {}", item));
                self.name_input.clear();
                self.quantity_input.clear();
                self.unit_input = self.config.default_unit.clone().unwrap_or_default();
                self.add_field = AddField::Name;
            }
            Err(e) => {
                self.set_error(e.to_string());
            }
        }
    }

    // ==================== Item actions ====================

    /// Toggle purchased on the selected item
    pub fn toggle_selected(&mut self) {
        if let Some(item) = self.selected_item() {
            let id = item.id;
            self.store.toggle_purchased(id);
            if let Some(item) = self.store.get_item(id) {
                let state = if item.purchased { "bought" } else { "to buy" };
                self.set_status(format!("'{}' marked {}", item.name, state));
            }
        }
    }

    /// Remove the selected item, asking for confirmation when configured
    pub fn request_remove(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        let id = item.id;

        if self.config.confirm_remove {
            self.pending_remove = Some(id);
            self.input_mode = InputMode::ConfirmRemove;
        } else {
            self.do_remove(id);
        }
    }

    /// Resolve a pending removal confirmation
    pub fn confirm_remove(&mut self, confirmed: bool) {
        let pending = self.pending_remove.take();
        self.input_mode = InputMode::Normal;

        if confirmed {
            if let Some(id) = pending {
                self.do_remove(id);
            }
        }
    }

    fn do_remove(&mut self, id: Uuid) {
        let name = self.store.get_item(id).map(|i| i.name.clone());
        self.store.remove_item(id);
        self.clamp_selection();
        if let Some(name) = name {
            self.set_status(format!("Removed '{}'", name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Config::default())
    }

    fn app_with_items(names: &[&str]) -> App {
        let mut app = app();
        for name in names {
            app.store.add_item(name, "1", "pc").unwrap();
        }
        app
    }

    #[test]
    fn test_add_field_cycle() {
        assert_eq!(AddField::Name.next(), AddField::Quantity);
        assert_eq!(AddField::Quantity.next(), AddField::Unit);
        assert_eq!(AddField::Unit.next(), AddField::Name);

        assert_eq!(AddField::Name.prev(), AddField::Unit);
        assert_eq!(AddField::Unit.prev(), AddField::Quantity);
    }

    #[test]
    fn test_navigation_clamps_to_bounds() {
        let mut app = app_with_items(&["A", "B", "C"]);

        app.move_up();
        assert_eq!(app.selected, 0);

        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.selected, 2);

        app.move_to_first();
        assert_eq!(app.selected, 0);
        app.move_to_last();
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_navigation_on_empty_list() {
        let mut app = app();
        app.move_down();
        app.move_to_last();
        assert_eq!(app.selected, 0);
        assert!(app.selected_item().is_none());
    }

    #[test]
    fn test_add_form_flow() {
        let mut app = app();
        app.enter_add_mode();
        assert_eq!(app.input_mode, InputMode::Add);

        for c in "Milk".chars() {
            app.insert_char(c);
        }
        app.next_field();
        app.insert_char('2');
        app.next_field();
        app.insert_char('l');

        app.submit_add();
        assert_eq!(app.store.item_count(), 1);
        assert_eq!(app.store.items()[0].name, "Milk");
        // Form stays open, cleared for the next entry
        assert_eq!(app.input_mode, InputMode::Add);
        assert!(app.name_input.is_empty());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_add_form_default_unit_prefill() {
        let config = Config {
            default_unit: Some("pc".to_string()),
            ..Config::default()
        };
        let mut app = App::new(config);

        app.enter_add_mode();
        assert_eq!(app.unit_input, "pc");
    }

    #[test]
    fn test_submit_invalid_keeps_input() {
        let mut app = app();
        app.enter_add_mode();
        for c in "Milk".chars() {
            app.insert_char(c);
        }
        app.next_field();
        app.insert_char('x'); // bad quantity
        app.next_field();
        app.insert_char('l');

        app.submit_add();
        assert!(app.store.is_empty());
        assert!(app.has_error());
        // Inputs kept for correction
        assert_eq!(app.name_input, "Milk");
        assert_eq!(app.quantity_input, "x");
    }

    #[test]
    fn test_backspace_edits_active_field() {
        let mut app = app();
        app.enter_add_mode();
        app.insert_char('M');
        app.insert_char('i');
        app.delete_char();
        assert_eq!(app.name_input, "M");
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = app_with_items(&["A", "B"]);
        app.selected = 1;

        app.toggle_selected();
        assert!(app.store.items()[1].purchased);
        assert!(!app.store.items()[0].purchased);
        assert_eq!(app.store.unpurchased_count(), 1);

        app.toggle_selected();
        assert!(!app.store.items()[1].purchased);
    }

    #[test]
    fn test_remove_without_confirmation() {
        let mut app = app_with_items(&["A", "B", "C"]);
        app.selected = 1;

        app.request_remove();
        let names: Vec<&str> = app.store.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_remove_with_confirmation() {
        let mut app = app_with_items(&["A"]);
        app.config.confirm_remove = true;

        app.request_remove();
        assert_eq!(app.input_mode, InputMode::ConfirmRemove);
        assert_eq!(app.store.item_count(), 1);

        app.confirm_remove(false);
        assert_eq!(app.store.item_count(), 1);
        assert_eq!(app.input_mode, InputMode::Normal);

        app.request_remove();
        app.confirm_remove(true);
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_remove_last_item_clamps_selection() {
        let mut app = app_with_items(&["A", "B"]);
        app.selected = 1;

        app.request_remove();
        assert_eq!(app.selected, 0);

        app.request_remove();
        assert_eq!(app.selected, 0);
        assert!(app.store.is_empty());
    }
}
