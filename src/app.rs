use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

use crate::browser::Browser;
use crate::config::ThemeStore;
use crate::faq::{Accordion, FAQS};
use crate::resolver;
use crate::theme::{self, ThemeMode};

/// Project page opened from the header/footer link
pub const PROJECT_URL: &str = "https://github.com";

/// Sample link shown under the input field
pub const SAMPLE_LINK: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// How long a status message stays in the info line
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Faq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Alert,
    Help,
}

pub struct App {
    pub focus: Focus,
    pub popup: Popup,

    pub input: String,
    pub faq: Accordion,
    pub theme: ThemeMode,

    // Shown in the alert popup
    pub alert_message: String,

    // Status message (auto-clears after timeout)
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,

    store: Box<dyn ThemeStore>,
    browser: Box<dyn Browser>,
}

impl App {
    /// Build the app, resolving and applying the startup theme
    pub fn new(
        mut store: Box<dyn ThemeStore>,
        browser: Box<dyn Browser>,
        ambient_dark: impl FnOnce() -> bool,
    ) -> Self {
        let stored = store.load_theme();
        let theme = ThemeMode::initial(stored.as_deref(), ambient_dark);
        theme::apply(theme, store.as_mut());

        Self {
            focus: Focus::Input,
            popup: Popup::None,
            input: String::new(),
            faq: Accordion::new(FAQS.len()),
            theme,
            alert_message: String::new(),
            status_message: None,
            status_message_time: None,
            store,
            browser,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_message_time = Some(Instant::now());
    }

    fn show_alert(&mut self, msg: impl Into<String>) {
        self.alert_message = msg.into();
        self.popup = Popup::Alert;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        theme::apply(self.theme, self.store.as_mut());
    }

    /// Resolve the input and open the thumbnail; a bad link raises the alert
    pub fn get_thumbnail(&mut self) {
        let thumb = match resolver::resolve(&self.input) {
            Ok(thumb) => thumb,
            Err(e) => {
                tracing::debug!("Rejected input {:?}: {:?}", self.input, e);
                self.show_alert(e.to_string());
                return;
            }
        };

        match self.browser.open(&thumb.url) {
            Ok(()) => {
                tracing::info!("Opened thumbnail for {}", thumb.video_id);
                self.set_status(format!("Opened thumbnail for {}", thumb.video_id));
            }
            Err(e) => {
                tracing::warn!("Failed to open {}: {}", thumb.url, e);
                self.set_status(format!("Failed to open browser: {} (URL: {})", e, thumb.url));
            }
        }
    }

    pub fn open_project_link(&mut self) {
        match self.browser.open(PROJECT_URL) {
            Ok(()) => self.set_status("Opened project page in your browser."),
            Err(e) => self.set_status(format!("Failed to open project page: {}", e)),
        }
    }

    /// Insert pasted text into the input field
    pub fn paste(&mut self, text: &str) {
        if self.popup != Popup::None {
            return;
        }
        self.focus = Focus::Input;
        // Single-line field
        self.input.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Popups take every key until dismissed
        if self.popup != Popup::None {
            return self.handle_popup_key(key);
        }

        // Ctrl+Alt is AltGr on some layouts and produces plain characters
        let shortcut = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);
        if shortcut {
            match key.code {
                KeyCode::Char('t') => self.toggle_theme(),
                KeyCode::Char('u') if self.focus == Focus::Input => self.input.clear(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Input => Focus::Faq,
                    Focus::Faq => Focus::Input,
                };
                return Ok(());
            }
            KeyCode::F(1) => {
                self.popup = Popup::Help;
                return Ok(());
            }
            _ => {}
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Faq => self.handle_faq_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => self.get_thumbnail(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => self.input.clear(),
            KeyCode::Down => self.focus = Focus::Faq,
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
        Ok(())
    }

    fn handle_faq_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.faq.move_down(),
            KeyCode::Char('k') | KeyCode::Up => {
                if self.faq.selected == 0 {
                    self.focus = Focus::Input;
                } else {
                    self.faq.move_up();
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.faq.toggle_selected(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('g') => self.open_project_link(),
            KeyCode::Char('?') | KeyCode::Char('h') => self.popup = Popup::Help,
            _ => {}
        }
        Ok(())
    }

    fn handle_popup_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.popup {
            Popup::Alert => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.popup = Popup::None;
                }
            }
            Popup::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc
                        | KeyCode::Char('?')
                        | KeyCode::Char('h')
                        | KeyCode::Enter
                        | KeyCode::Char('q')
                        | KeyCode::F(1)
                ) {
                    self.popup = Popup::None;
                }
            }
            Popup::None => {}
        }
        Ok(())
    }

    /// Whether `q` should quit (not while typing or in a popup)
    pub fn can_quit_on_q(&self) -> bool {
        self.popup == Popup::None && self.focus == Focus::Faq
    }

    /// Periodic housekeeping: expire the status message
    pub fn tick(&mut self) {
        if let Some(t) = self.status_message_time {
            if t.elapsed() >= STATUS_TIMEOUT {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, MemoryStore};
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    // Shares recorded state with the test after the App takes ownership
    #[derive(Clone, Default)]
    struct SharedBrowser(Rc<RefCell<Vec<String>>>);

    impl Browser for SharedBrowser {
        fn open(&mut self, url: &str) -> io::Result<()> {
            self.0.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct FailingBrowser;

    impl Browser for FailingBrowser {
        fn open(&mut self, _url: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no browser"))
        }
    }

    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl ThemeStore for SharedStore {
        fn load_theme(&self) -> Option<String> {
            self.0.borrow().load_theme()
        }

        fn save_theme(&mut self, token: &str) -> std::result::Result<(), ConfigError> {
            self.0.borrow_mut().save_theme(token)
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(store: SharedStore, browser: SharedBrowser, ambient_dark: bool) -> App {
        App::new(Box::new(store), Box::new(browser), move || ambient_dark)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_valid_link_opens_thumbnail() {
        let browser = SharedBrowser::default();
        let mut app = app_with(SharedStore::default(), browser.clone(), false);

        type_str(&mut app, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert_eq!(
            *browser.0.borrow(),
            vec!["https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg".to_string()]
        );
        assert_eq!(app.popup, Popup::None);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_invalid_link_raises_alert_without_opening() {
        let browser = SharedBrowser::default();
        let mut app = app_with(SharedStore::default(), browser.clone(), false);

        type_str(&mut app, "not a url");
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert_eq!(app.popup, Popup::Alert);
        assert_eq!(app.alert_message, resolver::INVALID_LINK_PROMPT);
        assert!(browser.0.borrow().is_empty());

        // Alert swallows typing until dismissed
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.input, "not a url");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.popup, Popup::None);
    }

    #[test]
    fn test_empty_input_raises_alert() {
        let mut app = app_with(SharedStore::default(), SharedBrowser::default(), false);
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.popup, Popup::Alert);
    }

    #[test]
    fn test_startup_theme_from_ambient_then_toggle() {
        let store = SharedStore::default();
        let mut app = app_with(store.clone(), SharedBrowser::default(), true);
        assert_eq!(app.theme, ThemeMode::Dark);
        assert_eq!(store.0.borrow().theme.as_deref(), Some("dark"));

        app.handle_key(ctrl('t')).unwrap();
        assert_eq!(app.theme, ThemeMode::Light);
        assert_eq!(store.0.borrow().theme.as_deref(), Some("light"));
    }

    #[test]
    fn test_startup_theme_prefers_stored() {
        let store = SharedStore::default();
        store.0.borrow_mut().theme = Some("light".to_string());
        let app = app_with(store, SharedBrowser::default(), true);
        assert_eq!(app.theme, ThemeMode::Light);
    }

    #[test]
    fn test_typing_t_in_input_does_not_toggle() {
        let mut app = app_with(SharedStore::default(), SharedBrowser::default(), false);
        app.handle_key(key(KeyCode::Char('t'))).unwrap();
        assert_eq!(app.theme, ThemeMode::Light);
        assert_eq!(app.input, "t");
    }

    #[test]
    fn test_faq_navigation_and_toggle() {
        let mut app = app_with(SharedStore::default(), SharedBrowser::default(), false);
        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.focus, Focus::Faq);

        app.handle_key(key(KeyCode::Char('j'))).unwrap();
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(app.faq.is_open(1));

        app.handle_key(key(KeyCode::Char('k'))).unwrap();
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert!(app.faq.is_open(0));
        assert!(!app.faq.is_open(1));

        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(app.faq.open_index(), None);
        assert!(app.can_quit_on_q());
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut app = app_with(SharedStore::default(), SharedBrowser::default(), false);
        app.focus = Focus::Faq;
        app.paste("https://youtu.be/abc\n");
        assert_eq!(app.input, "https://youtu.be/abc");
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_altgr_characters_reach_input() {
        let mut app = app_with(SharedStore::default(), SharedBrowser::default(), false);
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        for c in ['@', '\\', '{', '[', 't'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), altgr)).unwrap();
        }
        assert_eq!(app.input, "@\\{[t");
        // Ctrl+Alt+T is a character, not the theme shortcut
        assert_eq!(app.theme, ThemeMode::Light);
    }

    #[test]
    fn test_ctrl_u_clears_input() {
        let mut app = app_with(SharedStore::default(), SharedBrowser::default(), false);
        type_str(&mut app, "abc");
        app.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.input, "ab");
        app.handle_key(ctrl('u')).unwrap();
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_browser_failure_is_reported() {
        let mut app = App::new(
            Box::new(MemoryStore::default()),
            Box::new(FailingBrowser),
            || false,
        );
        app.input = "https://youtu.be/abc".to_string();
        app.get_thumbnail();
        assert_eq!(app.popup, Popup::None);
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .starts_with("Failed to open browser"));
    }
}
