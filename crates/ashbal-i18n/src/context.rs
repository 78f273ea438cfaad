//! Language/direction context
//!
//! A [`LanguageProvider`] owns the active [`LanguageSnapshot`]. Reads are
//! lock-free through `arc-swap`; changes are pushed to subscribers through a
//! `tokio::sync::watch` channel after the document attributes are written.

use crate::catalog::Catalog;
use crate::locale::detect_from_environment;
use crate::schema::LocaleBundle;
use arc_swap::ArcSwap;
use ashbal_common::{Direction, Language};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

/// The value handed to every consumer of the context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSnapshot {
    pub language: Language,
    pub direction: Direction,
    pub bundle: Arc<LocaleBundle>,
}

impl LanguageSnapshot {
    fn resolve(catalog: &Catalog, language: Language) -> Self {
        Self {
            language,
            direction: Direction::of(language),
            bundle: catalog.bundle(language),
        }
    }
}

/// Sink for the document-level `dir` and `lang` attributes
pub trait DocumentAttributes: Send {
    /// Write the text direction attribute
    fn set_dir(&mut self, direction: Direction);

    /// Write the language attribute
    fn set_lang(&mut self, language: Language);
}

#[derive(Debug, Default)]
struct DocumentState {
    dir: Direction,
    lang: Language,
}

/// In-memory document root.
///
/// Clones share the same attributes, so one handle can be given to the
/// provider while another is kept for reading.
#[derive(Debug, Clone, Default)]
pub struct DocumentRoot {
    state: Arc<RwLock<DocumentState>>,
}

impl DocumentRoot {
    /// A root with `dir="ltr"` and `lang="en"`
    pub fn new() -> Self {
        Self::default()
    }

    /// Current `dir` attribute
    pub fn dir(&self) -> Direction {
        self.state.read().dir
    }

    /// Current `lang` attribute
    pub fn lang(&self) -> Language {
        self.state.read().lang
    }
}

impl DocumentAttributes for DocumentRoot {
    fn set_dir(&mut self, direction: Direction) {
        self.state.write().dir = direction;
    }

    fn set_lang(&mut self, language: Language) {
        self.state.write().lang = language;
    }
}

/// Single writer of the active language
pub struct LanguageProvider {
    catalog: Arc<Catalog>,
    current: ArcSwap<LanguageSnapshot>,
    document: Mutex<Box<dyn DocumentAttributes>>,
    notifier: watch::Sender<Arc<LanguageSnapshot>>,
}

impl fmt::Debug for LanguageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageProvider")
            .field("language", &self.language())
            .field("subscribers", &self.notifier.receiver_count())
            .finish_non_exhaustive()
    }
}

impl LanguageProvider {
    /// Create a provider for `initial` and write its attributes to `document`
    pub fn new<D>(catalog: Arc<Catalog>, initial: Language, document: D) -> Self
    where
        D: DocumentAttributes + 'static,
    {
        let mut document: Box<dyn DocumentAttributes> = Box::new(document);
        document.set_dir(Direction::of(initial));
        document.set_lang(initial);

        let snapshot = Arc::new(LanguageSnapshot::resolve(&catalog, initial));
        let (notifier, _) = watch::channel(Arc::clone(&snapshot));
        info!(language = %initial, direction = %snapshot.direction, "Language context initialized");

        Self {
            catalog,
            current: ArcSwap::new(snapshot),
            document: Mutex::new(document),
            notifier,
        }
    }

    /// Create a provider for the language reported by the environment
    pub fn from_environment<D>(catalog: Arc<Catalog>, document: D) -> Self
    where
        D: DocumentAttributes + 'static,
    {
        Self::new(catalog, detect_from_environment(), document)
    }

    /// The current snapshot
    pub fn snapshot(&self) -> Arc<LanguageSnapshot> {
        self.current.load_full()
    }

    /// The current language
    pub fn language(&self) -> Language {
        self.current.load().language
    }

    /// The current direction
    pub fn direction(&self) -> Direction {
        self.current.load().direction
    }

    /// The catalog snapshots are drawn from
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Receive every snapshot published after this call
    pub fn subscribe(&self) -> watch::Receiver<Arc<LanguageSnapshot>> {
        self.notifier.subscribe()
    }

    /// Switch the active language.
    ///
    /// The document `dir` and `lang` attributes are written before the new
    /// snapshot is published, so a subscriber woken by the change always
    /// finds the document in agreement with it.
    pub fn set_language(&self, language: Language) {
        let mut document = self.document.lock();

        let previous = self.current.load().language;
        if previous == language {
            debug!(language = %language, "Language unchanged");
            return;
        }

        let snapshot = Arc::new(LanguageSnapshot::resolve(&self.catalog, language));
        document.set_dir(snapshot.direction);
        document.set_lang(language);
        self.current.store(Arc::clone(&snapshot));
        self.notifier.send_replace(snapshot);

        info!(from = %previous, to = %language, direction = %Direction::of(language), "Language changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::MissingKeyPolicy;

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::embedded(MissingKeyPolicy::Fail).unwrap())
    }

    /// Records every attribute write in order
    #[derive(Clone, Default)]
    struct Recorder {
        writes: Arc<Mutex<Vec<String>>>,
    }

    impl DocumentAttributes for Recorder {
        fn set_dir(&mut self, direction: Direction) {
            self.writes.lock().push(format!("dir={direction}"));
        }

        fn set_lang(&mut self, language: Language) {
            self.writes.lock().push(format!("lang={language}"));
        }
    }

    #[test]
    fn test_initial_attributes_are_written() {
        let root = DocumentRoot::new();
        let provider = LanguageProvider::new(catalog(), Language::Ar, root.clone());
        assert_eq!(root.dir(), Direction::Rtl);
        assert_eq!(root.lang(), Language::Ar);
        assert_eq!(provider.snapshot().bundle.language, "اللغة");
    }

    #[test]
    fn test_set_language_round_trip() {
        let root = DocumentRoot::new();
        let provider = LanguageProvider::new(catalog(), Language::En, root.clone());

        provider.set_language(Language::Ar);
        assert_eq!(root.dir(), Direction::Rtl);
        assert_eq!(root.lang(), Language::Ar);
        assert_eq!(provider.direction(), Direction::Rtl);

        provider.set_language(Language::En);
        assert_eq!(root.dir(), Direction::Ltr);
        assert_eq!(provider.language(), Language::En);
    }

    #[test]
    fn test_dir_written_before_lang() {
        let recorder = Recorder::default();
        let provider = LanguageProvider::new(catalog(), Language::En, recorder.clone());
        provider.set_language(Language::Fr);

        let writes = recorder.writes.lock().clone();
        assert_eq!(writes, ["dir=ltr", "lang=en", "dir=ltr", "lang=fr"]);
    }

    #[test]
    fn test_same_language_is_a_no_op() {
        let recorder = Recorder::default();
        let provider = LanguageProvider::new(catalog(), Language::Fr, recorder.clone());
        let before = provider.snapshot();
        let mut rx = provider.subscribe();

        provider.set_language(Language::Fr);
        assert!(Arc::ptr_eq(&before, &provider.snapshot()));
        assert!(!rx.has_changed().unwrap());
        assert_eq!(recorder.writes.lock().len(), 2);
    }

    #[test]
    fn test_subscriber_sees_new_snapshot() {
        let provider = LanguageProvider::new(catalog(), Language::En, DocumentRoot::new());
        let mut rx = provider.subscribe();

        provider.set_language(Language::Ar);
        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.language, Language::Ar);
        assert_eq!(snapshot.direction, Direction::Rtl);
        assert!(Arc::ptr_eq(&snapshot.bundle, &provider.catalog().bundle(Language::Ar)));
    }
}
