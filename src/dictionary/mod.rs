//! Word-validity dictionary
//!
//! Membership checks always resolve synchronously against an in-memory set.
//! The set starts as the embedded fallback list and may be swapped for a
//! richer list by a best-effort background preload.

mod embedded;
pub mod loader;

pub use embedded::{FALLBACK_WORDS, FALLBACK_WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IteratorRandom;
use rustc_hash::FxHashSet;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Condvar, Mutex, PoisonError, RwLock};
use std::thread;
use thiserror::Error;
use tracing::{info, warn};

/// Word length used by the embedded dictionary
pub const WORD_LENGTH: usize = 5;

/// Membership check consulted before a guess is accepted
pub trait DictionaryGate {
    /// Case-insensitive membership test
    fn is_valid_word(&self, word: &str) -> bool;

    /// Length every dictionary word has
    fn word_length(&self) -> usize;
}

/// Errors from loading a replacement word list
///
/// Cloneable so every handle to one load can report the same failure.
#[derive(Debug, Clone, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },
    #[error("word list {} contains no {word_length}-letter words", path.display())]
    EmptyWordList { path: PathBuf, word_length: usize },
    #[error("dictionary preload thread panicked")]
    PreloadPanicked,
}

/// Shared, swappable word set
///
/// Clones share the same backing set, so a preload started from one clone is
/// visible to all of them.
#[derive(Debug, Clone)]
pub struct Dictionary {
    word_length: usize,
    words: Arc<RwLock<Arc<FxHashSet<String>>>>,
    preload: Arc<Mutex<Option<Arc<PreloadState>>>>,
}

impl Dictionary {
    /// Dictionary backed by the embedded word list
    ///
    /// # Examples
    /// ```
    /// use modle::dictionary::{Dictionary, DictionaryGate};
    ///
    /// let dictionary = Dictionary::fallback();
    /// assert!(dictionary.is_valid_word("modal"));
    /// assert!(!dictionary.is_valid_word("qqqqq"));
    /// ```
    #[must_use]
    pub fn fallback() -> Self {
        Self::with_length(WORD_LENGTH, FALLBACK_WORDS.iter().copied())
    }

    /// Dictionary of five-letter words from any source
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_length(WORD_LENGTH, words)
    }

    /// Dictionary for a custom word length; entries of other lengths are dropped
    pub fn with_length<I, S>(word_length: usize, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: FxHashSet<String> = loader::words_from_iter(words, word_length)
            .into_iter()
            .collect();

        Self {
            word_length,
            words: Arc::new(RwLock::new(Arc::new(set))),
            preload: Arc::new(Mutex::new(None)),
        }
    }

    /// Number of words currently active
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Sorted copy of the active word list
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.snapshot().iter().cloned().collect();
        words.sort_unstable();
        words
    }

    /// Pick a secret uniformly from the active word list
    pub fn random_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Word> {
        let words = self.words();
        let choice = words.iter().choose(rng)?;
        Word::new(choice).ok()
    }

    /// Start loading a richer word list in the background
    ///
    /// The active set is replaced only if the file yields at least one word of
    /// the right length; otherwise the current set stays and a warning is
    /// logged. Only the first call starts a load; later calls return a handle
    /// to that same load.
    pub fn preload(&self, path: impl AsRef<Path>) -> PreloadHandle {
        let mut slot = self.preload.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(state) = slot.as_ref() {
            return PreloadHandle {
                state: Arc::clone(state),
                already_started: true,
            };
        }

        let state = Arc::new(PreloadState::default());
        *slot = Some(Arc::clone(&state));
        drop(slot);

        let path = path.as_ref().to_path_buf();
        let dictionary = self.clone();
        let shared = Arc::clone(&state);
        thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| dictionary.load_and_swap(&path)))
                .unwrap_or(Err(DictionaryError::PreloadPanicked));
            match &result {
                Ok(count) => info!(count, path = %path.display(), "Loaded word list"),
                Err(e) => warn!(error = %e, "Word list preload failed, keeping current dictionary"),
            }
            shared.complete(result);
        });

        PreloadHandle {
            state,
            already_started: false,
        }
    }

    fn load_and_swap(&self, path: &Path) -> Result<usize, DictionaryError> {
        let words =
            loader::load_from_file(path, self.word_length).map_err(|source| DictionaryError::Io {
                path: path.to_path_buf(),
                source: Arc::new(source),
            })?;

        if words.is_empty() {
            return Err(DictionaryError::EmptyWordList {
                path: path.to_path_buf(),
                word_length: self.word_length,
            });
        }

        let set: FxHashSet<String> = words.into_iter().collect();
        let count = set.len();
        *self.words.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(set);
        Ok(count)
    }

    fn snapshot(&self) -> Arc<FxHashSet<String>> {
        Arc::clone(&self.words.read().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::fallback()
    }
}

impl DictionaryGate for Dictionary {
    fn is_valid_word(&self, word: &str) -> bool {
        let word = word.trim();
        word.len() == self.word_length && self.snapshot().contains(&word.to_ascii_uppercase())
    }

    fn word_length(&self) -> usize {
        self.word_length
    }
}

/// Completion slot shared by every handle to one preload
#[derive(Debug, Default)]
struct PreloadState {
    result: Mutex<Option<Result<usize, DictionaryError>>>,
    done: Condvar,
}

impl PreloadState {
    fn complete(&self, result: Result<usize, DictionaryError>) {
        *self.result.lock().unwrap_or_else(PoisonError::into_inner) = Some(result);
        self.done.notify_all();
    }
}

/// Handle to a background dictionary preload
#[derive(Debug, Clone)]
pub struct PreloadHandle {
    state: Arc<PreloadState>,
    already_started: bool,
}

impl PreloadHandle {
    /// True when this call joined a load started earlier
    #[must_use]
    pub const fn already_started(&self) -> bool {
        self.already_started
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state
            .result
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Block until the load finishes, returning the number of words it loaded
    ///
    /// Every handle to the same load sees the same result.
    ///
    /// # Errors
    ///
    /// Returns the load error if the file could not be used. The dictionary
    /// keeps its previous word set in that case.
    pub fn wait(self) -> Result<usize, DictionaryError> {
        let guard = self
            .state
            .result
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let guard = self
            .state
            .done
            .wait_while(guard, |result| result.is_none())
            .unwrap_or_else(PoisonError::into_inner);
        guard.clone().unwrap_or(Err(DictionaryError::PreloadPanicked))
    }
}
