use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::rc::Rc;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/words.txt");

/// Dictionary entries shorter than this are dropped at load time.
pub const MIN_WORD_LEN: usize = 3;

/// The reference word set. Immutable for the lifetime of a search; each path
/// takes a cheap snapshot (`Rc` clone) as its working copy and only ever
/// narrows it.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: Rc<HashSet<String>>,
}

fn accept(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LEN && !word.chars().any(char::is_whitespace)
}

impl Lexicon {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| accept(word))
            .collect();
        Self {
            words: Rc::new(words),
        }
    }

    pub fn load_from_str(data: &str) -> Self {
        Self::from_words(data.lines())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut words = HashSet::new();
        for line in reader.lines() {
            let word = line?.trim().to_lowercase();
            if accept(&word) {
                words.insert(word);
            }
        }
        Ok(Self {
            words: Rc::new(words),
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// A shared handle to the full word set, used to seed a path's working
    /// lexicon.
    pub fn snapshot(&self) -> Rc<HashSet<String>> {
        Rc::clone(&self.words)
    }
}
