//! Word lists for the words variant.

use crate::ConfigError;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Three-letter words used when no dictionary file is configured.
const BUILTIN: &[&str] = &[
    "ACE", "ACT", "ADD", "AGE", "AGO", "AID", "AIM", "AIR", "ALL", "AND", "ANT", "ANY", "APE", "ARC", "ARE", "ARK",
    "ARM", "ART", "ASH", "ASK", "ATE", "AWE", "AXE", "BAD", "BAG", "BAN", "BAR", "BAT", "BAY", "BED", "BEE", "BET",
    "BID", "BIG", "BIN", "BIT", "BOA", "BOG", "BOW", "BOX", "BOY", "BUD", "BUG", "BUN", "BUS", "BUT", "BUY", "CAB",
    "CAN", "CAP", "CAR", "CAT", "COD", "COG", "COT", "COW", "CRY", "CUB", "CUP", "CUT", "DAD", "DAM", "DAY", "DEN",
    "DEW", "DID", "DIE", "DIG", "DIM", "DOE", "DOG", "DOT", "DRY", "DUE", "DUG", "EAR", "EAT", "EEL", "EGG", "ELF",
    "ELK", "ELM", "END", "ERA", "EVE", "EYE", "FAN", "FAR", "FAT", "FED", "FEW", "FIG", "FIN", "FIT", "FIX", "FLY",
    "FOG", "FOR", "FOX", "FUN", "FUR", "GAP", "GAS", "GEM", "GET", "GOT", "GUM", "GUN", "GUT", "GUY", "HAD", "HAM",
    "HAS", "HAT", "HAY", "HEN", "HER", "HID", "HIM", "HIP", "HIS", "HIT", "HOG", "HOP", "HOT", "HOW", "HUB", "HUE",
    "HUG", "HUT", "ICE", "ILL", "INK", "INN", "ION", "IVY", "JAM", "JAR", "JAW", "JET", "JOB", "JOG", "JOY", "KEG",
    "KEY", "KID", "KIT", "LAB", "LAD", "LAP", "LAW", "LAY", "LED", "LEG", "LET", "LID", "LIE", "LIP", "LOG", "LOT",
    "LOW", "MAD", "MAN", "MAP", "MAT", "MAY", "MEN", "MET", "MIX", "MOB", "MOM", "MOP", "MUD", "MUG", "NAP", "NET",
    "NEW", "NOD", "NOR", "NOT", "NOW", "NUT", "OAK", "OAR", "OAT", "ODD", "OFF", "OIL", "OLD", "ONE", "ORB", "ORE",
    "OUR", "OUT", "OWL", "OWN", "PAD", "PAN", "PAT", "PAW", "PAY", "PEA", "PEN", "PET", "PIE", "PIG", "PIN", "PIT",
    "POD", "POT", "PUP", "PUT", "RAG", "RAM", "RAN", "RAT", "RAW", "RAY", "RED", "RIB", "RID", "RIM", "RIP", "ROB",
    "ROD", "ROW", "RUB", "RUG", "RUN", "SAD", "SAT", "SAW", "SAY", "SEA", "SEE", "SET", "SEW", "SHE", "SKY", "SLY",
    "SON", "SOW", "SPY", "SUM", "SUN", "TAB", "TAG", "TAN", "TAP", "TAR", "TEA", "TEN", "THE", "TIE", "TIN", "TIP",
    "TOE", "TON", "TOO", "TOP", "TOY", "TUB", "TUG", "TWO", "USE", "VAN", "VAT", "VET", "WAR", "WAS", "WAX", "WAY",
    "WEB", "WET", "WHO", "WHY", "WIG", "WIN", "WIT", "WON", "WOO", "YAK", "YAM", "YES", "YET", "YOU", "ZAP", "ZIP",
    "ZOO",
];

/// Set of playable words, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<String>,
    prefixes: HashSet<String>,
}

impl Lexicon {
    /// Built-in list of three-letter words.
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN.iter().copied())
    }

    /// Builds a lexicon, trimming and uppercasing every entry.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();
        let prefixes = words
            .iter()
            .flat_map(|w| (1..w.len()).map(move |n| w[..n].to_string()))
            .collect();
        Self { words, prefixes }
    }

    /// Reads a newline-separated word list.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading dictionary");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read dictionary: {}", e)))?;
        let lexicon = Self::from_words(content.lines());
        if lexicon.is_empty() {
            return Err(ConfigError::new("Dictionary contains no words".to_string()));
        }
        info!(words = lexicon.len(), "Dictionary loaded");
        Ok(lexicon)
    }

    /// Reads `path` when given, the built-in list otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// True when `word` is in the lexicon. Case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }

    /// True when some word starts with `prefix` and is longer than it.
    pub fn extends(&self, prefix: &str) -> bool {
        self.prefixes.contains(&prefix.to_ascii_uppercase())
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no word is loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_lookup() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.contains("cat"));
        assert!(lexicon.contains("ZOO"));
        assert!(!lexicon.contains("XQZ"));
        assert!(lexicon.extends("CA"));
        assert!(!lexicon.extends("CAT"));
    }

    #[test]
    fn test_from_file_normalizes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dog\n  Sun \n\nx-y").unwrap();
        let lexicon = Lexicon::from_file(file.path()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("DOG"));
        assert!(lexicon.contains("sun"));
    }

    #[test]
    fn test_missing_and_empty_files() {
        assert!(Lexicon::from_file("/definitely/not/here.txt").is_err());
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(Lexicon::from_file(file.path()).is_err());
    }
}
