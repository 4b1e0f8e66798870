//! Lexical capability interface.
//!
//! The core engine only needs three things from a language toolkit:
//! tokenization, a stopword test and a part-of-speech lookup. They are
//! modelled as a trait so callers can plug in a richer dictionary; the
//! bundled [`StaticLexicon`] carries enough vocabulary for recipe text.

/// Syntactic roles a word can play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    /// Satellite adjective, e.g. "extra" in "extra virgin"
    AdjectiveSatellite,
    Adverb,
}

pub trait Lexicon {
    /// Split text into word and punctuation tokens
    fn tokenize(&self, text: &str) -> Vec<String>;
    /// True for stopwords and standalone punctuation tokens
    fn is_stopword(&self, token: &str) -> bool;
    /// Every syntactic role the word can play; empty when unknown
    fn pos_tags(&self, word: &str) -> &[Pos];
}

/// True when the tag set marks a plain adjective
pub fn is_adjective(tags: &[Pos]) -> bool {
    tags.contains(&Pos::Adjective) || tags.contains(&Pos::AdjectiveSatellite)
}

/// True when the word can qualify an ingredient: adjectives, verbs
/// (participles like "chopped") and unknown words all qualify
pub fn is_qualifier(tags: &[Pos]) -> bool {
    tags.is_empty() || is_adjective(tags) || tags.contains(&Pos::Verb)
}

/// Stopword and part-of-speech tables baked into the binary
pub struct StaticLexicon;

const PUNCTUATION: &[&str] = &[",", ".", "!", "?", "(", ")", ";", ":"];

fn is_punctuation(ch: char) -> bool {
    matches!(ch, ',' | '.' | '!' | '?' | '(' | ')' | ';' | ':')
}

const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "her", "hers", "herself", "it", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing",
    "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between",
    "into", "through", "during", "before", "after", "above", "below", "to",
    "from", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "should", "now",
];

/// Part-of-speech table for common culinary vocabulary.
///
/// Mirrors a dictionary lookup: a word maps to every role it can play.
/// Words absent from the table report an empty tag set.
const POS_TABLE: &[(&str, &[Pos])] = &[
    // measures and containers
    ("cup", &[Pos::Noun]),
    ("cups", &[Pos::Noun]),
    ("teaspoon", &[Pos::Noun]),
    ("teaspoons", &[Pos::Noun]),
    ("tablespoon", &[Pos::Noun]),
    ("tablespoons", &[Pos::Noun]),
    ("pound", &[Pos::Noun, Pos::Verb]),
    ("pounds", &[Pos::Noun]),
    ("ounce", &[Pos::Noun]),
    ("ounces", &[Pos::Noun]),
    ("clove", &[Pos::Noun]),
    ("cloves", &[Pos::Noun]),
    ("pinch", &[Pos::Noun, Pos::Verb]),
    ("dash", &[Pos::Noun]),
    ("quart", &[Pos::Noun]),
    ("pint", &[Pos::Noun]),
    ("gallon", &[Pos::Noun]),
    ("gram", &[Pos::Noun]),
    ("grams", &[Pos::Noun]),
    ("can", &[Pos::Noun, Pos::Verb]),
    ("cans", &[Pos::Noun]),
    ("package", &[Pos::Noun]),
    ("packages", &[Pos::Noun]),
    ("bunch", &[Pos::Noun]),
    ("slice", &[Pos::Noun, Pos::Verb]),
    ("slices", &[Pos::Noun]),
    // descriptors
    ("large", &[Pos::Adjective]),
    ("small", &[Pos::Adjective]),
    ("medium", &[Pos::Adjective, Pos::Noun]),
    ("fresh", &[Pos::Adjective]),
    ("dried", &[Pos::Adjective]),
    ("dry", &[Pos::Adjective, Pos::Verb]),
    ("whole", &[Pos::Adjective, Pos::Noun]),
    ("ground", &[Pos::Adjective, Pos::Noun, Pos::Verb]),
    ("yellow", &[Pos::Adjective, Pos::Noun]),
    ("red", &[Pos::Adjective, Pos::Noun]),
    ("green", &[Pos::Adjective, Pos::Noun]),
    ("white", &[Pos::Adjective, Pos::Noun]),
    ("black", &[Pos::Adjective, Pos::Noun]),
    ("brown", &[Pos::Adjective, Pos::Noun, Pos::Verb]),
    ("golden", &[Pos::Adjective]),
    ("sweet", &[Pos::Adjective]),
    ("sour", &[Pos::Adjective, Pos::Noun]),
    ("hot", &[Pos::Adjective]),
    ("cold", &[Pos::Adjective, Pos::Noun]),
    ("warm", &[Pos::Adjective, Pos::Verb]),
    ("ripe", &[Pos::Adjective]),
    ("raw", &[Pos::Adjective]),
    ("lean", &[Pos::Adjective, Pos::Verb]),
    ("fine", &[Pos::Adjective]),
    ("coarse", &[Pos::Adjective]),
    ("extra", &[Pos::AdjectiveSatellite, Pos::Adverb]),
    ("light", &[Pos::Adjective, Pos::Noun]),
    ("dark", &[Pos::Adjective, Pos::Noun]),
    ("low", &[Pos::Adjective, Pos::Adverb]),
    ("thin", &[Pos::Adjective, Pos::Verb]),
    ("thick", &[Pos::Adjective]),
    ("soft", &[Pos::Adjective]),
    ("firm", &[Pos::Adjective, Pos::Noun]),
    ("mild", &[Pos::Adjective]),
    ("spicy", &[Pos::Adjective]),
    ("plain", &[Pos::Adjective, Pos::Noun]),
    ("skinless", &[Pos::Adjective]),
    ("boneless", &[Pos::Adjective]),
    ("frozen", &[Pos::Adjective]),
    ("canned", &[Pos::Adjective]),
    ("smoked", &[Pos::Adjective]),
    ("crisp", &[Pos::Adjective, Pos::Noun]),
    ("iceberg", &[Pos::Noun]),
    ("romaine", &[Pos::Noun]),
    // preparation verbs
    ("chop", &[Pos::Verb, Pos::Noun]),
    ("mince", &[Pos::Verb]),
    ("dice", &[Pos::Verb, Pos::Noun]),
    ("beat", &[Pos::Verb, Pos::Noun]),
    ("melt", &[Pos::Verb]),
    ("crush", &[Pos::Verb, Pos::Noun]),
    ("grate", &[Pos::Verb, Pos::Noun]),
    ("peel", &[Pos::Verb, Pos::Noun]),
    ("drain", &[Pos::Verb, Pos::Noun]),
    ("trim", &[Pos::Verb, Pos::Adjective, Pos::Noun]),
    ("cut", &[Pos::Verb, Pos::Noun]),
    ("cook", &[Pos::Verb, Pos::Noun]),
    // heads that stop the qualifier scan
    ("tomato", &[Pos::Noun]),
    ("tomatoes", &[Pos::Noun]),
    ("garlic", &[Pos::Noun]),
    ("onion", &[Pos::Noun]),
    ("onions", &[Pos::Noun]),
    ("shallot", &[Pos::Noun]),
    ("chicken", &[Pos::Noun]),
    ("beef", &[Pos::Noun]),
    ("pork", &[Pos::Noun]),
    ("turkey", &[Pos::Noun]),
    ("fish", &[Pos::Noun, Pos::Verb]),
    ("butter", &[Pos::Noun, Pos::Verb]),
    ("milk", &[Pos::Noun, Pos::Verb]),
    ("cream", &[Pos::Noun, Pos::Verb]),
    ("cheese", &[Pos::Noun]),
    ("sugar", &[Pos::Noun]),
    ("salt", &[Pos::Noun, Pos::Verb]),
    ("pepper", &[Pos::Noun, Pos::Verb]),
    ("oil", &[Pos::Noun, Pos::Verb]),
    ("flour", &[Pos::Noun, Pos::Verb]),
    ("rice", &[Pos::Noun]),
    ("pasta", &[Pos::Noun]),
    ("noodles", &[Pos::Noun]),
    ("egg", &[Pos::Noun]),
    ("eggs", &[Pos::Noun]),
    ("lemon", &[Pos::Noun]),
    ("lime", &[Pos::Noun]),
    ("water", &[Pos::Noun, Pos::Verb]),
    ("broth", &[Pos::Noun]),
    ("stock", &[Pos::Noun, Pos::Verb]),
    ("sauce", &[Pos::Noun]),
    ("bread", &[Pos::Noun, Pos::Verb]),
    ("corn", &[Pos::Noun]),
    ("bell", &[Pos::Noun]),
    ("basil", &[Pos::Noun]),
    ("cilantro", &[Pos::Noun]),
    ("parsley", &[Pos::Noun]),
];

impl Lexicon for StaticLexicon {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        for ch in text.chars() {
            if ch.is_whitespace() {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            } else if is_punctuation(ch) {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(ch.to_string());
            } else {
                current.push(ch);
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }
        tokens
    }

    fn is_stopword(&self, token: &str) -> bool {
        STOPWORDS.contains(&token) || PUNCTUATION.contains(&token)
    }

    fn pos_tags(&self, word: &str) -> &[Pos] {
        POS_TABLE
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, tags)| *tags)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_punctuation() {
        let lexicon = StaticLexicon;
        let tokens = lexicon.tokenize("Heat the oil, then add onion.");
        assert_eq!(
            tokens,
            vec!["Heat", "the", "oil", ",", "then", "add", "onion", "."]
        );
    }

    #[test]
    fn test_stopwords_include_punctuation() {
        let lexicon = StaticLexicon;
        assert!(lexicon.is_stopword("the"));
        assert!(lexicon.is_stopword(","));
        assert!(!lexicon.is_stopword("onion"));
    }

    #[test]
    fn test_pos_lookup() {
        let lexicon = StaticLexicon;
        assert!(is_adjective(lexicon.pos_tags("yellow")));
        assert!(!is_adjective(lexicon.pos_tags("cups")));
        // unknown words qualify but are not adjectives
        assert!(!is_adjective(lexicon.pos_tags("chopped")));
        assert!(is_qualifier(lexicon.pos_tags("chopped")));
        assert!(!is_qualifier(lexicon.pos_tags("onion")));
    }
}
