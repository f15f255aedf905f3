// src/classify/lexicon.rs
//! Rule-based review sentiment model.
//!
//! Word scores for restaurant/service reviews, with negation (flips the next
//! sentiment word within a short window) and intensifiers (scale it). Emits
//! the same raw vocabulary as an SST-2 style model: POSITIVE / NEGATIVE, or
//! NEUTRAL when the text carries no sentiment words at all.

use std::collections::HashMap;

use super::{ ModelError, RawPrediction, SentimentModel };
use crate::config::consts::DEFAULT_MAX_INPUT_CHARS;

/// Tokens after a negation that it still applies to.
const NEGATION_WINDOW: usize = 3;

pub struct LexiconModel {
    words: HashMap<&'static str, f64>,
    negations: Vec<&'static str>,
    intensifiers: HashMap<&'static str, f64>,
    max_input_chars: usize,
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconModel {
    pub fn new() -> Self {
        let positive = [
            ("good", 0.5), ("great", 0.8), ("excellent", 0.9), ("amazing", 0.9),
            ("awesome", 0.8), ("fantastic", 0.9), ("wonderful", 0.8), ("perfect", 0.9),
            ("best", 0.8), ("love", 0.8), ("loved", 0.8), ("loves", 0.7),
            ("delicious", 0.9), ("tasty", 0.7), ("yummy", 0.7), ("flavorful", 0.7),
            ("fresh", 0.5), ("crispy", 0.5), ("hot", 0.2), ("friendly", 0.6),
            ("nice", 0.5), ("helpful", 0.5), ("fast", 0.4), ("quick", 0.4),
            ("clean", 0.4), ("recommend", 0.7), ("recommended", 0.7), ("favorite", 0.8),
            ("enjoyed", 0.7), ("enjoy", 0.6), ("impressed", 0.7), ("generous", 0.5),
            ("reasonable", 0.4), ("worth", 0.5), ("happy", 0.6), ("pleasant", 0.5),
            ("solid", 0.4), ("outstanding", 0.9), ("incredible", 0.9), ("gem", 0.7),
        ];
        let negative = [
            ("bad", -0.6), ("terrible", -0.9), ("awful", -0.9), ("horrible", -0.9),
            ("worst", -0.9), ("disgusting", -0.9), ("gross", -0.8), ("poor", -0.6),
            ("mediocre", -0.5), ("bland", -0.6), ("soggy", -0.6), ("cold", -0.4),
            ("stale", -0.6), ("burnt", -0.6), ("greasy", -0.5), ("salty", -0.4),
            ("overpriced", -0.6), ("expensive", -0.4), ("pricey", -0.3), ("slow", -0.5),
            ("rude", -0.8), ("dirty", -0.7), ("wrong", -0.5), ("late", -0.4),
            ("disappointing", -0.7), ("disappointed", -0.7), ("disappointment", -0.7),
            ("waited", -0.3), ("waste", -0.7), ("never", -0.2), ("sick", -0.8),
            ("unprofessional", -0.7), ("ignored", -0.6), ("small", -0.2), ("hate", -0.8),
            ("hated", -0.8), ("meh", -0.4), ("lacking", -0.5), ("inedible", -0.9), ("avoid", -0.7),
        ];

        let mut words = HashMap::new();
        for (w, score) in positive.into_iter().chain(negative) {
            words.insert(w, score);
        }

        let negations = vec![
            "not", "no", "never", "nothing", "none", "neither", "nor",
            "cannot", "cant", "dont", "doesnt", "didnt", "isnt", "wasnt",
            "werent", "arent", "wont", "wouldnt", "couldnt", "shouldnt",
            "hardly", "barely",
        ];

        let intensifiers = HashMap::from([
            ("very", 1.5), ("really", 1.4), ("so", 1.3), ("extremely", 2.0),
            ("super", 1.5), ("absolutely", 1.8), ("incredibly", 1.8), ("truly", 1.4),
            ("pretty", 0.8), ("somewhat", 0.6), ("slightly", 0.5), ("kinda", 0.6),
        ]);

        Self { words, negations, intensifiers, max_input_chars: DEFAULT_MAX_INPUT_CHARS }
    }

    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = max.max(1);
        self
    }

    /// Net score and total sentiment mass of `text`.
    pub fn score(&self, text: &str) -> (f64, f64) {
        let tokens = tokenize(text);
        let mut net = 0.0;
        let mut mass = 0.0;
        let mut negate_left = 0usize;
        let mut boost = 1.0;

        for tok in &tokens {
            let t = tok.as_str();
            if self.is_negation(t) {
                negate_left = NEGATION_WINDOW;
                continue;
            }
            if let Some(&mult) = self.intensifiers.get(t) {
                boost *= mult;
                continue;
            }
            if let Some(&w) = self.words.get(t) {
                let mut s = w * boost;
                if negate_left > 0 {
                    s = -s * 0.8;
                    negate_left = 0;
                }
                net += s;
                mass += s.abs();
            } else {
                negate_left = negate_left.saturating_sub(1);
            }
            boost = 1.0;
        }

        (net, mass)
    }

    fn is_negation(&self, tok: &str) -> bool {
        self.negations.iter().any(|n| *n == tok)
    }
}

impl SentimentModel for LexiconModel {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    fn predict(&self, text: &str) -> Result<RawPrediction, ModelError> {
        if text.trim().is_empty() {
            return Err(ModelError::EmptyInput);
        }
        let len = text.chars().count();
        if len > self.max_input_chars {
            return Err(ModelError::InputTooLong { len, max: self.max_input_chars });
        }

        let (net, mass) = self.score(text);
        if mass == 0.0 || net == 0.0 {
            return Ok(RawPrediction::new("NEUTRAL", 0.5));
        }

        // Agreement of the evidence, damped when there is little of it.
        let agreement = net.abs() / mass;
        let weight = mass / (mass + 1.0);
        let confidence = (0.5 + 0.5 * agreement * weight).clamp(0.5, 1.0);
        let label = if net > 0.0 { "POSITIVE" } else { "NEGATIVE" };
        Ok(RawPrediction::new(label, confidence))
    }
}

/// Lowercase word tokens; apostrophes are dropped so "didn't" → "didnt".
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .map(|w| {
            w.chars()
                .filter(|c| *c != '\'' && *c != '’')
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect()
}
