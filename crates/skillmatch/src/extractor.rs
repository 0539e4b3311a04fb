//! Skill extraction over raw resume or job text.
//!
//! Three passes, in order: single-token stem matching, multi-word literal
//! substring matching, and boundary-aware alias matching. Matching is
//! deliberately permissive (stem- and substring-based): the output feeds a
//! recommendation heuristic, so recall wins over precision.

use std::collections::HashSet;
use std::sync::Arc;

use crate::stemming::Stem;
use crate::text;
use crate::vocabulary::{SkillSet, SkillVocabulary};

#[derive(Clone)]
pub struct SkillExtractor {
    vocabulary: Arc<SkillVocabulary>,
    stemmer: Arc<dyn Stem>,
}

impl SkillExtractor {
    pub fn new(vocabulary: Arc<SkillVocabulary>, stemmer: Arc<dyn Stem>) -> Self {
        Self {
            vocabulary,
            stemmer,
        }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Deduplicated canonical skills present in `raw_text`, in discovery
    /// order. Empty input yields an empty set.
    pub fn extract(&self, raw_text: &str) -> SkillSet {
        // Alias matching also runs over the plain lowercased text, so
        // spellings mangled by the normalizer's character whitelist are
        // still caught in their original punctuation context.
        let lower_raw = raw_text.to_lowercase();
        let normalized = text::normalize(raw_text);
        if normalized.is_empty() {
            return SkillSet::new();
        }

        let mut extracted: SkillSet = Vec::new();
        let mut found: HashSet<String> = HashSet::new();
        let mut processed_stems: HashSet<String> = HashSet::new();

        // Pass 1: token/stem matching. Tokens of length <= 2 are noise
        // ("a", "to", "is"); a stem is only looked up once per call.
        for token in text::tokenize(&normalized) {
            if token.chars().count() <= 2 {
                continue;
            }
            let token_stem = self.stemmer.stem(token);
            if !processed_stems.insert(token_stem.clone()) {
                continue;
            }
            if let Some(term) = self.vocabulary.match_token(token, &token_stem) {
                if found.insert(term.to_string()) {
                    extracted.push(term.to_string());
                }
            }
        }

        // Pass 2: multi-word terms by literal substring containment. Short
        // entries can over-match inside unrelated text; that is the defined
        // behavior.
        for term in self.vocabulary.multi_word_terms() {
            if normalized.contains(term) && found.insert(term.to_string()) {
                extracted.push(term.to_string());
            }
        }

        // Pass 3: aliases, boundary-aware, against both text forms padded
        // with spaces so ^/$ anchors never interfere.
        let searchable = format!(" {lower_raw} {normalized} ");
        for (canonical, pattern) in self.vocabulary.aliases() {
            if pattern.is_match(&searchable) && found.insert(canonical.to_string()) {
                extracted.push(canonical.to_string());
            }
        }

        extracted
    }
}

impl std::fmt::Debug for SkillExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillExtractor")
            .field("vocabulary", &self.vocabulary)
            .finish()
    }
}
