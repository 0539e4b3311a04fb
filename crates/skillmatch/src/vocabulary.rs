//! Static skill vocabulary: canonical terms plus an alias table mapping
//! variant spellings to canonical names. Loaded once at startup, read-only
//! afterwards; stems and alias patterns are precomputed at load so lookups
//! stay cheap on the extraction hot path.

use std::collections::{BTreeMap, HashSet};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::EngineError;
use crate::stemming::Stem;

/// Deduplicated list of canonical skill terms. Insertion/discovery order is
/// kept for display; it carries no other meaning.
pub type SkillSet = Vec<String>;

const BUILTIN_SKILLS: &[&str] = &[
    "javascript",
    "react",
    "node",
    "express",
    "mongodb",
    "sql",
    "python",
    "java",
    "c++",
    "c#",
    "php",
    "ruby",
    "swift",
    "kotlin",
    "flutter",
    "react native",
    "angular",
    "vue",
    "typescript",
    "html",
    "css",
    "sass",
    "less",
    "bootstrap",
    "tailwind",
    "jquery",
    "ajax",
    "json",
    "xml",
    "rest",
    "graphql",
    "api",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "jenkins",
    "git",
    "github",
    "gitlab",
    "bitbucket",
    "jira",
    "confluence",
    "agile",
    "scrum",
    "kanban",
    "devops",
    "ci/cd",
    "testing",
    "jest",
    "mocha",
    "chai",
    "selenium",
    "cypress",
    "postman",
    "swagger",
    "redis",
    "elasticsearch",
    "kafka",
    "rabbitmq",
    "nginx",
    "apache",
    "linux",
    "unix",
    "windows",
    "macos",
    "android",
    "ios",
    "mobile",
    "responsive",
    "pwa",
    "spa",
    "ssr",
    "nextjs",
    "gatsby",
    "webpack",
    "babel",
    "eslint",
    "prettier",
    "npm",
    "yarn",
    "figma",
    "sketch",
    "adobe xd",
    "photoshop",
    "illustrator",
    "ui",
    "ux",
    "design",
    "wireframe",
    "prototype",
    "accessibility",
    "seo",
    "analytics",
    "marketing",
    "content",
    "social media",
    "email",
    "crm",
    "erp",
    "saas",
    "paas",
    "iaas",
    "cloud",
    "serverless",
    "microservices",
    "architecture",
    "security",
    "authentication",
    "authorization",
    "oauth",
    "jwt",
    "encryption",
    "hashing",
    "blockchain",
    "cryptocurrency",
    "machine learning",
    "ai",
    "data science",
    "big data",
    "hadoop",
    "spark",
    "tableau",
    "power bi",
    "excel",
    "word",
    "powerpoint",
    "outlook",
    "office",
    "google docs",
    "sheets",
    "slides",
    "drive",
    "project management",
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "critical thinking",
    "creativity",
    "time management",
    "organization",
    "multitasking",
    "prioritization",
    "negotiation",
    "presentation",
    "public speaking",
    "writing",
    "editing",
    "proofreading",
    "research",
    "analysis",
    "reporting",
    "budgeting",
    "forecasting",
    "planning",
    "strategy",
    "sales",
    "customer service",
    "support",
    "training",
    "mentoring",
    "coaching",
    "consulting",
    "advising",
    "recruiting",
    "hiring",
    "onboarding",
    "performance",
    "evaluation",
    "feedback",
    "development",
    "growth",
    "learning",
    "education",
    "certification",
    "degree",
    "diploma",
    "license",
    "accreditation",
    "qualification",
];

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("node.js", "node"),
    ("nodejs", "node"),
    ("react.js", "react"),
    ("reactjs", "react"),
    ("next.js", "nextjs"),
    ("next", "nextjs"),
    ("vue.js", "vue"),
    ("vuejs", "vue"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("tailwindcss", "tailwind"),
    ("express.js", "express"),
    ("postgres", "sql"),
    ("postgresql", "sql"),
    ("mysql", "sql"),
];

/// Vocabulary tables in their configuration form, deserializable from JSON:
/// `{ "skills": [...], "aliases": { "nodejs": "node", ... } }`.
/// The alias map is a sorted map so load order, and therefore extraction
/// insertion order, is deterministic across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    pub skills: Vec<String>,
    pub aliases: BTreeMap<String, String>,
}

struct SkillEntry {
    term: String,
    multi_word: bool,
    /// Stem of the term with internal whitespace removed.
    joined_stem: String,
    /// Stem of the term as-is.
    whole_stem: String,
}

struct AliasEntry {
    canonical: String,
    /// Case-insensitive, boundary-aware: the alias must not sit directly
    /// next to an alphanumeric, `+`, or `#`, so `js` never fires inside a
    /// longer identifier.
    pattern: Regex,
}

/// The controlled vocabulary the extractor matches against. Immutable after
/// construction.
pub struct SkillVocabulary {
    entries: Vec<SkillEntry>,
    aliases: Vec<AliasEntry>,
}

impl SkillVocabulary {
    /// The built-in catalog: the platform's canonical tech/soft-skill terms
    /// and alias table.
    pub fn builtin(stemmer: &dyn Stem) -> Self {
        Self::build(
            BUILTIN_SKILLS.iter().map(|s| s.to_string()),
            BUILTIN_ALIASES
                .iter()
                .map(|(a, c)| (a.to_string(), c.to_string())),
            stemmer,
        )
    }

    pub fn from_config(config: &VocabularyConfig, stemmer: &dyn Stem) -> Self {
        Self::build(
            config.skills.iter().cloned(),
            config.aliases.iter().map(|(a, c)| (a.clone(), c.clone())),
            stemmer,
        )
    }

    pub fn from_json(json: &str, stemmer: &dyn Stem) -> Result<Self, EngineError> {
        let config: VocabularyConfig = serde_json::from_str(json)
            .map_err(|e| EngineError::Vocabulary(format!("invalid vocabulary config: {e}")))?;
        Ok(Self::from_config(&config, stemmer))
    }

    fn build(
        skills: impl Iterator<Item = String>,
        aliases: impl Iterator<Item = (String, String)>,
        stemmer: &dyn Stem,
    ) -> Self {
        let mut entries: Vec<SkillEntry> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for skill in skills {
            let term = skill.trim().to_lowercase();
            if term.is_empty() || !seen.insert(term.clone()) {
                continue;
            }
            let joined: String = term.split_whitespace().collect();
            entries.push(SkillEntry {
                multi_word: term.contains(' '),
                joined_stem: stemmer.stem(&joined),
                whole_stem: stemmer.stem(&term),
                term,
            });
        }

        let mut alias_entries: Vec<AliasEntry> = Vec::new();
        for (alias, canonical) in aliases {
            let alias = alias.trim().to_lowercase();
            let canonical = canonical.trim().to_lowercase();
            if alias.is_empty() || canonical.is_empty() {
                continue;
            }
            if !seen.contains(&canonical) {
                // Tolerated: the canonical target still names a real skill,
                // it just is not in the fixed term list.
                debug!("alias '{alias}' targets '{canonical}', which is not in the vocabulary");
            }
            // The alias is regex-escaped, so the pattern always compiles.
            let pattern = Regex::new(&format!(
                "(?i)(^|[^a-z0-9+#]){}($|[^a-z0-9+#])",
                regex::escape(&alias)
            ))
            .expect("escaped alias pattern compiles");
            alias_entries.push(AliasEntry { canonical, pattern });
        }

        Self {
            entries,
            aliases: alias_entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.iter().any(|e| e.term == term)
    }

    /// Canonical terms in catalog order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.term.as_str())
    }

    /// Canonical targets of the alias table (not deduplicated).
    pub fn alias_targets(&self) -> impl Iterator<Item = &str> {
        self.aliases.iter().map(|a| a.canonical.as_str())
    }

    /// First catalog term matching the token: literal equality, or stem
    /// equality against the term with internal whitespace removed, or stem
    /// equality against the term as-is.
    pub(crate) fn match_token(&self, token: &str, token_stem: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.term == token || e.joined_stem == token_stem || e.whole_stem == token_stem)
            .map(|e| e.term.as_str())
    }

    pub(crate) fn multi_word_terms(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.multi_word)
            .map(|e| e.term.as_str())
    }

    /// `(canonical, boundary pattern)` pairs in table order.
    pub(crate) fn aliases(&self) -> impl Iterator<Item = (&str, &Regex)> {
        self.aliases
            .iter()
            .map(|a| (a.canonical.as_str(), &a.pattern))
    }
}

impl std::fmt::Debug for SkillVocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillVocabulary")
            .field("terms", &self.entries.len())
            .field("aliases", &self.aliases.len())
            .finish()
    }
}
