//! skillmatch — resume skill-extraction and job-matching engine.
//!
//! The deterministic text-processing core of a job-board platform: it turns
//! resume documents (PDF, HTML, plain text) into plain text, extracts a
//! canonical skill set against a controlled vocabulary (multi-word terms,
//! aliases, stemming), computes an ATS-style 0-100 completeness score with
//! improvement suggestions, and ranks job postings against a candidate's
//! skills by lexical overlap.
//!
//! The surrounding application owns HTTP, auth, persistence, and storage;
//! this crate only consumes raw text/bytes plus a job catalog and returns
//! plain data. Everything is a pure function over its inputs except the
//! [`document::DocumentSource`] fetch boundary.

pub mod ats;
pub mod document;
pub mod engine;
pub mod errors;
pub mod extractor;
pub mod recommend;
pub mod stemming;
pub mod text;
pub mod vocabulary;

// Re-export the public API consumed by the application layer.
pub use ats::{detect_sections, AtsResult, AtsScorer, SectionPresence};
pub use document::{
    extract_text, DocumentFormat, DocumentSource, FetchedDocument, HttpDocumentSource,
};
pub use engine::MatchEngine;
pub use errors::EngineError;
pub use extractor::SkillExtractor;
pub use recommend::{JobPosting, JobRecommender, MatchResult, DEFAULT_TOP_N};
pub use stemming::{EnglishStemmer, Stem};
pub use vocabulary::{SkillSet, SkillVocabulary, VocabularyConfig};
