//! `MatchEngine` wires the vocabulary, stemmer, extractor, scorer, and
//! recommender together once at startup. Everything behind the facade is
//! read-only after construction, so one engine instance serves concurrent
//! requests without coordination.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::ats::{AtsResult, AtsScorer};
use crate::document::{self, DocumentFormat, DocumentSource};
use crate::extractor::SkillExtractor;
use crate::recommend::{JobPosting, JobRecommender, MatchResult};
use crate::stemming::{EnglishStemmer, Stem};
use crate::vocabulary::{SkillSet, SkillVocabulary};

#[derive(Debug, Clone)]
pub struct MatchEngine {
    extractor: SkillExtractor,
    scorer: AtsScorer,
    recommender: JobRecommender,
}

impl MatchEngine {
    /// Engine over the built-in vocabulary and the English stemmer.
    pub fn new() -> Self {
        let stemmer: Arc<dyn Stem> = Arc::new(EnglishStemmer::new());
        let vocabulary = Arc::new(SkillVocabulary::builtin(stemmer.as_ref()));
        Self::from_parts(vocabulary, stemmer)
    }

    /// Engine over a custom vocabulary. The vocabulary must have been built
    /// with the English stemmer so term stems and token stems agree; pair
    /// `from_parts` with your own `Stem` implementation otherwise.
    pub fn with_vocabulary(vocabulary: SkillVocabulary) -> Self {
        let stemmer: Arc<dyn Stem> = Arc::new(EnglishStemmer::new());
        Self::from_parts(Arc::new(vocabulary), stemmer)
    }

    pub fn from_parts(vocabulary: Arc<SkillVocabulary>, stemmer: Arc<dyn Stem>) -> Self {
        let extractor = SkillExtractor::new(vocabulary, stemmer);
        let scorer = AtsScorer::new(extractor.clone());
        let recommender = JobRecommender::new(extractor.clone());
        Self {
            extractor,
            scorer,
            recommender,
        }
    }

    /// Canonical skills present in the resume text.
    pub fn extract_skills(&self, resume_text: &str) -> SkillSet {
        self.extractor.extract(resume_text)
    }

    /// Plain text from a document payload; malformed documents degrade to
    /// empty text.
    pub fn extract_text(&self, payload: &[u8], format: DocumentFormat) -> String {
        document::extract_text(payload, format)
    }

    /// ATS completeness score and improvement suggestions for resume text.
    pub fn compute_ats(&self, resume_text: &str) -> AtsResult {
        self.scorer.score(resume_text)
    }

    /// Ranked top-`top_n` matches between the candidate's skills and the
    /// job catalog.
    pub fn recommend_jobs(
        &self,
        candidate_skills: &[String],
        jobs: &[JobPosting],
        top_n: usize,
    ) -> Vec<MatchResult> {
        self.recommender.recommend(candidate_skills, jobs, top_n)
    }

    /// Fetches a resume by location and extracts its plain text. Fetch and
    /// parse failures both degrade to empty text: a resume with no
    /// extractable content still yields a valid low score and an empty
    /// skill set downstream.
    pub async fn extract_text_from_location(
        &self,
        source: &dyn DocumentSource,
        location: &str,
    ) -> String {
        match source.fetch(location).await {
            Ok(fetched) => {
                let format = fetched.format();
                debug!(?format, "resume document fetched");
                fetched.extract_text()
            }
            Err(err) => {
                warn!("resume fetch failed, treating as empty document: {err}");
                String::new()
            }
        }
    }

    /// Fetch-then-extract chain: resume location in, canonical skills out.
    pub async fn extract_skills_from_location(
        &self,
        source: &dyn DocumentSource,
        location: &str,
    ) -> SkillSet {
        let resume_text = self.extract_text_from_location(source, location).await;
        self.extract_skills(&resume_text)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FetchedDocument;
    use crate::errors::EngineError;
    use async_trait::async_trait;
    use bytes::Bytes;

    struct StaticSource {
        payload: &'static [u8],
        content_type: Option<&'static str>,
    }

    #[async_trait]
    impl DocumentSource for StaticSource {
        async fn fetch(&self, location: &str) -> Result<FetchedDocument, EngineError> {
            Ok(FetchedDocument {
                payload: Bytes::from_static(self.payload),
                content_type: self.content_type.map(str::to_string),
                file_name: Some(location.split('?').next().unwrap_or(location).to_string()),
            })
        }
    }

    struct FailingSource;

    #[async_trait]
    impl DocumentSource for FailingSource {
        async fn fetch(&self, location: &str) -> Result<FetchedDocument, EngineError> {
            Err(EngineError::Fetch(format!("{location} unreachable")))
        }
    }

    #[test]
    fn test_end_to_end_text_pipeline() {
        let engine = MatchEngine::new();
        let resume = "Summary: full-stack engineer. Experience with Node.js, \
                      ReactJS and PostgreSQL. Skills: docker, aws. Education: \
                      university degree. Shipped 12 services.";

        let skills = engine.extract_skills(resume);
        assert!(skills.contains(&"node".to_string()));
        assert!(skills.contains(&"react".to_string()));
        assert!(skills.contains(&"sql".to_string()));

        let ats = engine.compute_ats(resume);
        assert!(ats.score > 0);
        assert_eq!(ats.skills, skills);

        let jobs = vec![JobPosting {
            id: "j1".to_string(),
            title: "Backend Engineer".to_string(),
            category: "engineering".to_string(),
            description: String::new(),
            skills: vec!["node".to_string(), "sql".to_string()],
            visible: true,
        }];
        let results = engine.recommend_jobs(&skills, &jobs, 10);
        assert_eq!(results[0].match_percentage, 100);
    }

    #[tokio::test]
    async fn test_extract_skills_from_html_location() {
        let engine = MatchEngine::new();
        let source = StaticSource {
            payload: b"<html><body><p>Senior engineer: Python, Docker, machine learning</p></body></html>",
            content_type: Some("text/html; charset=utf-8"),
        };
        let skills = engine
            .extract_skills_from_location(&source, "https://cdn.example.com/resumes/u7.html")
            .await;
        assert!(skills.contains(&"python".to_string()));
        assert!(skills.contains(&"docker".to_string()));
        assert!(skills.contains(&"machine learning".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_empty() {
        let engine = MatchEngine::new();
        let text = engine
            .extract_text_from_location(&FailingSource, "https://gone.example.com/cv.pdf")
            .await;
        assert_eq!(text, "");

        let skills = engine
            .extract_skills_from_location(&FailingSource, "https://gone.example.com/cv.pdf")
            .await;
        assert!(skills.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_pdf_location_degrades_to_empty() {
        let engine = MatchEngine::new();
        let source = StaticSource {
            payload: b"corrupt bytes pretending to be a pdf",
            content_type: Some("application/pdf"),
        };
        let text = engine
            .extract_text_from_location(&source, "https://cdn.example.com/resumes/u9.pdf")
            .await;
        assert_eq!(text, "");
    }
}
