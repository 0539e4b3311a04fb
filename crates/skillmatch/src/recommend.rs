//! Job recommendation ranking by lexical skill overlap.

use serde::{Deserialize, Serialize};

use crate::extractor::SkillExtractor;
use crate::vocabulary::SkillSet;

pub const DEFAULT_TOP_N: usize = 10;

/// A job posting as supplied by the catalog store. Read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Pre-declared skills. When empty, skills are derived from the
    /// posting's text at recommendation time.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// Per-job match computed for one recommendation request. Transient, never
/// persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub job: JobPosting,
    /// round(match_count / job skill count * 100); 0 when the job has no
    /// skills.
    pub match_percentage: u32,
    pub match_count: usize,
    /// The candidate's skills (original casing) that matched this job.
    pub matched_skill_names: SkillSet,
}

#[derive(Debug, Clone)]
pub struct JobRecommender {
    extractor: SkillExtractor,
}

impl JobRecommender {
    pub fn new(extractor: SkillExtractor) -> Self {
        Self { extractor }
    }

    /// Scores visible postings against the candidate's skills and returns
    /// at most `top_n` results sorted by descending match percentage. Ties
    /// keep catalog order.
    pub fn recommend(
        &self,
        candidate_skills: &[String],
        jobs: &[JobPosting],
        top_n: usize,
    ) -> Vec<MatchResult> {
        let candidate_lower: Vec<String> = candidate_skills
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        let mut matches: Vec<MatchResult> = jobs
            .iter()
            .filter(|job| job.visible)
            .map(|job| self.score_job(candidate_skills, &candidate_lower, job))
            .collect();

        // Stable sort: equal percentages stay in catalog order.
        matches.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
        matches.truncate(top_n);
        matches
    }

    fn score_job(
        &self,
        candidate_skills: &[String],
        candidate_lower: &[String],
        job: &JobPosting,
    ) -> MatchResult {
        let job_skills: Vec<String> = if job.skills.is_empty() {
            self.extractor
                .extract(&format!("{} {} {}", job.title, job.category, job.description))
        } else {
            job.skills.clone()
        };
        let job_skills_lower: Vec<String> =
            job_skills.iter().map(|s| s.to_lowercase()).collect();

        let match_count = candidate_lower
            .iter()
            .filter(|candidate| skill_overlaps(candidate, &job_skills_lower))
            .count();

        let match_percentage = if job_skills_lower.is_empty() {
            0
        } else {
            ((match_count as f64 / job_skills_lower.len() as f64) * 100.0).round() as u32
        };

        let matched_skill_names: SkillSet = candidate_skills
            .iter()
            .zip(candidate_lower)
            .filter(|(_, lower)| skill_overlaps(lower, &job_skills_lower))
            .map(|(original, _)| original.clone())
            .collect();

        MatchResult {
            job: job.clone(),
            match_percentage,
            match_count,
            matched_skill_names,
        }
    }
}

/// Bidirectional substring containment, case-insensitive. Deliberately
/// loose so "react" matches a job asking for "react native" and plural or
/// compound variants still count.
fn skill_overlaps(candidate_skill: &str, job_skills: &[String]) -> bool {
    job_skills.iter().any(|job_skill| {
        job_skill.contains(candidate_skill) || candidate_skill.contains(job_skill.as_str())
    })
}
