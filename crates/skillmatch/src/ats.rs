//! ATS-style resume completeness scoring.
//!
//! A deterministic heuristic over normalized text: section presence (up to
//! 40 points), extracted skill density (up to 30), length bracket (up to
//! 15), and quantified-achievement evidence (15). Recomputed from scratch
//! whenever resume content changes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extractor::SkillExtractor;
use crate::text;
use crate::vocabulary::SkillSet;

/// Heuristic resume quality report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsResult {
    /// Clamped to [0, 100].
    pub score: u32,
    /// At most five suggestions, highest priority first.
    pub improvements: Vec<String>,
    pub skills: SkillSet,
    pub word_count: usize,
}

/// Which of the six standard resume sections the text shows evidence of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionPresence {
    pub contact: bool,
    pub summary: bool,
    pub experience: bool,
    pub education: bool,
    pub projects: bool,
    pub skills: bool,
}

impl SectionPresence {
    pub fn present_count(&self) -> usize {
        [
            self.contact,
            self.summary,
            self.experience,
            self.education,
            self.projects,
            self.skills,
        ]
        .iter()
        .filter(|&&present| present)
        .count()
    }
}

const SECTION_COUNT: usize = 6;
const MAX_IMPROVEMENTS: usize = 5;
const MIN_SKILL_COUNT: usize = 8;

static CONTACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(email|phone|mobile|contact|linkedin)\b").unwrap());
static SUMMARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(summary|objective|profile)\b").unwrap());
static EXPERIENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(experience|employment|work history)\b").unwrap());
static EDUCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(education|university|college|degree)\b").unwrap());
static PROJECTS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(projects|portfolio|case study)\b").unwrap());
static SKILLS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(skills|technical skills|technologies)\b").unwrap());
static QUANTIFIED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+%|\b\d+\+|\$\d+|\b\d+\b").unwrap());

/// Keyword-presence checks for the six standard sections, over normalized
/// text.
pub fn detect_sections(raw_text: &str) -> SectionPresence {
    let normalized = text::normalize(raw_text);
    SectionPresence {
        contact: CONTACT_RE.is_match(&normalized),
        summary: SUMMARY_RE.is_match(&normalized),
        experience: EXPERIENCE_RE.is_match(&normalized),
        education: EDUCATION_RE.is_match(&normalized),
        projects: PROJECTS_RE.is_match(&normalized),
        skills: SKILLS_RE.is_match(&normalized),
    }
}

#[derive(Debug, Clone)]
pub struct AtsScorer {
    extractor: SkillExtractor,
}

impl AtsScorer {
    pub fn new(extractor: SkillExtractor) -> Self {
        Self { extractor }
    }

    /// Scores raw resume text. Total over any input: empty text yields a
    /// zero score with a full improvements list.
    pub fn score(&self, raw_text: &str) -> AtsResult {
        let normalized = text::normalize(raw_text);
        let word_count = text::word_count(&normalized);
        let skills = self.extractor.extract(raw_text);
        let sections = detect_sections(raw_text);

        let mut score: i64 = 0;
        let mut improvements: Vec<String> = Vec::new();

        // Structural completeness: up to 40 points across six sections.
        let present = sections.present_count();
        score += ((present as f64 / SECTION_COUNT as f64) * 40.0).round() as i64;
        if !sections.summary {
            improvements.push("Add a short professional summary.".to_string());
        }
        if !sections.experience {
            improvements.push("Add clear work experience with impact.".to_string());
        }
        if !sections.education {
            improvements.push("Add education details.".to_string());
        }
        if !sections.skills {
            improvements.push("Add a dedicated skills section.".to_string());
        }

        // Skill density: 3 points per extracted skill, capped at 30.
        score += (skills.len() as i64 * 3).min(30);
        if skills.len() < MIN_SKILL_COUNT {
            improvements
                .push("Include more relevant technical and role-specific keywords.".to_string());
        }

        // Length brackets are mutually exclusive.
        match word_count {
            250..=900 => score += 15,
            150..=249 => {
                score += 8;
                improvements.push("Resume is short. Add more measurable achievements.".to_string());
            }
            901.. => {
                score += 8;
                improvements.push("Resume is too long. Keep it concise and focused.".to_string());
            }
            _ => improvements.push("Add more details to your resume content.".to_string()),
        }

        // Quantified achievements: any percentage, "N+", dollar amount, or
        // bare integer.
        if QUANTIFIED_RE.is_match(&normalized) {
            score += 15;
        } else {
            improvements.push("Add quantified achievements (%, numbers, outcomes).".to_string());
        }

        improvements.truncate(MAX_IMPROVEMENTS);

        AtsResult {
            score: score.clamp(0, 100) as u32,
            improvements,
            skills,
            word_count,
        }
    }
}
