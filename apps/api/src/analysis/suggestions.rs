use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::analysis::catalog::{ACTION_VERBS, MODERN_TECH};
use crate::analysis::skills::extract_skills;

static QUANTIFIED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d|\$\d|increase|improve|reduce|optimize").unwrap());

const MIN_EXPERIENCE_WORDS: usize = 50;
const MIN_PROJECT_WORDS: usize = 30;
const MIN_TECHNICAL_SKILLS: usize = 5;
const MAX_TECHNICAL_SKILLS: usize = 20;
const MIN_SOFT_SKILLS: usize = 2;

pub const QUANTIFY_HINT: &str = "Add quantifiable achievements (e.g., 'Improved performance by 30%', 'Managed team of 5 developers')";
pub const ACTION_VERB_HINT: &str =
    "Use strong action verbs like 'developed', 'implemented', 'optimized', 'led'";
pub const MODERN_TECH_HINT: &str = "Consider highlighting experience with modern technologies like cloud platforms, containerization, or modern frameworks";
pub const EXPAND_EXPERIENCE_HINT: &str = "Expand your job experience section with more detailed descriptions of your responsibilities and achievements";
pub const PROJECT_DETAIL_HINT: &str = "Provide more detailed project descriptions including technologies used and outcomes achieved";
pub const MORE_SKILLS_HINT: &str =
    "Consider adding more technical skills to strengthen your profile";
pub const FOCUS_SKILLS_HINT: &str =
    "Consider focusing on your strongest and most relevant technical skills";
pub const SOFT_SKILLS_HINT: &str = "Include soft skills like leadership, teamwork, or communication to create a well-rounded profile";
pub const COMPREHENSIVE_MESSAGE: &str = "Your resume looks comprehensive! Consider tailoring it for specific job applications by emphasizing relevant skills and experiences.";

/// Heuristic feedback on a submitted resume. Always returns at least one entry.
pub fn optimization_suggestions(
    job_titles: &str,
    projects: &str,
    skills: &str,
    education: &str,
) -> Vec<String> {
    let full_text = format!("{job_titles} {projects} {skills} {education}").to_lowercase();
    let mut suggestions: Vec<&'static str> = Vec::new();

    if !QUANTIFIED.is_match(&full_text) {
        suggestions.push(QUANTIFY_HINT);
    }
    if !ACTION_VERBS.iter().any(|verb| full_text.contains(verb)) {
        suggestions.push(ACTION_VERB_HINT);
    }
    if !MODERN_TECH.iter().any(|tech| full_text.contains(tech)) {
        suggestions.push(MODERN_TECH_HINT);
    }
    if job_titles.split_whitespace().count() < MIN_EXPERIENCE_WORDS {
        suggestions.push(EXPAND_EXPERIENCE_HINT);
    }
    if projects.split_whitespace().count() < MIN_PROJECT_WORDS {
        suggestions.push(PROJECT_DETAIL_HINT);
    }

    let extracted = extract_skills(&full_text);
    let technical = extracted.technical.len();
    if technical < MIN_TECHNICAL_SKILLS {
        suggestions.push(MORE_SKILLS_HINT);
    }
    if technical > MAX_TECHNICAL_SKILLS {
        suggestions.push(FOCUS_SKILLS_HINT);
    }
    if extracted.soft.len() < MIN_SOFT_SKILLS {
        suggestions.push(SOFT_SKILLS_HINT);
    }

    if suggestions.is_empty() {
        suggestions.push(COMPREHENSIVE_MESSAGE);
    }

    info!("Generated {} optimization suggestions", suggestions.len());
    suggestions.into_iter().map(String::from).collect()
}
