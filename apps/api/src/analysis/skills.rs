use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::catalog::{is_catalog_skill, SOFT_SKILLS, TECHNICAL_SKILLS};

/// One compiled matcher per catalog phrase. A phrase matches when the chars on either
/// side are not word chars, so "go" does not match inside "google".
static TECHNICAL_MATCHERS: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| compile_matchers(TECHNICAL_SKILLS));

static SOFT_MATCHERS: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| compile_matchers(SOFT_SKILLS));

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

fn compile_matchers(phrases: &[&'static str]) -> Vec<(&'static str, Regex)> {
    phrases
        .iter()
        .map(|&phrase| {
            let pattern = format!(r"(?:^|\W){}(?:\W|$)", regex::escape(phrase));
            (phrase, Regex::new(&pattern).unwrap())
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSkills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

/// Extracts catalog skills from free text. Matching is case-insensitive; results are
/// title-cased, de-duplicated and sorted.
pub fn extract_skills(text: &str) -> ExtractedSkills {
    if text.is_empty() {
        return ExtractedSkills::default();
    }

    let lower = text.to_lowercase();
    let technical = matched(&TECHNICAL_MATCHERS, &lower);
    let soft = matched(&SOFT_MATCHERS, &lower);

    info!(
        "Extracted {} technical skills and {} soft skills",
        technical.len(),
        soft.len()
    );

    ExtractedSkills { technical, soft }
}

fn matched(matchers: &[(&'static str, Regex)], lower: &str) -> Vec<String> {
    matchers
        .iter()
        .filter(|(_, re)| re.is_match(lower))
        .map(|(phrase, _)| title_case(phrase))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Counts single-word catalog skills in `text`.
pub fn keyword_density(text: &str) -> BTreeMap<String, u32> {
    let lower = text.to_lowercase();
    let mut counts = BTreeMap::new();
    for word in WORD.find_iter(&lower).map(|m| m.as_str()) {
        if is_catalog_skill(word) {
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest
/// ("asp.net" → "Asp.Net", "ci/cd" → "Ci/Cd").
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
