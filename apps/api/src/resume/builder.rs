use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::analysis::skills::{extract_skills, keyword_density};
use crate::analysis::suggestions::optimization_suggestions;
use crate::errors::AppError;
use crate::form::validator::validate_form;
use crate::resume::models::{ResumeData, ResumeFields};

/// Validates the submitted fields and assembles the analysed resume.
pub fn build_resume(fields: ResumeFields) -> Result<ResumeData, AppError> {
    let validation = validate_form(fields.pairs());
    if !validation.valid {
        return Err(AppError::FormInvalid(validation.violations()));
    }

    let skill_source = format!("{} {} {}", fields.job_titles, fields.projects, fields.skills);
    let extracted_skills = extract_skills(&skill_source);
    let keyword_density = keyword_density(&skill_source);
    let suggestions = optimization_suggestions(
        &fields.job_titles,
        &fields.projects,
        &fields.skills,
        &fields.education,
    );

    let id = Uuid::new_v4();
    info!(
        "Resume {id} generated: {} technical skills, {} suggestions",
        extracted_skills.technical.len(),
        suggestions.len()
    );

    Ok(ResumeData {
        id,
        generated_at: Utc::now(),
        job_titles: fields.job_titles,
        projects: fields.projects,
        skills: fields.skills,
        education: fields.education,
        extracted_skills,
        keyword_density,
        suggestions,
    })
}
