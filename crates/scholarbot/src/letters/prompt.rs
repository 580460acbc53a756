//! Prompt assembly for the text-generation collaborator. The blocks here
//! are the contract with the prompt-tuned templates; wording changes
//! change output quality, so edits should be deliberate.

use crate::catalog::ScholarshipRecord;
use crate::profile::{CandidateProfile, QUESTIONS};
use crate::session::PrepAnswers;

use super::generator::ScholarshipSelection;
use super::template::LetterTemplate;

/// Essay prompts collected on the application-prep page; answers feed the
/// generation context alongside the profile.
pub const APPLICATION_QUESTIONS: &[&str] = &[
    "Tell us about yourself and your educational goals. (150-300 words)",
    "Describe a challenge you've overcome and what you learned from it. (150-300 words)",
    "How will this scholarship help you achieve your goals? (100-200 words)",
    "Describe your most significant community contribution. (150-250 words)",
    "Why should you be selected for this scholarship? (100-200 words)",
];

const DESCRIPTION_LIMIT: usize = 8_000;

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

/// The candidate block shared by the letter and profile-document prompts.
pub fn profile_summary(
    profile: &CandidateProfile,
    brag_sheet: Option<&str>,
    prep_answers: &PrepAnswers,
) -> String {
    let answers_json =
        serde_json::to_string(prep_answers).unwrap_or_else(|_| "{}".to_string());
    format!(
        "CANDIDATE: {name}\nLOCATION: {location}\nCITIZENSHIP: {citizenship}\n\
         HERITAGE: {heritage}\nGPA: {gpa} | TEST SCORES: {satact}\n\
         INTENDED MAJOR: {major}\nGRADUATION: {grad_year}\nFINANCIAL NEED: {need}\n\
         ACTIVITIES: {activities}\nAWARDS: {awards}\nCOMMUNITY SERVICE: {service}\n\
         PERSONAL STORY: {story}\nCAREER GOAL: {goal}\nWRITING VOICE: {voice}\n\
         BRAG SHEET: {brag}\nAPP ANSWERS: {answers}",
        name = or_na(profile.name.as_deref()),
        location = or_na(profile.location.as_deref()),
        citizenship = or_na(profile.citizenship.as_deref()),
        heritage = profile.ethnicity.join(", "),
        gpa = or_na(profile.gpa.as_deref()),
        satact = or_na(profile.satact.as_deref()),
        major = or_na(profile.intended_major.as_deref()),
        grad_year = or_na(profile.grad_year.as_deref()),
        need = or_na(profile.financial_need.as_deref()),
        activities = or_na(profile.activities.as_deref()),
        awards = or_na(profile.awards.as_deref()),
        service = or_na(profile.community_service.as_deref()),
        story = or_na(profile.personal_story.as_deref()),
        goal = or_na(profile.career_goal.as_deref()),
        voice = profile.writing_style.as_deref().unwrap_or("Warm and narrative"),
        brag = brag_sheet.filter(|text| !text.is_empty()).unwrap_or("None"),
        answers = answers_json,
    )
}

/// Display label plus the details block for the selected scholarship.
pub fn scholarship_details(selection: &ScholarshipSelection) -> (String, String) {
    match selection {
        ScholarshipSelection::Catalog(record) => {
            let ScholarshipRecord {
                name,
                criteria,
                amount,
                link,
                ..
            } = record;
            (
                name.clone(),
                format!(
                    "SCHOLARSHIP DETAILS (from database):\n- Name: {name}\n- Criteria: {criteria}\n- Amount: {amount}\n- Link: {link}"
                ),
            )
        }
        ScholarshipSelection::Custom { name, url, text } => {
            let label = name
                .as_deref()
                .filter(|n| !n.is_empty())
                .unwrap_or("Custom Scholarship")
                .to_string();
            let url_line = url
                .as_deref()
                .filter(|u| !u.is_empty())
                .map(|u| format!("- URL: {u}\n"))
                .unwrap_or_default();
            let details = format!(
                "SCHOLARSHIP DETAILS (provided by user):\n- Name: {}\n{url_line}- Full Description:\n{}",
                name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Not specified"),
                truncate_chars(text, DESCRIPTION_LIMIT),
            );
            (label, details)
        }
    }
}

/// System prompt for letter generation: the selected template's rules plus
/// the house constraints against generic AI prose.
pub fn letter_system_prompt(
    template: &LetterTemplate,
    profile: &CandidateProfile,
    brag_sheet: Option<&str>,
    prep_answers: &PrepAnswers,
) -> String {
    let grad_year = profile.grad_year.as_deref().unwrap_or("2026");
    format!(
        "You are a scholarship application letter writer. Write in the candidate's authentic voice — NOT like an AI.\n\n\
         STYLE TEMPLATE: \"{name}\"\nRULES: {rules}\n\n\
         CRITICAL ANTI-DETECTION RULES:\n\
         1. NEVER use: \"delve,\" \"cutting-edge,\" \"landscape,\" \"foster,\" \"tapestry,\" \"game-changer,\" \"testament,\" \"unwavering,\" \"thrilled,\" \"elevate,\" \"synergy\"\n\
         2. Vary sentence length. Mix short punchy sentences with longer ones.\n\
         3. Use specific details — names, dates, numbers, places.\n\
         4. Sound like a real {grad_year} high school student.\n\
         5. NO em-dashes. Use periods or commas.\n\
         6. Don't start paragraphs with \"Additionally,\" \"Furthermore,\" or \"Moreover.\"\n\
         7. Open with something MEMORABLE.\n\n\
         CANDIDATE PROFILE:\n{summary}",
        name = template.name,
        rules = template.rules,
        summary = profile_summary(profile, brag_sheet, prep_answers),
    )
}

/// User turn asking for the letter itself.
pub fn letter_request(label: &str, details: &str) -> String {
    format!(
        "Write a scholarship application letter for \"{label}\".\n\n{details}\n\n\
         Write a compelling, authentic letter (350-500 words). Make it feel HUMAN, not AI-generated."
    )
}

/// Prompt for the reusable markdown candidate-profile document.
pub fn profile_document_request(
    profile: &CandidateProfile,
    brag_sheet: Option<&str>,
    prep_answers: &PrepAnswers,
) -> String {
    let answered: Vec<String> = QUESTIONS
        .iter()
        .map(|question| {
            let answer = match question.id {
                "ethnicity" => {
                    if profile.ethnicity.is_empty() {
                        "N/A".to_string()
                    } else {
                        profile.ethnicity.join(", ")
                    }
                }
                "name" => or_na(profile.name.as_deref()).to_string(),
                "email" => or_na(profile.email.as_deref()).to_string(),
                "phone" => or_na(profile.phone.as_deref()).to_string(),
                "location" => or_na(profile.location.as_deref()).to_string(),
                "citizenship" => or_na(profile.citizenship.as_deref()).to_string(),
                "gpa" => or_na(profile.gpa.as_deref()).to_string(),
                "satact" => or_na(profile.satact.as_deref()).to_string(),
                "school" => or_na(profile.school.as_deref()).to_string(),
                "grad_year" => or_na(profile.grad_year.as_deref()).to_string(),
                "intended_major" => or_na(profile.intended_major.as_deref()).to_string(),
                "financial_need" => or_na(profile.financial_need.as_deref()).to_string(),
                "activities" => or_na(profile.activities.as_deref()).to_string(),
                "awards" => or_na(profile.awards.as_deref()).to_string(),
                "community_service" => or_na(profile.community_service.as_deref()).to_string(),
                "personal_story" => or_na(profile.personal_story.as_deref()).to_string(),
                "career_goal" => or_na(profile.career_goal.as_deref()).to_string(),
                "writing_style" => or_na(profile.writing_style.as_deref()).to_string(),
                _ => "N/A".to_string(),
            };
            format!("{}: {}", question.prompt, answer)
        })
        .collect();

    let mut request = format!(
        "Create a candidate profile in Markdown format for scholarship applications:\n\n\
         # Candidate Profile: [Name]\n\n\
         **Contact Info:**\n* Email / Phone / Location\n\n\
         **Voice:** [Describe their writing voice]\n\n\
         **Humanization & Anti-Detection Rules (CRITICAL):**\n[4 specific rules]\n\n\
         **Key Directives:**\n[5 directives based on strongest assets]\n\n\
         BASE THIS ON:\n{}",
        answered.join("\n"),
    );
    if let Some(brag) = brag_sheet.filter(|text| !text.is_empty()) {
        request.push_str("\nBRAG SHEET:\n");
        request.push_str(brag);
    }
    if !prep_answers.is_empty() {
        request.push_str("\nAPPLICATION ANSWERS:\n");
        request.push_str(
            &serde_json::to_string(prep_answers).unwrap_or_else(|_| "{}".to_string()),
        );
    }
    request
}

/// Prompt asking the collaborator to research a scholarship page.
pub fn research_request(url: &str) -> String {
    format!(
        "Search for this scholarship page and extract the key details: {url}\n\n\
         Return a structured summary with: Scholarship Name, Organization, Eligibility/Criteria, \
         Award Amount, Deadline, and Application Requirements."
    )
}
