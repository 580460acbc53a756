use chrono::{Local, NaiveDate};
use clap::Args;
use scholarbot::catalog::{deadline_status, fallback, filter_records, NeedFilter};
use scholarbot::error::AppError;
use scholarbot::letters::{default_templates, prompt};
use scholarbot::matching::rank;
use scholarbot::profile::{AnswerValue, CandidateProfile};
use scholarbot::session::PrepAnswers;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogListArgs {
    /// Free-text filter over name, criteria, and amount
    #[arg(long, default_value = "")]
    pub(crate) query: String,
    /// Need-based filter: all, need, or merit
    #[arg(long, default_value = "all", value_parser = crate::infra::parse_need_filter)]
    pub(crate) need: NeedFilter,
    /// Reference date for deadline labels (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference date for deadline labels (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// How many ranked matches to print
    #[arg(long, default_value_t = 10)]
    pub(crate) top: usize,
    /// Show the system prompt a letter for the best match would use
    #[arg(long)]
    pub(crate) show_prompt: bool,
}

pub(crate) fn run_catalog_list(args: CatalogListArgs) -> Result<(), AppError> {
    let CatalogListArgs { query, need, today } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let records = fallback::builtin_catalog();
    let filtered = filter_records(&records, &query, need);

    println!(
        "Scholarship catalog ({} of {} shown, as of {})",
        filtered.len(),
        records.len(),
        today
    );
    for record in filtered {
        let status = deadline_status(&record.deadline, today);
        println!(
            "- {} | {} | deadline {} ({})",
            record.name, record.amount, record.deadline, status.label
        );
    }
    Ok(())
}

fn sample_profile() -> CandidateProfile {
    let mut profile = CandidateProfile::default();
    for (field, value) in [
        ("name", "Jordan Baker"),
        ("location", "Rochester, NY"),
        ("citizenship", "U.S. Citizen"),
        ("gpa", "3.8"),
        ("grad_year", "2026"),
        ("intended_major", "Computer Science"),
        ("financial_need", "Yes — Pell-eligible"),
        (
            "activities",
            "Captain of the debate team, food bank volunteer, robotics club co-founder",
        ),
    ] {
        profile
            .set_answer(field, AnswerValue::Text(value.to_string()))
            .expect("demo fields are known");
    }
    profile
        .set_answer(
            "ethnicity",
            AnswerValue::Selections(vec!["Hispanic/Latino".to_string()]),
        )
        .expect("demo fields are known");
    profile
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        top,
        show_prompt,
    } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("Scholarship matching demo");
    let profile = sample_profile();
    println!(
        "Candidate: {} | GPA {} | {} | graduating {}",
        profile.name.as_deref().unwrap_or("?"),
        profile.gpa.as_deref().unwrap_or("?"),
        profile.intended_major.as_deref().unwrap_or("?"),
        profile.grad_year.as_deref().unwrap_or("?"),
    );
    println!("Profile completion: {}%", profile.completion_percent());

    let records = fallback::builtin_catalog();
    let results = match rank(&profile, &records) {
        Ok(results) => results,
        Err(err) => {
            println!("Matching refused: {err}");
            return Ok(());
        }
    };

    println!(
        "\nTop matches ({} scored above zero of {} in catalog)",
        results.len(),
        records.len()
    );
    for result in results.iter().take(top) {
        let status = deadline_status(&result.scholarship.deadline, today);
        println!(
            "- [{:>3}] {} | {} | {}",
            result.match_score, result.scholarship.name, result.scholarship.amount, status.label
        );
        for reason in &result.match_reasons {
            println!("      - {reason}");
        }
    }

    if show_prompt {
        if let Some(best) = results.first() {
            let templates = default_templates();
            println!(
                "\nLetter system prompt for \"{}\" ({} style):",
                best.scholarship.name, templates[0].name
            );
            println!(
                "{}",
                prompt::letter_system_prompt(&templates[0], &profile, None, &PrepAnswers::new())
            );
        }
    }

    Ok(())
}
