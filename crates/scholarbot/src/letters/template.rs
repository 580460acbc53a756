use serde::{Deserialize, Serialize};

/// A writing-style template: the persona the generated letter should take
/// and the concrete drafting rules fed to the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rules: String,
    pub icon: String,
}

fn template(id: &str, name: &str, description: &str, rules: &str, icon: &str) -> LetterTemplate {
    LetterTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        rules: rules.to_string(),
        icon: icon.to_string(),
    }
}

/// The built-in style set. Students can pick per letter; the first entry
/// is the default.
pub fn default_templates() -> Vec<LetterTemplate> {
    vec![
        template(
            "narrative",
            "The Storyteller",
            "Opens with a personal anecdote, weaves narrative throughout. Best for scholarships that value personal journey.",
            "1. Open with a specific moment or memory. 2. Use I-statements. 3. Connect personal story to scholarship mission. 4. Close with forward-looking vision. 5. NO AI-isms: avoid 'delve','foster','landscape','cutting-edge'.",
            "✍",
        ),
        template(
            "evidence",
            "The Scientist",
            "Lead with evidence and accomplishments. Data-driven. Best for STEM and merit-based scholarships.",
            "1. Open with a concrete achievement or metric. 2. Use specific numbers and outcomes. 3. Frame experiences as evidence of capability. 4. Connect technical skills to broader impact. 5. NO fluff: replace 'I am passionate about' with 'My work in X demonstrated...'",
            "🔬",
        ),
        template(
            "mission",
            "The Mission Matcher",
            "Deeply aligns candidate values with the scholarship’s stated mission. Best for foundation and organization scholarships.",
            "1. Reference the scholarship's mission statement directly. 2. Mirror their language naturally. 3. Show how your goals amplify their mission. 4. Provide specific examples of aligned work. 5. Keep tone collaborative, not sycophantic.",
            "🎯",
        ),
        template(
            "underdog",
            "The Overcomer",
            "Emphasizes resilience, challenges overcome, and growth. Best for need-based and adversity scholarships.",
            "1. Be honest about challenges without being pitiful. 2. Show agency — what YOU did about it. 3. Frame hardship as fuel, not excuse. 4. Demonstrate growth trajectory. 5. End with strength and vision, not gratitude alone.",
            "💪",
        ),
    ]
}
