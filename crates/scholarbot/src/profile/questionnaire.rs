use serde::Serialize;

/// Widget shape for a questionnaire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Select,
    MultiSelect,
    Textarea,
}

/// Static metadata for one questionnaire field.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProfileQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub input: InputKind,
    pub options: &'static [&'static str],
    pub placeholder: &'static str,
    pub step: u8,
}

/// One page of the guided profile builder.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProfileStep {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const STEPS: &[ProfileStep] = &[
    ProfileStep {
        title: "Basic Info",
        desc: "Name, contact, and location",
    },
    ProfileStep {
        title: "Background",
        desc: "Academics, identity, and school",
    },
    ProfileStep {
        title: "Strengths",
        desc: "Major, activities, and achievements",
    },
    ProfileStep {
        title: "Your Story",
        desc: "Personal narrative and voice",
    },
];

pub const QUESTIONS: &[ProfileQuestion] = &[
    ProfileQuestion {
        id: "name",
        prompt: "What is your full name?",
        input: InputKind::Text,
        options: &[],
        placeholder: "First Last",
        step: 0,
    },
    ProfileQuestion {
        id: "email",
        prompt: "Email address?",
        input: InputKind::Text,
        options: &[],
        placeholder: "you@email.com",
        step: 0,
    },
    ProfileQuestion {
        id: "phone",
        prompt: "Phone number?",
        input: InputKind::Text,
        options: &[],
        placeholder: "(555) 123-4567",
        step: 0,
    },
    ProfileQuestion {
        id: "location",
        prompt: "Where are you located? (City, State)",
        input: InputKind::Text,
        options: &[],
        placeholder: "Rochester, NY",
        step: 0,
    },
    ProfileQuestion {
        id: "citizenship",
        prompt: "Citizenship / Residency status?",
        input: InputKind::Select,
        options: &[
            "U.S. Citizen",
            "Dual Citizen (U.S./Canada)",
            "Permanent Resident",
            "DACA/TPS",
            "International Student",
            "Other",
        ],
        placeholder: "",
        step: 1,
    },
    ProfileQuestion {
        id: "ethnicity",
        prompt: "How do you identify? (helps match heritage-specific scholarships)",
        input: InputKind::MultiSelect,
        options: &[
            "African American/Black",
            "Hispanic/Latino",
            "Asian/Pacific Islander",
            "Native American/Indigenous",
            "White/Caucasian",
            "Multiracial",
            "Prefer not to say",
        ],
        placeholder: "",
        step: 1,
    },
    ProfileQuestion {
        id: "gpa",
        prompt: "Current GPA (unweighted)?",
        input: InputKind::Text,
        options: &[],
        placeholder: "3.7",
        step: 1,
    },
    ProfileQuestion {
        id: "satact",
        prompt: "SAT or ACT score (if taken)?",
        input: InputKind::Text,
        options: &[],
        placeholder: "1350 SAT or 30 ACT",
        step: 1,
    },
    ProfileQuestion {
        id: "school",
        prompt: "Current or most recent high school?",
        input: InputKind::Text,
        options: &[],
        placeholder: "Lincoln High School",
        step: 1,
    },
    ProfileQuestion {
        id: "grad_year",
        prompt: "Graduation year?",
        input: InputKind::Select,
        options: &["2025", "2026", "2027", "2028"],
        placeholder: "",
        step: 1,
    },
    ProfileQuestion {
        id: "intended_major",
        prompt: "Intended college major or field of study?",
        input: InputKind::Text,
        options: &[],
        placeholder: "Computer Science, Biology, etc.",
        step: 2,
    },
    ProfileQuestion {
        id: "financial_need",
        prompt: "Do you demonstrate financial need?",
        input: InputKind::Select,
        options: &[
            "Yes — Pell-eligible",
            "Yes — moderate need",
            "No significant need",
            "Unsure",
        ],
        placeholder: "",
        step: 2,
    },
    ProfileQuestion {
        id: "activities",
        prompt: "List your top 3-5 extracurricular activities / leadership roles:",
        input: InputKind::Textarea,
        options: &[],
        placeholder: "e.g., Captain of Debate Team, Volunteer at Food Bank, NSBE chapter co-founder...",
        step: 2,
    },
    ProfileQuestion {
        id: "awards",
        prompt: "Notable awards or honors?",
        input: InputKind::Textarea,
        options: &[],
        placeholder: "e.g., AP Scholar, Regional Science Fair Winner, Honor Roll...",
        step: 2,
    },
    ProfileQuestion {
        id: "community_service",
        prompt: "Describe your most impactful community service experience:",
        input: InputKind::Textarea,
        options: &[],
        placeholder: "What did you do? How many hours? What was the impact?",
        step: 3,
    },
    ProfileQuestion {
        id: "personal_story",
        prompt: "What is your personal story? What challenges have you overcome?",
        input: InputKind::Textarea,
        options: &[],
        placeholder: "This is the heart of your application. Be authentic — what makes you, YOU?",
        step: 3,
    },
    ProfileQuestion {
        id: "career_goal",
        prompt: "What is your career goal and how does college fit into it?",
        input: InputKind::Textarea,
        options: &[],
        placeholder: "Where do you see yourself in 10 years? Why does this education matter?",
        step: 3,
    },
    ProfileQuestion {
        id: "writing_style",
        prompt: "How would you describe your writing voice?",
        input: InputKind::Select,
        options: &[
            "Warm and narrative — I tell stories",
            "Direct and evidence-based — I show data",
            "Enthusiastic and energetic — I radiate passion",
            "Reflective and thoughtful — I go deep",
            "Professional and polished — I sound mature",
        ],
        placeholder: "",
        step: 3,
    },
];
