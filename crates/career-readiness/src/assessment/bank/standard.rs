use super::Section;
use crate::assessment::domain::{Question, QuestionCategory, QuestionKind};

pub(super) fn standard_sections() -> Vec<Section> {
    vec![
        Section::new(QuestionCategory::Psychometric, psychometric_questions()),
        Section::new(QuestionCategory::Technical, technical_questions()),
        Section::new(QuestionCategory::Aptitude, aptitude_questions()),
        Section::new(QuestionCategory::Wiscar, wiscar_questions()),
    ]
}

fn likert(
    id: &str,
    text: &str,
    category: QuestionCategory,
    subcategory: &str,
    construct: &str,
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        kind: QuestionKind::Likert,
        category,
        subcategory: Some(subcategory.to_string()),
        construct: Some(construct.to_string()),
        options: Vec::new(),
        answer_key: None,
    }
}

/// Graded multiple-choice question with its answer key.
fn choice(
    id: &str,
    text: &str,
    category: QuestionCategory,
    subcategory: &str,
    options: &[&str],
    answer_key: &str,
) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        kind: QuestionKind::MultipleChoice,
        category,
        subcategory: Some(subcategory.to_string()),
        construct: None,
        options: options.iter().map(|option| option.to_string()).collect(),
        answer_key: Some(answer_key.to_string()),
    }
}

fn psychometric_questions() -> Vec<Question> {
    use QuestionCategory::Psychometric;

    vec![
        likert(
            "psych_1",
            "I enjoy helping others fix technical issues.",
            Psychometric,
            "interest",
            "helping_orientation",
        ),
        likert(
            "psych_2",
            "I like being the go-to person when technology fails.",
            Psychometric,
            "interest",
            "tech_leadership",
        ),
        likert(
            "psych_3",
            "I remain calm under pressure when dealing with frustrated people.",
            Psychometric,
            "personality",
            "emotional_stability",
        ),
        likert(
            "psych_4",
            "I prefer following documented troubleshooting steps over inventing new methods.",
            Psychometric,
            "cognitive_style",
            "structured_approach",
        ),
        likert(
            "psych_5",
            "Helping others with tech gives me a sense of purpose.",
            Psychometric,
            "motivation",
            "intrinsic_motivation",
        ),
        likert(
            "psych_6",
            "I'm interested in long-term growth in tech support roles.",
            Psychometric,
            "motivation",
            "career_commitment",
        ),
        likert(
            "psych_7",
            "I enjoy explaining complex technical concepts in simple terms.",
            Psychometric,
            "communication",
            "technical_communication",
        ),
    ]
}

fn technical_questions() -> Vec<Question> {
    use QuestionCategory::Technical;

    vec![
        choice(
            "tech_1",
            "What does DNS stand for?",
            Technical,
            "networking",
            &[
                "Domain Name System",
                "Dynamic Network Service",
                "Direct Network Server",
                "Digital Name Storage",
            ],
            "Domain Name System",
        ),
        choice(
            "tech_2",
            "Which command is used to test network connectivity?",
            Technical,
            "networking",
            &["ping", "connect", "test", "network"],
            "ping",
        ),
        choice(
            "tech_3",
            "What does a 502 Bad Gateway error indicate?",
            Technical,
            "troubleshooting",
            &[
                "The server received an invalid response from upstream server",
                "The client made a bad request",
                "The server is overloaded",
                "The DNS lookup failed",
            ],
            "The server received an invalid response from upstream server",
        ),
        choice(
            "tech_4",
            "Which file system is commonly used in Windows?",
            Technical,
            "operating_systems",
            &["NTFS", "EXT4", "HFS+", "ZFS"],
            "NTFS",
        ),
        choice(
            "tech_5",
            "What port does HTTP typically use?",
            Technical,
            "networking",
            &["80", "443", "21", "22"],
            "80",
        ),
        choice(
            "tech_6",
            "What is the purpose of a help desk ticketing system?",
            Technical,
            "tools",
            &[
                "Track and manage support requests",
                "Monitor network performance",
                "Store user passwords",
                "Create user accounts",
            ],
            "Track and manage support requests",
        ),
    ]
}

fn aptitude_questions() -> Vec<Question> {
    use QuestionCategory::Aptitude;

    vec![
        choice(
            "apt_1",
            "A user can't connect to Wi-Fi. What should be your first step?",
            Aptitude,
            "problem_solving",
            &[
                "Check if Wi-Fi is enabled on their device",
                "Restart the router",
                "Reinstall network drivers",
                "Contact the ISP",
            ],
            "Check if Wi-Fi is enabled on their device",
        ),
        choice(
            "apt_2",
            "A customer calls frustrated that their email isn't working. How do you respond?",
            Aptitude,
            "communication",
            &[
                "Acknowledge their frustration and assure them you'll help resolve it",
                "Immediately ask for technical details",
                "Tell them to restart their computer",
                "Transfer them to a specialist",
            ],
            "Acknowledge their frustration and assure them you'll help resolve it",
        ),
        choice(
            "apt_3",
            "You encounter an error you've never seen before. What do you do?",
            Aptitude,
            "learning_agility",
            &[
                "Research the error and consult documentation",
                "Guess based on similar errors",
                "Immediately escalate to senior staff",
                "Tell the user you can't help",
            ],
            "Research the error and consult documentation",
        ),
        choice(
            "apt_4",
            "If A > B and B > C, which statement is always true?",
            Aptitude,
            "logical_reasoning",
            &["A > C", "C > A", "A = C", "Cannot determine"],
            "A > C",
        ),
        choice(
            "apt_5",
            "A user reports their computer is 'running slow'. What information do you need first?",
            Aptitude,
            "diagnostic_thinking",
            &[
                "When did the slowness start and what were they doing",
                "Their computer specifications",
                "Their internet speed",
                "Their operating system version",
            ],
            "When did the slowness start and what were they doing",
        ),
    ]
}

fn wiscar_questions() -> Vec<Question> {
    use QuestionCategory::Wiscar;

    vec![
        likert(
            "wiscar_1",
            "I persist through difficult technical problems even when initial solutions don't work.",
            Wiscar,
            "will",
            "persistence",
        ),
        likert(
            "wiscar_2",
            "I'm genuinely curious about how technology works and why it fails.",
            Wiscar,
            "interest",
            "curiosity",
        ),
        likert(
            "wiscar_3",
            "I have strong written and verbal communication skills.",
            Wiscar,
            "skill",
            "communication",
        ),
        likert(
            "wiscar_4",
            "I can effectively multitask and prioritize multiple support requests.",
            Wiscar,
            "cognitive",
            "multitasking",
        ),
        likert(
            "wiscar_5",
            "I actively seek feedback and use it to improve my performance.",
            Wiscar,
            "ability",
            "growth_mindset",
        ),
        likert(
            "wiscar_6",
            "I would find daily technical support work engaging and rewarding.",
            Wiscar,
            "realWorld",
            "job_satisfaction",
        ),
    ]
}
