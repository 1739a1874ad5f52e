use super::super::domain::{CareerFit, WiscarScores};

const CERTIFICATION_BELOW: u8 = 60;
const FOUNDATIONS_BELOW: u8 = 50;
const STANDOUT_AT: u8 = 80;
const LEANING_AT: u8 = 70;
const WEAK_BELOW: u8 = 50;

pub(crate) fn recommendations(
    fit: CareerFit,
    psychometric: u8,
    technical: u8,
    wiscar: &WiscarScores,
) -> Vec<String> {
    let headline = match fit {
        CareerFit::Strong => "You show strong potential for a Technical Support Engineer role!",
        CareerFit::Moderate => {
            "You have good foundational traits for technical support with room for development."
        }
        CareerFit::Low => "Consider exploring related roles or building foundational skills first.",
    };

    let mut recommendations = vec![headline.to_string()];

    if technical < CERTIFICATION_BELOW {
        recommendations.push(
            "Focus on building technical fundamentals - consider CompTIA A+ or Google IT Support certification."
                .to_string(),
        );
    }
    if psychometric >= STANDOUT_AT {
        recommendations.push(
            "Your strong interpersonal skills are a major asset for customer-facing technical roles."
                .to_string(),
        );
    }
    if wiscar.interest >= STANDOUT_AT {
        recommendations.push(
            "Your genuine interest in technology will drive continuous learning and career growth."
                .to_string(),
        );
    }

    recommendations
}

pub(crate) fn next_steps(fit: CareerFit, technical: u8) -> Vec<String> {
    let tier: [&str; 3] = match fit {
        CareerFit::Strong => [
            "Start applying for junior Technical Support Engineer positions",
            "Build a portfolio showcasing your problem-solving approach",
            "Join technical communities and forums to expand your network",
        ],
        CareerFit::Moderate => [
            "Complete a technical certification program (CompTIA A+, Google IT Support)",
            "Practice troubleshooting scenarios through online labs",
            "Consider entry-level IT roles to gain experience",
        ],
        CareerFit::Low => [
            "Explore foundational IT courses to build technical knowledge",
            "Consider related roles like Customer Success or QA Testing",
            "Volunteer for tech support opportunities to test your interest",
        ],
    };

    let mut steps: Vec<String> = tier.iter().map(|step| step.to_string()).collect();
    if technical < FOUNDATIONS_BELOW {
        steps.push("Take basic networking and operating systems courses".to_string());
    }
    steps
}

pub(crate) fn alternative_careers(fit: CareerFit, psychometric: u8, technical: u8) -> Vec<String> {
    let mut careers = Vec::new();

    if psychometric >= LEANING_AT && technical < WEAK_BELOW {
        careers.extend(["Customer Success Manager", "Technical Writer", "Product Training Specialist"]);
    }
    if technical >= LEANING_AT && psychometric < WEAK_BELOW {
        careers.extend(["QA Tester", "DevOps Engineer", "System Administrator"]);
    }
    if fit == CareerFit::Low {
        careers.extend(["IT Project Coordinator", "Technical Sales", "Business Analyst"]);
    }

    careers.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_headline_per_tier() {
        let wiscar = WiscarScores::default();
        for fit in [CareerFit::Strong, CareerFit::Moderate, CareerFit::Low] {
            let recommendations = recommendations(fit, 70, 70, &wiscar);
            assert_eq!(recommendations.len(), 1, "{fit:?}");
        }
    }

    #[test]
    fn strengths_and_gaps_add_recommendations() {
        let wiscar = WiscarScores {
            interest: 80,
            ..WiscarScores::default()
        };

        let recommendations = recommendations(CareerFit::Moderate, 80, 59, &wiscar);

        assert_eq!(recommendations.len(), 4);
        assert!(recommendations[1].contains("CompTIA A+"));
        assert!(recommendations[2].contains("interpersonal"));
        assert!(recommendations[3].contains("genuine interest"));
    }

    #[test]
    fn weak_technical_adds_foundation_step() {
        assert_eq!(next_steps(CareerFit::Strong, 50).len(), 3);
        let steps = next_steps(CareerFit::Low, 49);
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[3], "Take basic networking and operating systems courses");
    }

    #[test]
    fn alternative_careers_accumulate_independently() {
        assert!(alternative_careers(CareerFit::Strong, 90, 90).is_empty());

        let people_facing = alternative_careers(CareerFit::Low, 70, 49);
        assert_eq!(people_facing.len(), 6);
        assert_eq!(people_facing[0], "Customer Success Manager");
        assert_eq!(people_facing[3], "IT Project Coordinator");

        let technical_track = alternative_careers(CareerFit::Moderate, 49, 70);
        assert_eq!(
            technical_track,
            vec!["QA Tester", "DevOps Engineer", "System Administrator"]
        );
    }
}
