pub const CLASSIFIER_SYSTEM_MESSAGE: &str = "You are an analysis expert tasked with providing \
accurate, detailed assessments based on specified guidelines.";

/// One ordinal level of the scoring rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RubricLevel {
    pub score: u32,
    pub adjectives: [&'static str; 3],
}

/// Adjective-to-score mapping shared by the prompt and the offline classifier.
pub const RUBRIC: [RubricLevel; 5] = [
    RubricLevel {
        score: 1,
        adjectives: ["awful", "horrible", "disgusting"],
    },
    RubricLevel {
        score: 2,
        adjectives: ["bad", "unpleasant", "offensive"],
    },
    RubricLevel {
        score: 3,
        adjectives: ["average", "uninspiring", "forgettable"],
    },
    RubricLevel {
        score: 4,
        adjectives: ["good", "enjoyable", "satisfying"],
    },
    RubricLevel {
        score: 5,
        adjectives: ["awesome", "incredible", "amazing"],
    },
];

const PROMPT_HEADER: &str = "Analyze the following restaurant reviews and extract two scores \
for each review:\n1. food_score (1-5)\n2. customer_service_score (1-5)\n\n\
Use the following adjective mappings to determine the scores:\n";

const PROMPT_FOOTER: &str = "\nEach review contains exactly two adjectives, one for food and \
one for customer service.\n\n\
Provide the results in the following JSON format without adding any markdown:\n\
{\n  \"reviews\": [\n    {\n      \"food_score\": <int>,\n      \"customer_service_score\": <int>\n    },\n    ...\n  ]\n}";

/// Builds the classification prompt: rubric, output format, then one `- "<review>"` line per
/// review in input order.
pub fn classification_prompt(reviews: &[String]) -> String {
    let mut prompt = String::from(PROMPT_HEADER);

    for level in &RUBRIC {
        prompt.push_str(&format!(
            "- Score {}: {}\n",
            level.score,
            level.adjectives.join(", ")
        ));
    }

    prompt.push_str(PROMPT_FOOTER);

    for review in reviews {
        prompt.push_str(&format!("\n- \"{}\"", review));
    }

    prompt
}

/// Score for a lowercase word, if it is a rubric adjective.
pub fn rubric_score(word: &str) -> Option<u32> {
    RUBRIC
        .iter()
        .find(|level| level.adjectives.contains(&word))
        .map(|level| level.score)
}
