use std::sync::LazyLock;

use regex::Regex;

use crate::domain::markup;

const DEFAULT_SCENARIO: &str = "User Story";
const DEFAULT_FEATURE: &str = "Feature";
const DEFAULT_DOMAIN: &str = "Domain";

const DEFINITION_OF_DONE: [&str; 6] = [
    "Gherkin scenario implemented",
    "Unit tests passing",
    "Integration tests passing",
    "Code reviewed and approved",
    "Documentation updated",
    "Deployed to staging environment",
];

static SCENARIO_PATTERN: LazyLock<Regex> = LazyLock::new(|| labelled_value("Scenario"));
static FEATURE_PATTERN: LazyLock<Regex> = LazyLock::new(|| labelled_value("Feature"));
static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| labelled_value("Domain"));

// `{{gherkin` is what inline-code conversion leaves behind for a backtick fence.
static GHERKIN_FENCES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?s)\{\{gherkin\n(.*?)\n\}\}").expect("curly fence pattern is valid"),
        Regex::new(r"(?s)```gherkin\n(.*?)\n```").expect("backtick fence pattern is valid"),
    ]
});

fn labelled_value(label: &str) -> Regex {
    Regex::new(&format!(r"\*{label}\*:\s*(.+?)(?:\n|$)")).expect("label pattern is valid")
}

/// Fields pulled out of a converted description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFields {
    pub scenario: String,
    pub feature: String,
    pub domain: String,
    pub acceptance_criteria: String,
}

impl ParsedFields {
    pub fn extract(converted: &str) -> Self {
        Self {
            scenario: first_capture(&SCENARIO_PATTERN, converted)
                .unwrap_or(DEFAULT_SCENARIO)
                .to_string(),
            feature: first_capture(&FEATURE_PATTERN, converted)
                .unwrap_or(DEFAULT_FEATURE)
                .to_string(),
            domain: first_capture(&DOMAIN_PATTERN, converted)
                .unwrap_or(DEFAULT_DOMAIN)
                .to_string(),
            acceptance_criteria: GHERKIN_FENCES
                .iter()
                .find_map(|fence| first_capture(fence, converted))
                .unwrap_or_default()
                .to_string(),
        }
    }

    pub fn render(&self) -> String {
        let checklist = DEFINITION_OF_DONE
            .iter()
            .map(|item| format!("* [ ] {item}"))
            .collect::<Vec<_>>()
            .join("\n");

        let rendered = format!(
            "h2. User Story\n{scenario}\n\n\
             h2. Feature Area\n{feature}\n\n\
             h2. Domain\n{domain}\n\n\
             h2. Acceptance Criteria\n{{code:language=gherkin}}\n{gherkin}\n{{code}}\n\n\
             h2. Definition of Done\n{checklist}\n\n\
             h2. Labels\nAdd labels: {{bdd}}, {{gherkin}}, {{{domain}}}\n",
            scenario = self.scenario,
            feature = self.feature,
            domain = self.domain,
            gherkin = self.acceptance_criteria,
        );

        rendered.trim().to_string()
    }
}

fn first_capture<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Rebuilds a raw description into the fixed six-section wiki template.
pub fn build(raw: &str) -> String {
    let converted = markup::convert(raw);
    ParsedFields::extract(&converted).render()
}
