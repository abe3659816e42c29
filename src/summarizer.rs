use crate::llm::Message;

pub const SYSTEM_PROMPT: &str = "You are a professional summarization engine. You follow formatting instructions exactly and never include meta-commentary.";

pub const TEMPERATURE: f32 = 0.2;

const BULLET_INSTRUCTION: &str = "
- Format the summary strictly as bullet points.
- Each bullet MUST start with \"• \" (bullet + space).
- Put each bullet on its own line.
- Do NOT add any paragraphs or prose outside the bullets.
";

const PARAGRAPH_INSTRUCTION: &str = "
- Format the summary as 1–3 cohesive paragraphs.
- Do NOT use bullet points or numbered lists.
- Use natural sentence transitions.
";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthSetting {
    Short,
    Medium,
    Detailed,
}

impl LengthSetting {
    /// Unrecognized values fall back to `Medium` rather than failing.
    pub fn from_setting(value: &str) -> Self {
        match value {
            "Short" => LengthSetting::Short,
            "Detailed" => LengthSetting::Detailed,
            _ => LengthSetting::Medium,
        }
    }

    pub fn target_length(self) -> &'static str {
        match self {
            LengthSetting::Short => "1–3 key points",
            LengthSetting::Medium => "4–6 key points",
            LengthSetting::Detailed => "7–10 key points",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatSetting {
    Bullets,
    Paragraphs,
}

impl FormatSetting {
    /// Anything other than `"Bullets"` means paragraphs.
    pub fn from_setting(value: &str) -> Self {
        match value {
            "Bullets" => FormatSetting::Bullets,
            _ => FormatSetting::Paragraphs,
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            FormatSetting::Bullets => BULLET_INSTRUCTION,
            FormatSetting::Paragraphs => PARAGRAPH_INSTRUCTION,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptPlan {
    pub target_length: &'static str,
    pub format_instruction: &'static str,
}

impl PromptPlan {
    pub fn new(length: LengthSetting, format: FormatSetting) -> Self {
        PromptPlan {
            target_length: length.target_length(),
            format_instruction: format.instruction(),
        }
    }
}

/// Whitespace as browsers and JavaScript see it: Unicode `White_Space`
/// without U+0085, plus the byte-order mark U+FEFF.
pub fn is_separator(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Strips leading and trailing separators.
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(is_separator)
}

/// Number of separator-delimited, non-empty tokens.
pub fn word_count(text: &str) -> usize {
    text.split(is_separator).filter(|token| !token.is_empty()).count()
}

/// Builds the user-role prompt. `text` is expected to be trimmed already.
pub fn build_prompt(plan: &PromptPlan, text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 400);
    result.push_str("\nSummarize the following text.\n\nRequirements:\n");
    result.push_str("- Be neutral, factual, and concise.\n");
    result.push_str("- Focus only on the core ideas and important details.\n");
    result.push_str("- Aim for ");
    result.push_str(plan.target_length);
    result.push_str(".\n");
    result.push_str(plan.format_instruction);
    result.push_str("\n\nText to summarize:\n\"\"\"");
    result.push_str(text);
    result.push_str("\"\"\"\n");
    result
}

/// The system + user conversation sent to the completion service.
pub fn build_messages(plan: &PromptPlan, text: &str) -> Vec<Message> {
    vec![
        Message::system(SYSTEM_PROMPT),
        Message::user(build_prompt(plan, text)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;

    #[test]
    fn unknown_length_falls_back_to_medium() {
        assert_eq!(LengthSetting::from_setting("Short"), LengthSetting::Short);
        assert_eq!(LengthSetting::from_setting("Detailed"), LengthSetting::Detailed);
        assert_eq!(LengthSetting::from_setting("Medium"), LengthSetting::Medium);
        assert_eq!(LengthSetting::from_setting("short"), LengthSetting::Medium);
        assert_eq!(LengthSetting::from_setting(""), LengthSetting::Medium);
    }

    #[test]
    fn only_exact_bullets_selects_bullets() {
        assert_eq!(FormatSetting::from_setting("Bullets"), FormatSetting::Bullets);
        assert_eq!(FormatSetting::from_setting("Paragraphs"), FormatSetting::Paragraphs);
        assert_eq!(FormatSetting::from_setting("bullets"), FormatSetting::Paragraphs);
        assert_eq!(FormatSetting::from_setting("Table"), FormatSetting::Paragraphs);
    }

    #[test]
    fn length_hints() {
        assert_eq!(LengthSetting::Short.target_length(), "1–3 key points");
        assert_eq!(LengthSetting::Medium.target_length(), "4–6 key points");
        assert_eq!(LengthSetting::Detailed.target_length(), "7–10 key points");
    }

    #[test]
    fn word_count_ignores_whitespace_runs() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("  one   two\n\nthree\tfour  "), 4);
        // Bullet markers are tokens too.
        assert_eq!(word_count("• point one\n• point two"), 6);
    }

    #[test]
    fn separators_follow_javascript_whitespace() {
        assert_eq!(word_count("a\u{85}b"), 1);
        assert_eq!(word_count("one\u{feff}two"), 2);
        assert_eq!(word_count("non\u{a0}breaking\u{3000}space"), 3);

        assert_eq!(trim_text("\u{feff} text \u{2028}"), "text");
        assert_eq!(trim_text("\u{85}text"), "\u{85}text");
    }

    #[test]
    fn bullet_prompt_mandates_marker() {
        let plan = PromptPlan::new(LengthSetting::Medium, FormatSetting::Bullets);
        let prompt = build_prompt(&plan, "Rust is a systems language.");

        assert!(prompt.contains("- Aim for 4–6 key points.\n"));
        assert!(prompt.contains("Each bullet MUST start with \"• \""));
        assert!(prompt.contains("Do NOT add any paragraphs or prose outside the bullets."));
        assert!(!prompt.contains("cohesive paragraphs"));
    }

    #[test]
    fn paragraph_prompt_forbids_lists() {
        let plan = PromptPlan::new(LengthSetting::Short, FormatSetting::Paragraphs);
        let prompt = build_prompt(&plan, "Rust is a systems language.");

        assert!(prompt.contains("- Aim for 1–3 key points.\n"));
        assert!(prompt.contains("1–3 cohesive paragraphs"));
        assert!(prompt.contains("Do NOT use bullet points or numbered lists."));
        assert!(!prompt.contains("\"• \""));
    }

    #[test]
    fn source_text_is_wrapped_in_triple_quotes() {
        let plan = PromptPlan::new(LengthSetting::Detailed, FormatSetting::Bullets);
        let prompt = build_prompt(&plan, "The quick brown fox.");

        assert!(prompt.starts_with("\nSummarize the following text.\n"));
        assert!(prompt.ends_with("Text to summarize:\n\"\"\"The quick brown fox.\"\"\"\n"));
    }

    #[test]
    fn messages_are_system_then_user() {
        let plan = PromptPlan::new(LengthSetting::Medium, FormatSetting::Bullets);
        let messages = build_messages(&plan, "Some text.");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.contains("\"\"\"Some text.\"\"\""));
    }
}
