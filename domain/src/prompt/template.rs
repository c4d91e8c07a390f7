//! Prompt templates for the coordination flows

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Synthesis prompt comparing the two fan-out answers
    ///
    /// The question and both responses are embedded verbatim.
    pub fn synthesis_prompt(question: &str, general_response: &str, code_response: &str) -> String {
        format!(
            r#"Compare these two responses to the question: "{question}"

Response 1 (General Model): {general_response}

Response 2 (Code Model): {code_response}

Provide a brief synthesis highlighting:
1. Key similarities
2. Unique insights from each
3. Which response is better for what purpose"#
        )
    }

    /// Concept stage: plain-language explanation of a topic
    pub fn concept_prompt(topic: &str) -> String {
        format!(
            "Explain {} in simple, easy-to-understand terms with analogies and examples",
            topic
        )
    }

    /// Practice stage: implementation-oriented material for a topic
    pub fn practice_prompt(topic: &str) -> String {
        format!(
            "Provide practical code examples and implementation details for {}",
            topic
        )
    }

    /// Integration stage: merges concept and practice texts into one guide
    pub fn integration_prompt(concept: &str, practice: &str) -> String {
        format!(
            r#"Create a comprehensive learning guide that combines:

Conceptual Understanding: {concept}

Practical Implementation: {practice}

Structure this as a complete learning resource with:
1. Clear explanation
2. Practical examples
3. Key takeaways"#
        )
    }
}
