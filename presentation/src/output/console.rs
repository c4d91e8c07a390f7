//! Console output formatter for coordinator results

use colored::Colorize;
use duet_domain::{DualQueryResult, LearningContent, SingleQueryResult, ToolCatalog};
use serde::Serialize;

/// Formats coordinator results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a routed single-model answer
    pub fn format_single(result: &SingleQueryResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Single Model Answer"));
        output.push('\n');

        output.push_str(&format!(
            "{} {} ({})\n",
            "Model:".cyan().bold(),
            result.model_used,
            result.model_type
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Routing:".cyan().bold(),
            result.routing_reason.dimmed()
        ));

        output.push_str(&Self::section_header("Response"));
        output.push_str(&format!("\n{}\n", result.response));

        output.push_str(&Self::footer());
        output
    }

    /// Format both answers plus the synthesis
    pub fn format_dual(result: &DualQueryResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Dual Model Comparison"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            result.question
        ));

        output.push_str(&Self::section_header("Stage 1: Answers"));
        for (label, answer) in [
            ("General", &result.responses.general_model),
            ("Code", &result.responses.code_model),
        ] {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} model: {} ──", label, answer.model).yellow().bold(),
                answer.response
            ));
        }

        output.push_str(&Self::section_header("Stage 2: Synthesis"));
        output.push_str(&format!("\n{}\n", result.synthesis));

        output.push_str(&format!(
            "\n{} {}\n",
            "Recommendation:".green().bold(),
            result.recommendation
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Format the three-part learning content
    pub fn format_learning(content: &LearningContent) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Learning: {}", content.topic)));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Path:".cyan().bold(),
            content.learning_path
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Models:".cyan().bold(),
            content.models_used.join(", ")
        ));

        let components = &content.learning_components;
        for (title, text) in [
            ("Concept", &components.concept),
            ("Practice", &components.practice),
            ("Integrated Guide", &components.integrated),
        ] {
            output.push_str(&Self::section_header(title));
            output.push_str(&format!("\n{}\n", text));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Human-readable tool listing
    pub fn format_tools(catalog: &ToolCatalog) -> String {
        let mut output = String::new();

        for tool in catalog.all() {
            output.push_str(&format!("{}\n", tool.name.yellow().bold()));
            output.push_str(&format!("  {}\n", tool.description));
            for param in &tool.parameters {
                let mut line = format!("  - {}", param.name);
                if param.required {
                    line.push_str(" (required)");
                }
                if !param.allowed_values.is_empty() {
                    line.push_str(&format!(" [{}]", param.allowed_values.join("|")));
                }
                if let Some(default) = &param.default {
                    line.push_str(&format!(" default: {}", default));
                }
                output.push_str(&format!("{}: {}\n", line, param.description.dimmed()));
            }
            output.push('\n');
        }

        output
    }

    /// Format as JSON, the same text a tool caller receives
    pub fn format_json<T: Serialize>(result: &T) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
