//! Ask Single Model use case
//!
//! Resolves a category (explicit or classified) to one model and asks it.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::backend_client::BackendClient;
use duet_domain::{
    CategorySelection, KeywordClassifier, ModelCategory, ModelRegistry, Question,
    QuestionClassifier, SingleQueryResult, Stage,
};
use std::sync::Arc;
use tracing::info;

/// Input for the [`AskSingleModelUseCase`]
#[derive(Debug, Clone)]
pub struct AskSingleModelInput {
    /// The question, sent to the model verbatim
    pub question: Question,
    /// Requested category; `Auto` runs the classifier
    pub selection: CategorySelection,
}

impl AskSingleModelInput {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            selection: CategorySelection::Auto,
        }
    }

    pub fn with_selection(mut self, selection: CategorySelection) -> Self {
        self.selection = selection;
        self
    }
}

/// Use case for asking exactly one model
#[derive(Clone)]
pub struct AskSingleModelUseCase {
    client: BackendClient,
    registry: Arc<ModelRegistry>,
    classifier: Arc<dyn QuestionClassifier>,
}

impl AskSingleModelUseCase {
    pub fn new(client: BackendClient, registry: Arc<ModelRegistry>) -> Self {
        Self {
            client,
            registry,
            classifier: Arc::new(KeywordClassifier::new()),
        }
    }

    /// Replace the keyword classifier used for `Auto` selections
    pub fn with_classifier(mut self, classifier: Arc<dyn QuestionClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Resolve a selection to a concrete category
    pub fn resolve_category(
        &self,
        question: &Question,
        selection: CategorySelection,
    ) -> ModelCategory {
        match selection {
            CategorySelection::Auto => self.classifier.classify(question.content()),
            CategorySelection::Category(category) => category,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: AskSingleModelInput) -> SingleQueryResult {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: AskSingleModelInput,
        progress: &dyn ProgressNotifier,
    ) -> SingleQueryResult {
        let category = self.resolve_category(&input.question, input.selection);
        let model = self.registry.model_for(category).clone();
        info!(
            "Routing question to {} model {} (requested: {})",
            category, model, input.selection
        );

        progress.on_stage_start(Stage::Query, 1);
        let response = self
            .client
            .invoke_in(Stage::Query, &model, input.question.content())
            .await;
        progress.on_call_complete(Stage::Query, &model, response.is_success());
        progress.on_stage_complete(Stage::Query);

        SingleQueryResult::new(model, category, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{EchoGateway, FailingGateway, RecordingProgress};
    use duet_domain::Model;

    fn use_case(gateway: Arc<EchoGateway>) -> AskSingleModelUseCase {
        AskSingleModelUseCase::new(
            BackendClient::new(gateway),
            Arc::new(ModelRegistry::default()),
        )
    }

    fn question(text: &str) -> Question {
        Question::new(text).unwrap()
    }

    #[tokio::test]
    async fn test_auto_routes_code_question_to_code_model() {
        let gateway = Arc::new(EchoGateway::new());
        let result = use_case(gateway.clone())
            .execute(AskSingleModelInput::new(question("Explain this Python function")))
            .await;

        assert_eq!(result.model_type, ModelCategory::Code);
        assert_eq!(result.model_used, Model::default_code());
        assert_eq!(result.response, "C:Explain this Python function");
        assert_eq!(
            result.routing_reason,
            "Selected code model for this type of question"
        );
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_auto_routes_general_question_to_general_model() {
        let gateway = Arc::new(EchoGateway::new());
        let result = use_case(gateway)
            .execute(AskSingleModelInput::new(question("What is quantum entanglement?")))
            .await;

        assert_eq!(result.model_type, ModelCategory::General);
        assert_eq!(result.response, "G:What is quantum entanglement?");
    }

    #[tokio::test]
    async fn test_explicit_category_overrides_classifier() {
        let gateway = Arc::new(EchoGateway::new());
        let input = AskSingleModelInput::new(question("Write a sorting algorithm"))
            .with_selection(ModelCategory::General.into());
        let result = use_case(gateway).execute(input).await;

        assert_eq!(result.model_type, ModelCategory::General);
        assert_eq!(result.model_used, Model::default_general());
    }

    #[tokio::test]
    async fn test_unknown_category_behaves_like_general() {
        let gateway = Arc::new(EchoGateway::new());
        let uc = use_case(gateway);
        let q = question("Explain this Python function");

        let unknown = uc
            .execute(AskSingleModelInput::new(q.clone()).with_selection("banana".parse().unwrap()))
            .await;
        let general = uc
            .execute(AskSingleModelInput::new(q).with_selection(ModelCategory::General.into()))
            .await;

        assert_eq!(unknown, general);
    }

    #[tokio::test]
    async fn test_backend_error_is_in_band() {
        let uc = AskSingleModelUseCase::new(
            BackendClient::new(Arc::new(FailingGateway::new("refused"))),
            Arc::new(ModelRegistry::default()),
        );
        let result = uc.execute(AskSingleModelInput::new(question("hi"))).await;

        assert_eq!(result.model_type, ModelCategory::General);
        assert_eq!(result.response, "Error: Connection error: refused");
    }

    #[tokio::test]
    async fn test_custom_classifier_is_used() {
        struct AlwaysCode;
        impl QuestionClassifier for AlwaysCode {
            fn classify(&self, _question: &str) -> ModelCategory {
                ModelCategory::Code
            }
        }

        let uc = use_case(Arc::new(EchoGateway::new())).with_classifier(Arc::new(AlwaysCode));
        let result = uc
            .execute(AskSingleModelInput::new(question("What is love?")))
            .await;
        assert_eq!(result.model_type, ModelCategory::Code);
    }

    #[tokio::test]
    async fn test_progress_events() {
        let progress = RecordingProgress::default();
        use_case(Arc::new(EchoGateway::new()))
            .execute_with_progress(AskSingleModelInput::new(question("hi")), &progress)
            .await;

        assert_eq!(
            progress.events(),
            vec![
                "start:query:1".to_string(),
                "call:query:llama3.2:3b:true".to_string(),
                "done:query".to_string(),
            ]
        );
    }
}
