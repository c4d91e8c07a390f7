//! Create Learning Content use case
//!
//! Three-stage pipeline across both models:
//!
//! 1. **Concept** (general): plain-language explanation of the topic
//! 2. **Practice** (code): implementation details for the same topic
//! 3. **Integration** (general): one guide built from both texts
//!
//! Concept and practice do not read each other's output. They run one after
//! the other unless [`CoordinatorParams::parallel_stages`] is set; either
//! way integration waits for both.

use crate::config::CoordinatorParams;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::backend_client::BackendClient;
use duet_domain::{
    BackendResponse, LearningContent, Model, ModelRegistry, PromptTemplate, Stage, Topic,
};
use std::sync::Arc;
use tracing::info;

/// Use case for composing learning content from both models
#[derive(Clone)]
pub struct CreateLearningContentUseCase {
    client: BackendClient,
    registry: Arc<ModelRegistry>,
    params: CoordinatorParams,
}

impl CreateLearningContentUseCase {
    pub fn new(client: BackendClient, registry: Arc<ModelRegistry>) -> Self {
        Self {
            client,
            registry,
            params: CoordinatorParams::default(),
        }
    }

    pub fn with_params(mut self, params: CoordinatorParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, topic: Topic) -> LearningContent {
        self.execute_with_progress(topic, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        topic: Topic,
        progress: &dyn ProgressNotifier,
    ) -> LearningContent {
        info!(
            "Composing learning content for '{}' (parallel stages: {})",
            topic, self.params.parallel_stages
        );

        let concept_prompt = PromptTemplate::concept_prompt(topic.name());
        let practice_prompt = PromptTemplate::practice_prompt(topic.name());
        let general = self.registry.general();
        let code = self.registry.code();

        let (concept, practice) = if self.params.parallel_stages {
            tokio::join!(
                self.run_stage(Stage::Concept, general, &concept_prompt, progress),
                self.run_stage(Stage::Practice, code, &practice_prompt, progress),
            )
        } else {
            let concept = self
                .run_stage(Stage::Concept, general, &concept_prompt, progress)
                .await;
            let practice = self
                .run_stage(Stage::Practice, code, &practice_prompt, progress)
                .await;
            (concept, practice)
        };

        let concept_text = concept.into_display_text();
        let practice_text = practice.into_display_text();

        let integration_prompt = PromptTemplate::integration_prompt(&concept_text, &practice_text);
        let integrated = self
            .run_stage(Stage::Integration, general, &integration_prompt, progress)
            .await;

        LearningContent::new(
            topic.name(),
            BackendResponse::Text(concept_text),
            BackendResponse::Text(practice_text),
            integrated,
            self.registry.model_ids(),
        )
    }

    async fn run_stage(
        &self,
        stage: Stage,
        model: &Model,
        prompt: &str,
        progress: &dyn ProgressNotifier,
    ) -> BackendResponse {
        info!("Stage {}: {}", stage.display_name(), model);
        progress.on_stage_start(stage, 1);
        let response = self.client.invoke_in(stage, model, prompt).await;
        progress.on_call_complete(stage, model, response.is_success());
        progress.on_stage_complete(stage);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{BarrierGateway, EchoGateway, RecordingProgress};
    use duet_domain::LEARNING_PATH;
    use std::time::Duration;

    fn use_case(gateway: Arc<dyn crate::LlmGateway>) -> CreateLearningContentUseCase {
        CreateLearningContentUseCase::new(
            BackendClient::new(gateway),
            Arc::new(ModelRegistry::default()),
        )
    }

    fn topic(name: &str) -> Topic {
        Topic::new(name).unwrap()
    }

    #[tokio::test]
    async fn test_pipeline_outputs() {
        let gateway = Arc::new(EchoGateway::new());
        let content = use_case(gateway.clone()).execute(topic("recursion")).await;

        let concept = format!("G:{}", PromptTemplate::concept_prompt("recursion"));
        let practice = format!("C:{}", PromptTemplate::practice_prompt("recursion"));
        let integrated = format!(
            "G:{}",
            PromptTemplate::integration_prompt(&concept, &practice)
        );

        assert_eq!(content.topic, "recursion");
        assert_eq!(content.learning_components.concept, concept);
        assert_eq!(content.learning_components.practice, practice);
        assert_eq!(content.learning_components.integrated, integrated);
        assert_eq!(content.learning_path, LEARNING_PATH);
        assert_eq!(
            content.models_used,
            vec!["llama3.2:3b".to_string(), "codellama:7b-instruct".to_string()]
        );
    }

    #[tokio::test]
    async fn test_integration_prompt_embeds_both_stage_outputs() {
        let gateway = Arc::new(EchoGateway::new());
        let content = use_case(gateway.clone()).execute(topic("closures")).await;

        let calls = gateway.calls();
        assert_eq!(calls.len(), 3);
        let (model, prompt) = &calls[2];
        assert_eq!(*model, Model::default_general());
        assert!(prompt.contains(&content.learning_components.concept));
        assert!(prompt.contains(&content.learning_components.practice));
    }

    #[tokio::test]
    async fn test_sequential_stage_order() {
        let gateway = Arc::new(EchoGateway::new());
        use_case(gateway.clone()).execute(topic("graphs")).await;

        let models: Vec<Model> = gateway.calls().into_iter().map(|(m, _)| m).collect();
        assert_eq!(
            models,
            vec![
                Model::default_general(),
                Model::default_code(),
                Model::default_general()
            ]
        );
    }

    #[tokio::test]
    async fn test_practice_error_flows_into_integration() {
        let gateway = Arc::new(EchoGateway::new().failing_for(Model::default_code()));
        let content = use_case(gateway.clone()).execute(topic("graphs")).await;

        assert_eq!(
            content.learning_components.practice,
            "Error: Connection error: backend down"
        );
        assert!(content
            .learning_components
            .integrated
            .contains("Practical Implementation: Error: Connection error: backend down"));
    }

    #[tokio::test]
    async fn test_parallel_stages_same_output() {
        let sequential = use_case(Arc::new(EchoGateway::new()))
            .execute(topic("ownership"))
            .await;
        let parallel = use_case(Arc::new(EchoGateway::new()))
            .with_params(CoordinatorParams::default().with_parallel_stages(true))
            .execute(topic("ownership"))
            .await;

        assert_eq!(sequential, parallel);
    }

    #[tokio::test]
    async fn test_parallel_stages_run_concurrently() {
        let uc = use_case(Arc::new(BarrierGateway::new(2)))
            .with_params(CoordinatorParams::default().with_parallel_stages(true));

        let content = tokio::time::timeout(Duration::from_secs(5), uc.execute(topic("traits")))
            .await
            .expect("concept and practice were not concurrent");
        assert!(content.learning_components.integrated.starts_with("llama3.2:3b:"));
    }

    #[tokio::test]
    async fn test_progress_stage_order() {
        let progress = RecordingProgress::default();
        use_case(Arc::new(EchoGateway::new()))
            .execute_with_progress(topic("t"), &progress)
            .await;

        let starts: Vec<String> = progress
            .events()
            .into_iter()
            .filter(|e| e.starts_with("start:"))
            .collect();
        assert_eq!(
            starts,
            vec!["start:concept:1", "start:practice:1", "start:integration:1"]
        );
    }
}
