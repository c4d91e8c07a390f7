//! Ask Both Models use case
//!
//! Orchestrates the dual query flow:
//!
//! 1. **Fanout**: general and code model answer the same question concurrently
//! 2. **Synthesis**: the general model compares both answers
//!
//! The synthesis call starts only after both fan-out calls have finished.
//! A failed call does not cancel its sibling; its error text is carried into
//! the synthesis prompt like any other answer.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::backend_client::BackendClient;
use duet_domain::{
    BackendResponse, DualQueryResult, Model, ModelAnswer, ModelRegistry, PromptTemplate,
    Question, Stage,
};
use std::sync::Arc;
use tracing::info;

/// Use case for asking both models and synthesizing their answers
#[derive(Clone)]
pub struct AskBothModelsUseCase {
    client: BackendClient,
    registry: Arc<ModelRegistry>,
}

impl AskBothModelsUseCase {
    pub fn new(client: BackendClient, registry: Arc<ModelRegistry>) -> Self {
        Self { client, registry }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, question: Question) -> DualQueryResult {
        self.execute_with_progress(question, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        question: Question,
        progress: &dyn ProgressNotifier,
    ) -> DualQueryResult {
        let general_model = self.registry.general();
        let code_model = self.registry.code();

        let (general, code) = self
            .stage_fanout(question.content(), general_model, code_model, progress)
            .await;

        let general = ModelAnswer::new(general_model.clone(), general);
        let code = ModelAnswer::new(code_model.clone(), code);

        let synthesis = self
            .stage_synthesis(question.content(), &general.response, &code.response, progress)
            .await;

        DualQueryResult::new(question.into_content(), general, code, synthesis)
    }

    /// Stage 1: both models answer concurrently (join barrier)
    async fn stage_fanout(
        &self,
        question: &str,
        general_model: &Model,
        code_model: &Model,
        progress: &dyn ProgressNotifier,
    ) -> (BackendResponse, BackendResponse) {
        info!("Stage 1: asking {} and {}", general_model, code_model);
        progress.on_stage_start(Stage::Fanout, 2);

        let ask = |model: Model| async move {
            let response = self.client.invoke_in(Stage::Fanout, &model, question).await;
            progress.on_call_complete(Stage::Fanout, &model, response.is_success());
            response
        };

        let (general, code) = tokio::join!(ask(general_model.clone()), ask(code_model.clone()));

        progress.on_stage_complete(Stage::Fanout);
        (general, code)
    }

    /// Stage 2: general model compares both answers
    async fn stage_synthesis(
        &self,
        question: &str,
        general_text: &str,
        code_text: &str,
        progress: &dyn ProgressNotifier,
    ) -> BackendResponse {
        info!("Stage 2: synthesis");
        progress.on_stage_start(Stage::Synthesis, 1);

        let moderator = self.registry.general();
        let prompt = PromptTemplate::synthesis_prompt(question, general_text, code_text);
        let synthesis = self
            .client
            .invoke_in(Stage::Synthesis, moderator, &prompt)
            .await;

        progress.on_call_complete(Stage::Synthesis, moderator, synthesis.is_success());
        progress.on_stage_complete(Stage::Synthesis);
        synthesis
    }
}
