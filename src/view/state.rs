use crate::optimizer::BestValue;

use super::client::{BestApi, Outcome};
use super::form::{FormInput, SubmitRequest};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewResult {
    Best(BestValue),
    Message(String),
}

/// Everything the result page shows for one submission.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub form: FormInput,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<ViewResult>,
}

impl ViewState {
    /// Clears the previous result and validates the input. Only a valid
    /// submission enters the loading state and yields a request to send.
    pub fn begin_submit(&mut self, input: FormInput) -> Option<SubmitRequest> {
        self.form = input;
        self.error = None;
        self.result = None;
        match self.form.validate() {
            Ok(request) => {
                self.loading = true;
                Some(request)
            }
            Err(message) => {
                self.loading = false;
                self.error = Some(message.to_string());
                None
            }
        }
    }

    pub fn settle(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Best(value) => self.result = Some(ViewResult::Best(value)),
            Outcome::Message(message) => self.result = Some(ViewResult::Message(message)),
            Outcome::Failed(error) => self.error = Some(error),
        }
        self.loading = false;
    }

    pub async fn submit<A: BestApi + ?Sized>(&mut self, api: &A, input: FormInput) {
        if let Some(request) = self.begin_submit(input) {
            let outcome = api.post_best(&request).await;
            self.settle(outcome);
        }
    }
}
