use crate::*;
use std::time::Duration;

/// What the result pane shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Table(TableModel),
    Tree(TreeModel),
    Text(String),
    /// Plain text in the error color.
    ErrorText(String),
}

impl ResultView {
    /// Table when the type is flat enough, tree otherwise.
    pub fn render(ty: &TypeDescriptor, data: &DataValue) -> Self {
        if is_tabular(ty) {
            ResultView::Table(render_table(ty, data))
        } else {
            ResultView::Tree(render_tree(ty, data))
        }
    }
}

/// A worker event prepared for display, with an optional status notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub view: ResultView,
    pub notice: Option<String>,
}

impl Presentation {
    pub fn from_event(event: &Event) -> Self {
        match event {
            Event::Executed(outcome) => Self::outcome(outcome),
            Event::Validated(validation) => Self::validation(validation),
            Event::Failed(message) => Self {
                view: ResultView::ErrorText(message.clone()),
                notice: None,
            },
        }
    }

    pub fn outcome(outcome: &QueryOutcome) -> Self {
        Self {
            view: ResultView::render(&outcome.ty, &outcome.data),
            notice: outcome.truncated.then(|| truncation_notice(RESULT_CAP)),
        }
    }

    /// How long the notice stays up, from [`Config::notice_ms`].
    pub fn notice_timeout(&self) -> Option<Duration> {
        self.notice.as_ref().map(|_| config().notice_duration())
    }

    /// Errors one per line, or the inferred type when the query is valid.
    pub fn validation(validation: &Validation) -> Self {
        let view = if validation.is_valid() {
            ResultView::Text(
                validation
                    .ty
                    .as_ref()
                    .map_or_else(|| "valid".to_string(), ToString::to_string),
            )
        } else {
            ResultView::ErrorText(validation.errors.join("\n"))
        };
        Self { view, notice: None }
    }
}
