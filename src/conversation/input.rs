//! What the delivery layer should offer the user next, and the replies that carry it.

use serde::{Deserialize, Serialize};

/// Affordance to present for the user's next message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "options")]
pub enum ExpectedInput {
    /// Nothing in particular; clear any keyboard.
    #[serde(rename = "none")]
    None,
    /// Free text, with suggestions shown as a reply keyboard.
    #[serde(rename = "text")]
    FreeText(Vec<String>),
    /// One of a fixed set of buttons.
    #[serde(rename = "card")]
    Choice(Vec<String>),
}

impl ExpectedInput {
    /// Builds a [`ExpectedInput::Choice`] from labels.
    pub fn choice(labels: &[&str]) -> Self {
        ExpectedInput::Choice(labels.iter().map(|l| l.to_string()).collect())
    }

    /// The offered options, empty for [`ExpectedInput::None`].
    pub fn options(&self) -> &[String] {
        match self {
            ExpectedInput::None => &[],
            ExpectedInput::FreeText(options) | ExpectedInput::Choice(options) => options,
        }
    }
}

/// One line of bot output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Text to deliver.
    pub text: String,
    /// Present only on the last reply of a turn.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expected_input: Option<ExpectedInput>,
}

impl Reply {
    /// A reply with no input hint.
    pub fn bare(text: String) -> Self {
        Self {
            text,
            expected_input: None,
        }
    }

    /// The closing reply of a turn.
    pub fn closing(text: String, expected_input: ExpectedInput) -> Self {
        Self {
            text,
            expected_input: Some(expected_input),
        }
    }
}
