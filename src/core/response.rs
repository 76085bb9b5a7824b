//! Skill response model and builder
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Truncate simple-card content to the platform limit (UTF-8 safe)
//! - 1.0.0: Immutable response value with consuming builder

use serde::Serialize;

/// Simple card content limit, in characters
pub const CARD_CONTENT_LIMIT: usize = 8000;

/// Speech rendered as SSML
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "SSML")]
pub struct OutputSpeech {
    ssml: String,
}

impl OutputSpeech {
    pub fn new(text: &str) -> Self {
        Self {
            ssml: format!("<speak>{}</speak>", escape_ssml(text)),
        }
    }

    pub fn ssml(&self) -> &str {
        &self.ssml
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    output_speech: OutputSpeech,
}

impl Reprompt {
    pub fn output_speech(&self) -> &OutputSpeech {
        &self.output_speech
    }
}

/// Card shown in the companion app
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
    AskForPermissionsConsent { permissions: Vec<String> },
}

impl Card {
    pub fn simple(title: impl Into<String>, content: impl Into<String>) -> Self {
        Card::Simple {
            title: title.into(),
            content: truncate_for_card(&content.into()),
        }
    }

    pub fn permissions_consent<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Card::AskForPermissionsConsent {
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }
}

/// A finished skill response
///
/// Built once through [`ResponseBuilder`] and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    output_speech: Option<OutputSpeech>,
    #[serde(skip)]
    speech_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reprompt: Option<Reprompt>,
    #[serde(skip)]
    reprompt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    should_end_session: Option<bool>,
}

impl Response {
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    /// Response with no speech, card or session directive
    pub fn empty() -> Self {
        Self::default()
    }

    /// Plain spoken text, before SSML wrapping
    pub fn speech(&self) -> Option<&str> {
        self.speech_text.as_deref()
    }

    pub fn reprompt(&self) -> Option<&str> {
        self.reprompt_text.as_deref()
    }

    pub fn output_speech(&self) -> Option<&OutputSpeech> {
        self.output_speech.as_ref()
    }

    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    pub fn should_end_session(&self) -> Option<bool> {
        self.should_end_session
    }

    /// The session stays open only when explicitly kept open
    pub fn keeps_session_open(&self) -> bool {
        self.should_end_session == Some(false)
    }
}

/// Consuming builder for [`Response`]
///
/// `ask` keeps the session open; speech without a reprompt ends it unless
/// `end_session` says otherwise.
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    speech: Option<String>,
    reprompt: Option<String>,
    card: Option<Card>,
    end_session: Option<bool>,
}

impl ResponseBuilder {
    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.speech = Some(text.into());
        self
    }

    pub fn ask(mut self, text: impl Into<String>) -> Self {
        self.reprompt = Some(text.into());
        self
    }

    pub fn card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    pub fn end_session(mut self, end: bool) -> Self {
        self.end_session = Some(end);
        self
    }

    pub fn build(self) -> Response {
        let should_end_session = self.end_session.or(match (&self.reprompt, &self.speech) {
            (Some(_), _) => Some(false),
            (None, Some(_)) => Some(true),
            (None, None) => None,
        });

        Response {
            output_speech: self.speech.as_deref().map(OutputSpeech::new),
            speech_text: self.speech,
            card: self.card,
            reprompt: self.reprompt.as_deref().map(|text| Reprompt {
                output_speech: OutputSpeech::new(text),
            }),
            reprompt_text: self.reprompt,
            should_end_session,
        }
    }
}

/// Escape the characters SSML treats as markup
fn escape_ssml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Truncate text to the card limit in characters, adding ellipsis if needed
pub fn truncate_for_card(text: &str) -> String {
    if text.char_indices().nth(CARD_CONTENT_LIMIT).is_none() {
        return text.to_string();
    }
    let end = text
        .char_indices()
        .nth(CARD_CONTENT_LIMIT - 3) // Room for "..."
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    format!("{}...", &text[..end])
}
