//! Chat prompt preparation for an external text-generation service.
//!
//! Only the request text is built here; sending it is left to the caller.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::error::SajuError;
use crate::four_pillars::FourPillars;

/// System message used when no override is configured.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "너는 명리학 전문가야. 간지 정보를 바탕으로 성격과 궁합을 논리적으로 분석해줘.";

const USER_INTRO: &str =
    "아래 사주팔자를 기반으로, 사용자의 질문에 대해 명리학 전문가로서 해석해줘.";

/// Prompt settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    /// System message establishing the interpreter's role.
    pub system: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            system: DEFAULT_SYSTEM_PROMPT.to_owned(),
        }
    }
}

/// Speaker of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One message in chat-completion format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChatMessage<'a> {
    pub role: Role,
    pub content: &'a str,
}

/// System and user messages for one question about a Four Pillars record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

impl ChatPrompt {
    /// Build the prompt. The question is trimmed and must not be empty.
    pub fn new(
        config: &PromptConfig,
        pillars: &FourPillars,
        question: &str,
    ) -> Result<Self, SajuError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(SajuError::EmptyQuestion);
        }
        let user = format!("{USER_INTRO}\n\n사주팔자:\n{pillars}\n\n질문:\n{question}");
        Ok(Self {
            system: config.system.clone(),
            user,
        })
    }

    /// Messages in the order chat APIs expect.
    pub fn messages(&self) -> [ChatMessage<'_>; 2] {
        [
            ChatMessage {
                role: Role::System,
                content: &self.system,
            },
            ChatMessage {
                role: Role::User,
                content: &self.user,
            },
        ]
    }
}

impl Display for ChatPrompt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[system]\n{}\n\n[user]\n{}", self.system, self.user)
    }
}
