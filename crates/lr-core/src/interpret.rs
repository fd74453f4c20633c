//! Request payload for a narrative interpretation service.
//!
//! The chart summary is framed as a system prompt and the querent's topic is
//! repeated as the user message, in the shape chat-completion APIs accept.
//! Sending the request is left to the caller.

use serde::{Deserialize, Serialize};

use crate::config::Language;
use crate::error::LiurenResult;
use crate::input::Question;

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions framing the conversation.
    System,
    /// The querent.
    User,
    /// The interpreter's reply.
    Assistant,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who is speaking.
    pub role: Role,
    /// Message text.
    pub content: String,
}

/// A complete interpretation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationRequest {
    /// System message followed by the user question.
    pub messages: Vec<Message>,
    /// The system prompt, repeated for services that take it separately.
    pub system_prompt: String,
}

impl InterpretationRequest {
    /// Build a request from the question and rendered chart summary.
    pub fn new(question: &Question, summary: &str, language: Language) -> Self {
        let (system_prompt, user_question) = match language {
            Language::Chinese => (
                format!(
                    "你是一位精通小六壬占卜的大师。请基于以下信息进行解读：\n\
                     1. 用户想要预测的事项：{question}\n\
                     2. 排盘结果信息如下：\n\
                     {summary}\n\
                     \n\
                     请从以下几个方面进行解读：\n\
                     1. 整体吉凶\n\
                     2. 具体解释（从六神、六亲、地支等方面分析）\n\
                     3. 建议（根据分析给出具体可行的建议）"
                ),
                format!("小六壬占卜问题：{question}"),
            ),
            Language::English => (
                format!(
                    "You are a master of Xiao Liu Ren (Six Palaces) divination. \
                     Interpret the following reading:\n\
                     1. The querent's question: {question}\n\
                     2. The chart:\n\
                     {summary}\n\
                     \n\
                     Cover these points:\n\
                     1. Overall fortune\n\
                     2. Detailed reading (beasts, kinship relations, branches)\n\
                     3. Advice (concrete, practical suggestions)"
                ),
                format!("Xiao Liu Ren question: {question}"),
            ),
        };

        Self {
            messages: vec![
                Message {
                    role: Role::System,
                    content: system_prompt.clone(),
                },
                Message {
                    role: Role::User,
                    content: user_question,
                },
            ],
            system_prompt,
        }
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> LiurenResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> LiurenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new("career").unwrap()
    }

    #[test]
    fn system_then_user() {
        let req = InterpretationRequest::new(&question(), "SUMMARY", Language::Chinese);
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, Role::System);
        assert_eq!(req.messages[1].role, Role::User);
        assert_eq!(req.messages[0].content, req.system_prompt);
        assert!(req.system_prompt.contains("用户想要预测的事项：career"));
        assert!(req.system_prompt.contains("排盘结果信息如下：\nSUMMARY\n"));
        assert_eq!(req.messages[1].content, "小六壬占卜问题：career");
    }

    #[test]
    fn english_prompt() {
        let req = InterpretationRequest::new(&question(), "SUMMARY", Language::English);
        assert!(req.system_prompt.contains("The chart:\nSUMMARY\n"));
        assert_eq!(req.messages[1].content, "Xiao Liu Ren question: career");
    }

    #[test]
    fn json_shape() {
        let req = InterpretationRequest::new(&question(), "S", Language::Chinese);
        let value: serde_json::Value = serde_json::from_str(&req.to_json().unwrap()).unwrap();
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert!(value["system_prompt"].is_string());
        let back: InterpretationRequest =
            serde_json::from_str(&req.to_json_pretty().unwrap()).unwrap();
        assert_eq!(back, req);
    }
}
