use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiOperation {
    Format,
    Summarize,
    FactCheck,
    Quiz,
    Enhance,
}

impl AiOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiOperation::Format => "format",
            AiOperation::Summarize => "summarize",
            AiOperation::FactCheck => "fact_check",
            AiOperation::Quiz => "quiz",
            AiOperation::Enhance => "enhance",
        }
    }
}

impl std::str::FromStr for AiOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "format" => Ok(AiOperation::Format),
            "summarize" => Ok(AiOperation::Summarize),
            "fact_check" => Ok(AiOperation::FactCheck),
            "quiz" => Ok(AiOperation::Quiz),
            "enhance" => Ok(AiOperation::Enhance),
            _ => Err(format!("Unknown AI operation: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AiRequest {
    pub text: String,
    pub language: String,
    pub operation: AiOperation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiResult {
    pub result: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub additional_data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer.trim().eq_ignore_ascii_case(answer.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>,
    #[serde(default)]
    pub total_questions: usize,
}
