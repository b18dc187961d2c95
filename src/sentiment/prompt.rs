//! Prompt construction
//!
//! Two prompt variants exist. Asking for a rationale changes both the
//! instructions and the generation budget, so each variant carries its own
//! `max_tokens` and `temperature`.

use crate::llm::Message;

const LABEL_SYSTEM_PROMPT: &str = r#"Anda adalah sistem analisis sentimen yang sangat akurat. Tugas Anda adalah menganalisis sentimen dari jawaban terhadap pertanyaan yang diberikan.

Berdasarkan konteks pertanyaan dan jawaban, tentukan sentimen jawaban tersebut:
- Positif: Jawaban menunjukkan emosi atau pandangan yang baik, puas, senang, atau mendukung
- Negatif: Jawaban menunjukkan emosi atau pandangan yang buruk, tidak puas, kecewa, atau menolak
- Netral: Jawaban objektif, tidak menunjukkan emosi khusus, atau seimbang

Respons Anda harus dalam format JSON yang valid:
{"sentiment": "Positif"} atau {"sentiment": "Negatif"} atau {"sentiment": "Netral"}

Hanya gunakan kata: Positif, Negatif, atau Netral."#;

const REASONING_SYSTEM_PROMPT: &str = r#"Anda adalah sistem analisis sentimen yang sangat akurat dan dapat memberikan penjelasan. Tugas Anda adalah menganalisis sentimen dari jawaban terhadap pertanyaan yang diberikan, beserta alasan analisis tersebut.

Berdasarkan konteks pertanyaan dan jawaban, tentukan sentimen jawaban tersebut:
- Positif: Jawaban menunjukkan emosi atau pandangan yang baik, puas, senang, atau mendukung
- Negatif: Jawaban menunjukkan emosi atau pandangan yang buruk, tidak puas, kecewa, atau menolak
- Netral: Jawaban objektif, tidak menunjukkan emosi khusus, atau seimbang

Respons Anda harus dalam format JSON yang valid dengan penjelasan:
{
  "sentiment": "Positif",
  "reasoning": "Penjelasan mengapa sentimen ini dipilih, kata-kata kunci yang mendukung, dan konteks yang relevan"
}

Hanya gunakan kata: Positif, Negatif, atau Netral untuk sentiment.
Berikan penjelasan yang jelas dan informatif dalam bahasa Indonesia untuk reasoning."#;

/// Prompt variant, selected by whether a rationale was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    /// Label only, deterministic
    LabelOnly,
    /// Label plus a short rationale
    WithReasoning,
}

impl PromptMode {
    pub fn new(want_reasoning: bool) -> Self {
        if want_reasoning {
            PromptMode::WithReasoning
        } else {
            PromptMode::LabelOnly
        }
    }

    pub fn wants_reasoning(&self) -> bool {
        matches!(self, PromptMode::WithReasoning)
    }

    /// Output token budget for this variant
    pub fn max_tokens(&self) -> u32 {
        match self {
            PromptMode::LabelOnly => 100,
            PromptMode::WithReasoning => 300,
        }
    }

    /// Sampling temperature for this variant
    pub fn temperature(&self) -> f64 {
        match self {
            PromptMode::LabelOnly => 0.0,
            PromptMode::WithReasoning => 0.1,
        }
    }

    fn system_prompt(&self) -> &'static str {
        match self {
            PromptMode::LabelOnly => LABEL_SYSTEM_PROMPT,
            PromptMode::WithReasoning => REASONING_SYSTEM_PROMPT,
        }
    }

    fn instruction(&self) -> &'static str {
        match self {
            PromptMode::LabelOnly => "Analisis sentimen jawaban tersebut berdasarkan konteks pertanyaan.",
            PromptMode::WithReasoning => {
                "Analisis sentimen jawaban tersebut berdasarkan konteks pertanyaan dan berikan penjelasan lengkap."
            }
        }
    }
}

/// Build the `[system, user]` message pair for a question/answer.
///
/// Text is embedded verbatim.
pub fn build_messages(question: &str, answer: &str, mode: PromptMode) -> [Message; 2] {
    let user_prompt = format!(
        "Pertanyaan: {}\n\nJawaban: {}\n\n{}",
        question,
        answer,
        mode.instruction()
    );

    [Message::system(mode.system_prompt()), Message::user(user_prompt)]
}
