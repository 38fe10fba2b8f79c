//! Prompt construction for every generation endpoint.
//!
//! Prompts are plain strings: list fields are joined with a separator that
//! depends on the operation, then embedded into an English or Spanish template.
//! Building a prompt never fails; empty lists simply leave the slot empty.

use crate::services::dispatcher::Language;

const COMMENT_SEPARATOR: &str = " | ";
const LIST_SEPARATOR: &str = ", ";
const SUMMARY_SEPARATOR: &str = " ";
const SUMMARY_STAGE_SEPARATOR: &str = " \n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Reviews joined as-is, no template.
    Summarize,
    GenerateFromComments,
    GeneratePositive,
    GenerateNegative,
    /// First stage of summarize-and-generate.
    SummarizeStage,
    /// Second stage of summarize-and-generate; the single text is the summary.
    GenerateFromSummary,
}

impl PromptKind {
    pub fn separator(self) -> &'static str {
        match self {
            PromptKind::Summarize => SUMMARY_SEPARATOR,
            PromptKind::GenerateFromComments => COMMENT_SEPARATOR,
            PromptKind::GeneratePositive | PromptKind::GenerateNegative => LIST_SEPARATOR,
            PromptKind::SummarizeStage | PromptKind::GenerateFromSummary => {
                SUMMARY_STAGE_SEPARATOR
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    /// Only read by the positive/negative templates.
    pub product_name: &'a str,
    pub texts: &'a [String],
}

impl<'a> PromptInput<'a> {
    pub fn texts(texts: &'a [String]) -> Self {
        Self {
            product_name: "",
            texts,
        }
    }

    pub fn product(product_name: &'a str, texts: &'a [String]) -> Self {
        Self {
            product_name,
            texts,
        }
    }
}

pub fn build_prompt(kind: PromptKind, language: Language, input: PromptInput<'_>) -> String {
    let joined = input.texts.join(kind.separator());
    let product = input.product_name;

    match (kind, language) {
        (PromptKind::Summarize, _) => joined,
        (PromptKind::GenerateFromComments, Language::English) => {
            format!("Generate a product review based on these comments: {}", joined)
        }
        (PromptKind::GenerateFromComments, Language::Spanish) => {
            format!("Genera una reseña de producto basada en estos comentarios: {}", joined)
        }
        (PromptKind::GeneratePositive, Language::English) => format!(
            "Write a positive review for {}. Highlight these features: {}.",
            product, joined
        ),
        (PromptKind::GeneratePositive, Language::Spanish) => format!(
            "Escribe una reseña positiva para {}. Destaca estas características: {}.",
            product, joined
        ),
        (PromptKind::GenerateNegative, Language::English) => format!(
            "Write a negative review for {}. Mention these issues: {}.",
            product, joined
        ),
        (PromptKind::GenerateNegative, Language::Spanish) => format!(
            "Escribe una reseña negativa para {}. Menciona estos problemas: {}.",
            product, joined
        ),
        (PromptKind::SummarizeStage, Language::English) => {
            format!("Summarize the following product reviews: {}", joined)
        }
        (PromptKind::SummarizeStage, Language::Spanish) => {
            format!("Resume las siguientes reseñas de productos: {}", joined)
        }
        (PromptKind::GenerateFromSummary, Language::English) => {
            format!("Write a product review based on this summary: {}", joined)
        }
        (PromptKind::GenerateFromSummary, Language::Spanish) => {
            format!("Escribe una reseña de producto basada en este resumen: {}", joined)
        }
    }
}
