//! Prompt assembly for the answering service.
//!
//! Fixed instructional strings plus two small builders: one folds retrieved
//! search results into a bounded context block, the other wraps the question
//! and context in the literal template handed to the external model.

use crate::search::SearchResult;

/// Most retrieved documents folded into one context block.
pub const CONTEXT_DOCS: usize = 10;

/// Fixed system instruction sent with every question.
pub const SYSTEM_PROMPT: &str =
    "You are an expert on UK Gambling Commission (UKGC) regulations.";

/// Fixed framework-relationship primer that opens every context block.
pub const FRAMEWORK_PRIMER: &str = "\
Framework relationships:
1. LCCP (Licence Conditions and Codes of Practice) - What operators MUST do
2. RTS (Remote Technical Standards) - HOW to implement it technically
3. ISO 27001 (Information Security) - How to do it SECURELY";

/// Primer plus one line per retrieved document, at most [`CONTEXT_DOCS`].
///
/// With no results the block still names the three frameworks so the model
/// knows what it may draw on.
pub fn build_context(results: &[SearchResult]) -> String {
    let mut context = String::from(FRAMEWORK_PRIMER);
    context.push_str("\n\n");

    if results.is_empty() {
        context.push_str("Available regulatory frameworks: LCCP, RTS, ISO 27001");
        return context;
    }

    context.push_str("Relevant regulatory documents:\n\n");
    for result in results.iter().take(CONTEXT_DOCS) {
        if result.snippet.is_empty() {
            context.push_str(&format!(
                "{} {}: {}\n",
                result.framework.tag(),
                result.id,
                result.title
            ));
        } else {
            context.push_str(&format!(
                "{} {}: {} - {}\n",
                result.framework.tag(),
                result.id,
                result.title,
                result.snippet
            ));
        }
    }
    context
}

/// The literal user-message template wrapping question and context.
pub fn build_question_prompt(question: &str, context: &str) -> String {
    format!(
        "Based on the following regulatory documents, please answer this question:\n\n\
         QUESTION: {}\n\n\
         REGULATORY CONTEXT:\n{}\n\n\
         Please provide a clear answer.",
        question, context
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Framework;
    use crate::search::Relevance;

    fn result(id: &str, title: &str, snippet: &str) -> SearchResult {
        SearchResult {
            framework: Framework::Lccp,
            id: id.to_string(),
            title: title.to_string(),
            snippet: snippet.to_string(),
            relevance: Relevance::High,
            filename: "lccp-test.json".to_string(),
        }
    }

    #[test]
    fn context_opens_with_primer() {
        let context = build_context(&[]);
        assert!(context.starts_with(FRAMEWORK_PRIMER));
        assert!(context.contains("Available regulatory frameworks"));
    }

    #[test]
    fn context_caps_documents() {
        let results: Vec<SearchResult> = (0..15)
            .map(|i| result(&format!("1.{i}"), &format!("Title {i}"), ""))
            .collect();
        let context = build_context(&results);
        assert!(context.contains("LCCP 1.9: Title 9"));
        assert!(!context.contains("LCCP 1.10: Title 10"));
    }

    #[test]
    fn context_lines_carry_snippet_when_present() {
        let context = build_context(&[result("4.1.1", "Segregation", "Funds held separately")]);
        assert!(context.contains("LCCP 4.1.1: Segregation - Funds held separately"));
    }

    #[test]
    fn question_prompt_embeds_both_blocks() {
        let prompt = build_question_prompt("What about deposits?", "CTX");
        assert!(prompt.contains("QUESTION: What about deposits?"));
        assert!(prompt.contains("REGULATORY CONTEXT:\nCTX"));
        assert!(prompt.ends_with("Please provide a clear answer."));
    }
}
