//! Prompt assembly for claim checking

/// Separator placed between the instruction and the content under review
pub const PROMPT_SEPARATOR: &str = "\n\n";

/// Builds the text sent to the LLM for one chunk or document
pub struct PromptBuilder<'a> {
    instruction: &'a str,
    content: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(instruction: &'a str, content: &'a str) -> Self {
        Self {
            instruction,
            content,
        }
    }

    /// Build the complete prompt: instruction, blank line, content
    pub fn build(&self) -> String {
        let mut prompt =
            String::with_capacity(self.instruction.len() + PROMPT_SEPARATOR.len() + self.content.len());
        prompt.push_str(self.instruction);
        prompt.push_str(PROMPT_SEPARATOR);
        prompt.push_str(self.content);
        prompt
    }
}

/// Instruction used when the caller does not supply one
pub const DEFAULT_INSTRUCTION: &str = r#"You are a fact-checking assistant. Read the text below and list every factual claim it makes that is checkable against public knowledge.

Reply with a single JSON object and nothing else:
{
  "claims": [
    {
      "claim": "the claim, restated in one sentence",
      "quote": "exact words from the text",
      "assessment": "supported | disputed | unverifiable",
      "reason": "one short sentence"
    }
  ]
}

If the text makes no checkable claims, reply with {"claims": []}."#;
