//! Prompt text sent to the text-generation service.

use super::GenerationRequest;
use crate::dates::format_date;

/// Build the single user message asking for a JSON `{subject, body}` reply.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let inputs = &request.inputs;
    let spice = request.spice;

    let mut prompt = String::from("Generate an out-of-office auto-reply email.\n\nDetails:\n");
    prompt.push_str(&format!("- Name: {}\n", or(&inputs.name, "not provided")));
    prompt.push_str(&format!(
        "- Away: {} to {}\n",
        or(&format_date(&inputs.start_date), "?"),
        or(&format_date(&inputs.end_date), "?")
    ));
    prompt.push_str(&format!("- Reason: {}\n", or(&inputs.reason, "not specified")));
    prompt.push_str(&format!("- Backup contact: {}\n", or(&inputs.backup, "none")));
    prompt.push_str(&format!("- Additional notes: {}\n", or(&inputs.notes, "none")));
    prompt.push_str(&format!("- Tone: {}\n", request.tone.label()));
    prompt.push_str(&format!(
        "- Spice/intensity level: {}/5 ({})\n\n",
        spice.level(),
        spice.label()
    ));

    prompt.push_str(
        "Respond with ONLY valid JSON in this exact format, no other text:\n\
         {\"subject\": \"the email subject line\", \"body\": \"the full message body\"}\n\n\
         Make it creative, memorable, and perfectly match the tone.",
    );
    if spice.level() >= 4 {
        prompt.push_str(" Go bold. Push boundaries. Be unforgettable.");
    }
    if spice.level() <= 2 {
        prompt.push_str(" Keep it restrained and corporate-appropriate.");
    }
    prompt.push_str(" Use the name in the sign-off if provided.");

    prompt
}

fn or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}
