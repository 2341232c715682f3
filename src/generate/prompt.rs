//! Prompt Construction
//!
//! Turns a raw content request plus an audience profile into the final prompt
//! handed to providers. Pure string assembly; no I/O.

use crate::types::GenerationRequest;

/// Build the provider prompt for a request.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let audience = &request.audience;
    format!(
        "Create engaging {platform_lower} content for the following request:\n\
         \n\
         Request: {prompt}\n\
         \n\
         Target Audience:\n\
         - Age: {age}\n\
         - Type: {persona}\n\
         - Preferred tone: {tone}\n\
         \n\
         Platform: {platform}\n\
         \n\
         Requirements:\n\
         - Write in {tone_lower} tone\n\
         - Optimize for {platform} platform constraints\n\
         - Target {persona} audience ({age} age group)\n\
         - Make it engaging and shareable\n\
         - Keep it concise and impactful\n\
         \n\
         Generate only the final content without any meta-commentary or explanations.",
        platform_lower = request.target_platform.to_lowercase(),
        prompt = request.prompt,
        age = audience.age_group,
        persona = audience.persona_type,
        tone = audience.tone,
        platform = request.target_platform,
        tone_lower = audience.tone.to_lowercase(),
    )
}

/// Append the lexical-diversity cue used for the secondary A/B variant.
pub fn with_alternative_cue(prompt: &str) -> String {
    format!("{}\n\n(alternative version)", prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AudienceProfile;

    fn request() -> GenerationRequest {
        GenerationRequest {
            prompt: "Announce the v2 launch".to_string(),
            target_platform: "LinkedIn".to_string(),
            audience: AudienceProfile {
                profile_name: "Startup founders".to_string(),
                age_group: "25-40".to_string(),
                persona_type: "founder".to_string(),
                tone: "Professional".to_string(),
            },
            temperature: 0.7,
            provider: "gemini".to_string(),
        }
    }

    #[test]
    fn test_prompt_carries_request_and_audience() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Request: Announce the v2 launch"));
        assert!(prompt.contains("- Age: 25-40"));
        assert!(prompt.contains("- Type: founder"));
        assert!(prompt.contains("- Preferred tone: Professional"));
        assert!(prompt.contains("Platform: LinkedIn"));
    }

    #[test]
    fn test_prompt_lowercases_where_expected() {
        let prompt = build_prompt(&request());
        assert!(prompt.starts_with("Create engaging linkedin content"));
        assert!(prompt.contains("Write in professional tone"));
    }

    #[test]
    fn test_alternative_cue_appended() {
        let base = build_prompt(&request());
        let alt = with_alternative_cue(&base);
        assert!(alt.starts_with(&base));
        assert!(alt.ends_with("(alternative version)"));
    }
}
