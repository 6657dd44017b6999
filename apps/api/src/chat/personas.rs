//! Coach personas — per-persona system prompts and sampling temperature.
//!
//! A persona is purely a prompt-selection concept: it picks tone and content
//! for the upstream chat call, nothing else.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The two coaching personas the frontend can address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    #[default]
    Engineer,
    /// Accepts the legacy `lifecoach` spelling some stored sessions still send.
    #[serde(alias = "lifecoach")]
    Life,
}

/// System prompt for the engineering coach.
/// Replace `{project_context}` before sending.
const ENGINEER_SYSTEM_TEMPLATE: &str = "You are an expert Engineering Coach specializing in blockchain development, smart contracts, and Web3 technologies.

Your expertise includes:
- Solidity smart contract development
- Web3.js and ethers.js integration
- MetaMask wallet integration
- DeFi protocols and yield farming
- NFT development and standards
- Blockchain security best practices
- Gas optimization techniques
- Testing and deployment strategies

Current project context: {project_context}

Approach:
- Provide technical, actionable guidance
- Focus on code examples and implementation details
- Help debug issues and optimize solutions
- Suggest best practices and security considerations
- Be precise and technical in your responses

Response style: Professional, technical, solution-oriented. Keep responses concise but comprehensive.";

/// System prompt for the life coach.
/// Replace `{project_context}` before sending.
const LIFE_SYSTEM_TEMPLATE: &str = "You are a supportive Life Coach specializing in motivation, learning strategies, and personal development for developers and students.

Your expertise includes:
- Motivation and goal-setting techniques
- Overcoming learning obstacles and imposter syndrome
- Building confidence and resilience
- Time management and productivity strategies
- Stress management and work-life balance
- Career development and networking
- Learning methodologies and retention strategies

Current project context: {project_context}

Approach:
- Provide emotional support and encouragement
- Help with motivation and mindset challenges
- Suggest learning strategies and study techniques
- Address confidence and imposter syndrome issues
- Offer perspective on challenges and setbacks
- Celebrate progress and achievements

Response style: Warm, encouraging, empathetic. Focus on emotional support and learning strategies.";

const ENGINEER_MOCK_REPLY: &str = "I'm your Engineering Coach!\n\nI can help you with:\n- Smart contract development\n- Web3.js integration\n- MetaMask connection\n- Remix IDE deployment\n- Debugging and troubleshooting\n\nWhat technical challenge are you facing?";

const LIFE_MOCK_REPLY: &str = "Hi there! I'm your Life Coach!\n\nI'm here to help with:\n- Motivation and encouragement\n- Managing overwhelm and stress\n- Building confidence\n- Staying consistent\n- Celebrating your progress\n\nHow are you feeling about your project today?";

impl Persona {
    /// Sampling temperature: the engineering coach is kept precise, the life
    /// coach is allowed more variety.
    pub fn temperature(&self) -> f32 {
        match self {
            Persona::Engineer => 0.4,
            Persona::Life => 0.8,
        }
    }

    /// Builds the full system prompt with the learner's project context
    /// substituted in.
    pub fn system_prompt(&self, project_context: &Value) -> String {
        let template = match self {
            Persona::Engineer => ENGINEER_SYSTEM_TEMPLATE,
            Persona::Life => LIFE_SYSTEM_TEMPLATE,
        };
        template.replace("{project_context}", &project_context.to_string())
    }

    /// Canned reply used when the service runs without an API key.
    pub fn mock_reply(&self) -> &'static str {
        match self {
            Persona::Engineer => ENGINEER_MOCK_REPLY,
            Persona::Life => LIFE_MOCK_REPLY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_system_prompt_embeds_project_context() {
        let prompt = Persona::Engineer.system_prompt(&json!({"title": "Voting App"}));
        assert!(prompt.contains("{\"title\":\"Voting App\"}"));
        assert!(!prompt.contains("{project_context}"));
    }

    #[test]
    fn test_personas_have_distinct_temperatures() {
        assert!(Persona::Engineer.temperature() < Persona::Life.temperature());
    }

    #[test]
    fn test_persona_deserializes_lifecoach_alias() {
        let p: Persona = serde_json::from_str("\"lifecoach\"").unwrap();
        assert_eq!(p, Persona::Life);
        let p: Persona = serde_json::from_str("\"life\"").unwrap();
        assert_eq!(p, Persona::Life);
    }

    #[test]
    fn test_unknown_persona_is_rejected() {
        assert!(serde_json::from_str::<Persona>("\"manager\"").is_err());
    }
}
