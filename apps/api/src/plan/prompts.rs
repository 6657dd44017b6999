// All LLM prompt constants for plan generation.

/// System prompt for project-plan generation — enforces JSON-only output
/// matching the plan schema the frontend persists.
pub const PLAN_SYSTEM: &str = r#"You are an expert project generator for blockchain development learning. Create a complete project plan tailored for coding bootcamp students and self-taught developers.

Generate a project that:
- Is achievable in 2-4 weeks
- Teaches real blockchain/Web3 skills
- Has 6 specific, actionable milestones
- Includes smart contract development
- Has a clear portfolio value
- Is beginner-friendly but impressive

Return JSON format:
{
  "title": "Project Name",
  "description": "Brief project description",
  "milestones": [
    {
      "title": "Milestone title",
      "description": "What the user will learn/do",
      "complete": false
    }
  ],
  "learningGoals": [
    "Specific learning objective 1",
    "Specific learning objective 2",
    "Specific learning objective 3",
    "Specific learning objective 4"
  ],
  "skillsToMaster": [
    "Technology/Skill 1",
    "Technology/Skill 2",
    "Technology/Skill 3",
    "Technology/Skill 4",
    "Technology/Skill 5"
  ]
}"#;

/// Builds the user prompt for a plan request. `generate_new` asks for a plan
/// unlike the stock examples so "give me another one" does not loop.
pub fn build_user_prompt(goal: &str, experience: &str, generate_new: bool) -> String {
    let variant = if generate_new {
        "completely new and different"
    } else {
        "tailored"
    };
    let focus = if goal.trim().is_empty() {
        "Choose an engaging project that teaches valuable skills.".to_string()
    } else {
        format!("Focus on: {goal}")
    };
    let uniqueness = if generate_new {
        " Make it unique and different from common projects like voting apps, NFT marketplaces, or DeFi protocols."
    } else {
        ""
    };

    format!("Generate a {variant} blockchain project for {experience} developers. {focus}{uniqueness}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompt_includes_goal() {
        let prompt = build_user_prompt("yield farming", "beginner", false);
        assert!(prompt.contains("Focus on: yield farming"));
        assert!(prompt.contains("tailored"));
        assert!(prompt.contains("beginner"));
    }

    #[test]
    fn test_user_prompt_without_goal_suggests_engaging_project() {
        let prompt = build_user_prompt("", "mid", false);
        assert!(prompt.contains("Choose an engaging project"));
    }

    #[test]
    fn test_generate_new_asks_for_uniqueness() {
        let prompt = build_user_prompt("", "beginner", true);
        assert!(prompt.contains("completely new and different"));
        assert!(prompt.contains("unique and different from common projects"));
    }
}
