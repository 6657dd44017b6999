use serde::{Deserialize, Serialize};

/// A single project milestone. `reflection` is a learner-written note that
/// the frontend attaches when exporting; plan generation never sets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
}

/// A generated project plan. Field names stay camelCase on the wire to match
/// what the frontend stores in local storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPlan {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub learning_goals: Vec<String>,
    #[serde(default)]
    pub skills_to_master: Vec<String>,
}

impl ProjectPlan {
    /// Freshly generated milestones always start incomplete, whatever the
    /// model claimed.
    pub fn normalize(mut self) -> Self {
        for milestone in &mut self.milestones {
            milestone.complete = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_clears_complete_flags() {
        let plan: ProjectPlan = serde_json::from_str(
            r#"{
                "title": "T",
                "description": "D",
                "milestones": [
                    {"title": "a", "description": "", "complete": true},
                    {"title": "b", "description": "", "complete": false}
                ]
            }"#,
        )
        .unwrap();
        let plan = plan.normalize();
        assert!(plan.milestones.iter().all(|m| !m.complete));
    }

    #[test]
    fn test_plan_serializes_camel_case() {
        let plan = ProjectPlan {
            title: "T".into(),
            description: "D".into(),
            milestones: vec![],
            learning_goals: vec!["g".into()],
            skills_to_master: vec!["s".into()],
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert!(json.get("learningGoals").is_some());
        assert!(json.get("skillsToMaster").is_some());
    }
}
