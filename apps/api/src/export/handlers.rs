use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::export::template::render;
use crate::export::templates::{LINKEDIN_TEMPLATE, README_TEMPLATE};
use crate::models::project::Milestone;
use crate::state::AppState;

/// Fallback copy used when the learner has no project or reflections saved.
const DEFAULT_PROJECT_TITLE: &str = "Decentralized Voting App";
const DEFAULT_PROJECT_DESCRIPTION: &str = "A blockchain learning project";
const DEFAULT_LEARNED: &[&str] = &[
    "- How smart contracts work",
    "- How to deploy and interact with them",
    "- How to connect a React frontend to a contract",
];
const DEFAULT_STACK: &[&str] = &["Solidity", "Remix IDE", "Web3.js", "React", "MetaMask"];
const DEFAULT_NEXT_STEPS: &[&str] = &["Add authentication", "Improve the UI", "Deploy to mainnet"];
const DEFAULT_HASHTAGS: &[&str] = &[
    "#100Devs",
    "#Web3",
    "#ProjectBasedLearning",
    "#Blockchain",
    "#Solidity",
];
/// LinkedIn posts only surface the first few reflections.
const MAX_HIGHLIGHTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Readme,
    Linkedin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
    #[serde(default)]
    pub project: Option<ProjectSummary>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    /// Optional template override; the built-in draft for `format` otherwise.
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub text: String,
}

/// POST /api/v1/export
pub async fn handle_export(
    State(_state): State<AppState>,
    Json(req): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, AppError> {
    let context = build_export_context(req.project.as_ref(), &req.milestones);
    let template = match (&req.template, req.format) {
        (Some(custom), _) => custom.as_str(),
        (None, ExportFormat::Readme) => README_TEMPLATE,
        (None, ExportFormat::Linkedin) => LINKEDIN_TEMPLATE,
    };
    Ok(Json(ExportResponse {
        text: render(template, &context),
    }))
}

/// Builds the render context from the learner's saved project and milestones:
/// progress percentage, completed/remaining splits, reflection lines, and the
/// stock copy defaults.
pub fn build_export_context(project: Option<&ProjectSummary>, milestones: &[Milestone]) -> Value {
    let (title, description) = match project {
        Some(p) => (p.title.clone(), p.description.clone()),
        None => (
            DEFAULT_PROJECT_TITLE.to_string(),
            DEFAULT_PROJECT_DESCRIPTION.to_string(),
        ),
    };

    let completed: Vec<&Milestone> = milestones.iter().filter(|m| m.complete).collect();
    let remaining: Vec<&Milestone> = milestones.iter().filter(|m| !m.complete).collect();
    let total = milestones.len();
    let progress = if total > 0 {
        (completed.len() as f64 / total as f64 * 100.0).round() as u64
    } else {
        0
    };

    let learned: Vec<String> = {
        let reflections: Vec<String> = completed
            .iter()
            .filter_map(|m| {
                m.reflection
                    .as_deref()
                    .map(|note| format!("**{}**: {}", m.title, note))
            })
            .collect();
        if reflections.is_empty() {
            DEFAULT_LEARNED.iter().map(|s| s.to_string()).collect()
        } else {
            reflections
        }
    };

    let highlights: Vec<String> = completed
        .iter()
        .take(MAX_HIGHLIGHTS)
        .map(|m| {
            m.reflection
                .clone()
                .unwrap_or_else(|| format!("Completed {}", m.title))
        })
        .collect();

    json!({
        "project": { "title": title, "description": description },
        "titleLower": title.to_lowercase(),
        "progress": progress,
        "completedCount": completed.len(),
        "totalCount": total,
        "completed": completed,
        "remaining": remaining,
        "learned": learned,
        "highlights": highlights,
        "stack": DEFAULT_STACK,
        "nextSteps": DEFAULT_NEXT_STEPS,
        "hashtags": DEFAULT_HASHTAGS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(title: &str, complete: bool, reflection: Option<&str>) -> Milestone {
        Milestone {
            title: title.to_string(),
            description: String::new(),
            complete,
            reflection: reflection.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_context_computes_progress() {
        let milestones = vec![
            milestone("a", true, None),
            milestone("b", true, None),
            milestone("c", false, None),
        ];
        let ctx = build_export_context(None, &milestones);
        assert_eq!(ctx["progress"], 67);
        assert_eq!(ctx["completedCount"], 2);
        assert_eq!(ctx["totalCount"], 3);
    }

    #[test]
    fn test_context_with_no_milestones_is_zero_progress() {
        let ctx = build_export_context(None, &[]);
        assert_eq!(ctx["progress"], 0);
        assert_eq!(ctx["totalCount"], 0);
    }

    #[test]
    fn test_reflections_become_learned_lines() {
        let milestones = vec![milestone("Deploy", true, Some("Gas costs are real"))];
        let ctx = build_export_context(None, &milestones);
        assert_eq!(ctx["learned"][0], "**Deploy**: Gas costs are real");
    }

    #[test]
    fn test_learned_falls_back_to_stock_copy() {
        let ctx = build_export_context(None, &[milestone("a", true, None)]);
        assert_eq!(ctx["learned"][0], "- How smart contracts work");
    }

    #[test]
    fn test_highlights_cap_and_fallback() {
        let milestones = vec![
            milestone("m1", true, Some("note 1")),
            milestone("m2", true, None),
            milestone("m3", true, Some("note 3")),
            milestone("m4", true, Some("note 4")),
        ];
        let ctx = build_export_context(None, &milestones);
        let highlights = ctx["highlights"].as_array().unwrap();
        assert_eq!(highlights.len(), 3);
        assert_eq!(highlights[0], "note 1");
        assert_eq!(highlights[1], "Completed m2");
    }

    #[test]
    fn test_readme_renders_completed_and_remaining_sections() {
        let project = ProjectSummary {
            title: "NFT Marketplace".into(),
            description: "A marketplace".into(),
        };
        let milestones = vec![
            milestone("Learn NFT basics", true, None),
            milestone("Ship it", false, None),
        ];
        let ctx = build_export_context(Some(&project), &milestones);
        let text = render(README_TEMPLATE, &ctx);

        assert!(text.starts_with("# NFT Marketplace"));
        assert!(text.contains("50% complete (1/2 milestones)"));
        assert!(text.contains("- ✅ Learn NFT basics"));
        assert!(text.contains("- ⏳ Ship it"));
        assert!(text.contains("- Solidity"));
        assert!(!text.contains("{{"), "all markers must be substituted");
    }

    #[test]
    fn test_linkedin_renders_lowercased_title_and_hashtags() {
        let project = ProjectSummary {
            title: "NFT Marketplace".into(),
            description: String::new(),
        };
        let ctx = build_export_context(Some(&project), &[milestone("a", true, Some("learned x"))]);
        let text = render(LINKEDIN_TEMPLATE, &ctx);

        assert!(text.contains("I just finished building nft marketplace!"));
        assert!(text.contains("• learned x"));
        assert!(text.contains("#100Devs #Web3"));
        assert!(!text.contains("{{"));
    }
}
