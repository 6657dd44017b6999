//! Built-in export templates, rendered through `export::template`.
//!
//! These mirror the drafts the frontend previews: a README for the project
//! repo and a LinkedIn post. Callers may override them with a custom template
//! in the export request.

/// README draft. Context keys: `project.{title,description}`, `progress`,
/// `completedCount`, `totalCount`, `completed`, `remaining`, `learned`,
/// `stack`, `nextSteps`.
pub const README_TEMPLATE: &str = "# {{project.title}} 🗳️

{{project.description}}

## Progress
{{progress}}% complete ({{completedCount}}/{{totalCount}} milestones)

## Completed Milestones
{{#each completed}}- ✅ {{this.title}}
{{/each}}
## Remaining Milestones
{{#each remaining}}- ⏳ {{this.title}}
{{/each}}
## What I Learned
{{#each learned}}{{this}}
{{/each}}
## Built With
{{#each stack}}- {{this}}
{{/each}}
## Next Steps
{{#each nextSteps}}- {{this}}
{{/each}}
![Screenshot](screenshot.png)";

/// LinkedIn post draft. Context keys: `titleLower`, `completedCount`,
/// `totalCount`, `progress`, `highlights`, `nextSteps`, `hashtags`.
pub const LINKEDIN_TEMPLATE: &str = "I just finished building {{titleLower}}! 🚀

Completed {{completedCount}}/{{totalCount}} milestones ({{progress}}% done).

Here's what I learned:
{{#each highlights}}• {{this}}
{{/each}}
This project taught me:
• How smart contracts work in practice
• How to deploy and interact with them
• How to connect a React frontend to a contract

Next, I want to:
{{#each nextSteps}}• {{this}}
{{/each}}
{{#each hashtags}}{{this}} {{/each}}";
