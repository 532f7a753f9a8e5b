//! Portfolio content the assistant answers from.
//!
//! The profile is the fixed body of facts behind the chat panel: who Deb
//! is, what he works with, what he has built. It is data, not behavior;
//! the TUI renders it and the generator grounds its answers in it via
//! [`Profile::system_prompt`].

use std::fmt::Write;

/// A named group of related skills.
#[derive(Debug, Clone)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}

/// A portfolio project with a one-line summary.
#[derive(Debug, Clone)]
pub struct Project {
    pub title: String,
    pub summary: String,
}

/// One experience entry.
#[derive(Debug, Clone)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub summary: String,
}

/// The portfolio owner's content.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub skill_groups: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Deb Barman".into(),
            tagline: "AI automation, complex Python development, and creative direction.".into(),
            skill_groups: vec![
                SkillGroup {
                    name: "Technical".into(),
                    skills: vec![
                        "Python".into(),
                        "TypeScript".into(),
                        "FastAPI".into(),
                        "SQL".into(),
                        "Automation Scripting".into(),
                    ],
                },
                SkillGroup {
                    name: "AI & Gen AI".into(),
                    skills: vec![
                        "LLM Integration".into(),
                        "Prompt Engineering".into(),
                        "AI Workflow Automation".into(),
                        "Gen AI Tooling".into(),
                    ],
                },
                SkillGroup {
                    name: "Design & Cognitive".into(),
                    skills: vec![
                        "UI/UX Design".into(),
                        "Creative Direction".into(),
                        "Systematic Problem Solving".into(),
                    ],
                },
            ],
            projects: vec![
                Project {
                    title: "Portfolio Assistant".into(),
                    summary: "This site's embedded AI chat, answering visitor questions in character.".into(),
                },
                Project {
                    title: "AI Workflow Suite".into(),
                    summary: "Python pipelines that automate research, drafting, and QA with LLMs.".into(),
                },
                Project {
                    title: "Generative Art Pipeline".into(),
                    summary: "Prompt-driven image generation with curated post-processing.".into(),
                },
            ],
            experience: vec![
                Experience {
                    role: "AI Developer".into(),
                    organization: "Freelance".into(),
                    summary: "Ships AI-integrated tools end to end, from prototype to production.".into(),
                },
                Experience {
                    role: "Python Developer".into(),
                    organization: "Independent projects".into(),
                    summary: "Builds automation and data tooling with a focus on rapid execution.".into(),
                },
            ],
        }
    }
}

impl Profile {
    /// Render the profile into the generator's system instruction.
    ///
    /// The generator receives only the visitor's latest message, so all
    /// grounding lives here rather than in conversation history.
    pub fn system_prompt(&self) -> String {
        let mut prompt = String::new();

        let _ = writeln!(
            prompt,
            "You are the AI assistant on {}'s portfolio site. Visitors ask about his skills, projects, and experience; answer on his behalf, in the third person.",
            self.name
        );
        let _ = writeln!(prompt, "\nAbout {}: {}", self.name, self.tagline);

        let _ = writeln!(prompt, "\nSkills:");
        for group in &self.skill_groups {
            let _ = writeln!(prompt, "- {}: {}", group.name, group.skills.join(", "));
        }

        let _ = writeln!(prompt, "\nProjects:");
        for project in &self.projects {
            let _ = writeln!(prompt, "- {}: {}", project.title, project.summary);
        }

        let _ = writeln!(prompt, "\nExperience:");
        for entry in &self.experience {
            let _ = writeln!(prompt, "- {} ({}): {}", entry.role, entry.organization, entry.summary);
        }

        prompt.push_str(
            "\nKeep answers short and friendly (a few sentences). Ground every answer in the facts above. If asked something unrelated to Deb or his work, politely steer the conversation back to the portfolio.",
        );

        prompt
    }
}
