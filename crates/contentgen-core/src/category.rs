//! Content categories: the single table every generator reads from.
//!
//! Wire keys are lowercase (`"templates"`, `"code"`, ...). Unknown keys never error;
//! callers fall back to the generic strings exposed here.

use serde::{Deserialize, Serialize};

/// Instruction used when the category key is not recognised.
pub const GENERIC_INSTRUCTION: &str = "Create valuable content in this category.";

/// Title used when the category key is not recognised.
pub const GENERIC_TITLE: &str = "Content Generation";

/// Fixed set of content types a user can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Templates,
    Documents,
    Images,
    Videos,
    Puzzles,
    Quizzes,
    Games,
    Code,
    Audio,
    Ebooks,
    Designs,
    Courses,
    Automation,
}

/// Icon family shown next to a category in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Document,
    Image,
    Video,
    Code,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Templates,
        Category::Documents,
        Category::Images,
        Category::Videos,
        Category::Puzzles,
        Category::Quizzes,
        Category::Games,
        Category::Code,
        Category::Audio,
        Category::Ebooks,
        Category::Designs,
        Category::Courses,
        Category::Automation,
    ];

    /// Parse a wire key. Surrounding whitespace and case are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::Templates => "templates",
            Category::Documents => "documents",
            Category::Images => "images",
            Category::Videos => "videos",
            Category::Puzzles => "puzzles",
            Category::Quizzes => "quizzes",
            Category::Games => "games",
            Category::Code => "code",
            Category::Audio => "audio",
            Category::Ebooks => "ebooks",
            Category::Designs => "designs",
            Category::Courses => "courses",
            Category::Automation => "automation",
        }
    }

    /// Dashboard heading for the category workspace.
    pub fn title(self) -> &'static str {
        match self {
            Category::Templates => "Document Templates",
            Category::Documents => "Document Writing",
            Category::Images => "Image Generation",
            Category::Videos => "Video Content",
            Category::Puzzles => "Puzzle Creation",
            Category::Quizzes => "Quiz Builder",
            Category::Games => "Game Development",
            Category::Code => "Code Generation",
            Category::Audio => "Audio Content",
            Category::Ebooks => "E-book Creation",
            Category::Designs => "Design Assets",
            Category::Courses => "Course Materials",
            Category::Automation => "Automation Scripts",
        }
    }

    pub fn icon(self) -> IconKind {
        match self {
            Category::Images | Category::Designs => IconKind::Image,
            Category::Videos => IconKind::Video,
            Category::Games | Category::Code | Category::Automation => IconKind::Code,
            _ => IconKind::Document,
        }
    }

    /// Provider instruction fragment appended to every assembled user prompt.
    pub fn instruction(self) -> &'static str {
        match self {
            Category::Templates => "Create professional document templates, forms, or layouts that are immediately usable and customizable.",
            Category::Documents => "Write clear, well-structured documents such as reports, proposals, or guides with headings, summaries, and actionable sections.",
            Category::Images => "Generate detailed descriptions for AI image generation, including style, composition, colors, and technical specifications.",
            Category::Videos => "Create video scripts, storyboards, or content outlines with scene descriptions, dialogue, and production notes.",
            Category::Puzzles => "Design engaging brain teasers, logic puzzles, or problem-solving challenges with solutions and difficulty levels.",
            Category::Quizzes => "Build comprehensive quizzes with questions, multiple choice answers, explanations, and scoring systems.",
            Category::Games => "Create game concepts, rules, mechanics, or simple interactive experiences with clear instructions.",
            Category::Code => "Generate functional code scripts, utilities, or tools with documentation, comments, and usage examples.",
            Category::Audio => "Create audio content scripts, podcast outlines, music composition guides, or sound effect descriptions.",
            Category::Ebooks => "Write comprehensive guides, stories, or instructional content with chapters, sections, and actionable insights.",
            Category::Designs => "Create design specifications, UI/UX guidelines, branding elements, or visual asset descriptions.",
            Category::Courses => "Develop structured learning materials with lessons, exercises, assessments, and learning objectives.",
            Category::Automation => "Build automation workflows, scripts, or bot configurations with step-by-step implementation guides.",
        }
    }

    /// Base requirement line used by the M3 stub.
    pub fn m3_requirement(self) -> &'static str {
        match self {
            Category::Templates => "Create professional document templates with intelligent structure and context-aware content.",
            Category::Documents => "Write structured documents with coherent argumentation and context-aware detail.",
            Category::Images => "Generate detailed visual descriptions with memory-enhanced context and creative insights.",
            Category::Videos => "Develop comprehensive video content with narrative flow and engaging storytelling.",
            Category::Puzzles => "Design brain teasers with adaptive difficulty and cognitive engagement.",
            Category::Quizzes => "Build assessment tools with personalized learning paths and knowledge verification.",
            Category::Games => "Create interactive experiences with dynamic storytelling and user engagement.",
            Category::Code => "Generate functional code with intelligent patterns and best practices.",
            Category::Audio => "Develop audio content with emotional resonance and narrative depth.",
            Category::Ebooks => "Write comprehensive guides with structured knowledge and practical applications.",
            Category::Designs => "Create design specifications with user-centered approaches and modern aesthetics.",
            Category::Courses => "Develop learning materials with adaptive progression and skill development.",
            Category::Automation => "Build workflow solutions with intelligent optimization and efficiency.",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Instruction fragment for a raw wire key, generic when unknown.
pub fn instruction_for(key: &str) -> &'static str {
    Category::from_key(key)
        .map(Category::instruction)
        .unwrap_or(GENERIC_INSTRUCTION)
}

/// Dashboard title for a raw wire key, generic when unknown.
pub fn title_for(key: &str) -> &'static str {
    Category::from_key(key)
        .map(Category::title)
        .unwrap_or(GENERIC_TITLE)
}

/// Uppercases the first character (`"code"` -> `"Code"`).
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
