//! Prompt templates for the study features
//!
//! Each feature is a template that embeds the user's request into an
//! instruction for the generation model. Responses are expected to come
//! back as markdown but are never validated.

/// System context prepended to every conversational turn
pub const SYSTEM_CONTEXT: &str = "You are a helpful Study Assistant powered by AI. \
Your goal is to help students learn effectively. Be concise, clear, and educational \
in your responses. Focus on providing accurate information and useful study strategies.";

/// Summarizer input is cut here to stay under the remote token limit
const MAX_SUMMARY_CHARS: usize = 8000;

/// Quiz difficulty accepted by the quiz generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// Build a conversational prompt carrying the assistant persona
pub fn chat_prompt(message: &str) -> String {
    format!("{}\n\nUser: {}", SYSTEM_CONTEXT, message)
}

/// Build a prompt asking for an explanation of a concept
pub fn explain_prompt(concept: &str) -> String {
    format!(
        r#"Explain the concept of "{}" in a clear, educational way.

Follow these guidelines:
1. Start with a simple definition
2. Explain the core principles
3. Use analogies or examples to make it more understandable
4. Mention any important related concepts
5. Keep your explanation concise but thorough

Format your response using Markdown."#,
        concept
    )
}

/// Build a prompt asking for a multiple-choice quiz
pub fn quiz_prompt(topic: &str, num_questions: usize, difficulty: Difficulty) -> String {
    format!(
        r#"Create a {difficulty} difficulty quiz about "{topic}" with {num_questions} questions.

For each question:
1. Write a clear, specific question
2. Provide multiple choice options (A, B, C, D)
3. Indicate the correct answer
4. Include a brief explanation of why the answer is correct

Format the quiz using Markdown with each question numbered, followed by choices,
then the answer and explanation in a collapsed details section.

Example format:
```
## {topic} Quiz

### Question 1
What is...?
A) Option 1
B) Option 2
C) Option 3
D) Option 4

<details>
<summary>Answer</summary>

**Correct Answer: B**

Explanation: This is correct because...
</details>
```"#,
        difficulty = difficulty.as_str(),
        topic = topic,
        num_questions = num_questions,
    )
}

/// Build a prompt asking for a day-by-day study plan
pub fn plan_prompt(subject: &str, days: u32, hours_per_day: u32, goal: &str) -> String {
    format!(
        r#"Create a {}-day study plan for "{}" with {} hour(s) per day.
The goal is: {}.

Your study plan should:
1. Break down the subject into logical sub-topics
2. Distribute learning across the available days
3. Allocate time for initial learning, practice, and review
4. Suggest specific activities for each study session
5. Recommend resources (general types, not specific titles)
6. Include regular assessments to check understanding

Format the study plan using Markdown with clear headings, days, and activities."#,
        days, subject, hours_per_day, goal
    )
}

/// Build a prompt asking for a summary of study material
///
/// Overlong content is truncated before templating.
pub fn summarize_prompt(content: &str) -> String {
    let content = match content.char_indices().nth(MAX_SUMMARY_CHARS) {
        Some((idx, _)) => &content[..idx],
        None => content,
    };

    format!(
        r#"Summarize the following study material concisely while preserving the key points.
Focus on the main concepts and their relationships.

Use the following format:
1. Main topic and core idea (1-2 sentences)
2. Key points (bullet points)
3. Important relationships or connections
4. Questions to test understanding

Format your response using Markdown.

Content to summarize:
```
{}
```"#,
        content
    )
}

/// Build a prompt asking for study techniques, optionally focused on a topic
pub fn tips_prompt(topic: Option<&str>) -> String {
    match topic {
        Some(topic) => format!(
            r#"Provide evidence-based study techniques and tips for "{}".

Include:
1. 3-5 practical, specific techniques
2. The science behind why each technique works
3. How to implement each technique effectively
4. Common mistakes to avoid

Format your response using Markdown with clear headings and bullet points."#,
            topic
        ),
        None => r#"Provide general evidence-based study techniques that can improve learning effectiveness.

Include:
1. 3-5 practical, specific techniques
2. The science behind why each technique works
3. How to implement each technique effectively
4. Common mistakes to avoid

Format your response using Markdown with clear headings and bullet points."#
            .to_string(),
    }
}
