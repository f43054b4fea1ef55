// Prompt constants for resume generation.

/// Placeholder replaced with the extracted profile text.
pub const PROFILE_TEXT_PLACEHOLDER: &str = "{profile_text}";

/// Resume generation prompt template. Replace `{profile_text}` before sending.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Generate an HTML resume for the following details, following this structure:
- Name in <h1> or <h2> and left-aligned.
- A line like a footer to separate sections.
- Each section header will have a footer above and below it.
- The content's important words should be bold.
- Education section:
  - The section header should be bold and smaller than the name.
  - The alma mater should be in bold, while grades and other content should not be bold.
- Achievements section:
  - The section header should be bold.
  - Each achievement should have a subheading (name of the award/achievement) in bold, followed by a half-line description in normal text on the same line.
  - Bullet each achievement.
- Experience section:
  - The section header should be bold.
  - Each job/experience should have a subheading (company/role) in bold.
  - Bullet points for each responsibility/accomplishment, with each point as a complete line.
- Projects section:
  - Similar to the experience section.
  - Subheading for each project in bold, followed by bullet points.
  - If no projects found, do not include this section.

Please don't add any extra content apart from the pdf data, you may use the description from the pdf wherever required. Also, add styling as well for grayscale-blue theme and sans-serif font.

Return a single complete HTML document starting with <html> and ending with </html>.

Here's the LinkedIn content to generate the resume from: {profile_text}."#;
