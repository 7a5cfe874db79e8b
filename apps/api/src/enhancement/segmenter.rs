//! Response Segmenter — recovers the summary, improved bullets and suggested
//! skills from the model's free-text reply.
//!
//! The model is asked to follow an exact template, but replies drift: headers lose
//! their colon, bullets switch between `-` and `•`. Segmentation is therefore
//! forgiving and total. A malformed or empty reply yields three empty lists.
//!
//! Sections are found with a single linear scan over line boundaries. A line is a
//! header boundary when `is_section_header` holds for it.

use serde::{Deserialize, Serialize};

/// The three sections the model is instructed to produce, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    ImprovedBullets,
    SuggestedSkills,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::Summary,
        Section::ImprovedBullets,
        Section::SuggestedSkills,
    ];

    /// Canonical colon-suffixed label, e.g. `SUMMARY:`.
    pub fn label(self) -> &'static str {
        match self {
            Section::Summary => "SUMMARY:",
            Section::ImprovedBullets => "IMPROVED BULLETS:",
            Section::SuggestedSkills => "SUGGESTED SKILLS:",
        }
    }

    /// Label without the trailing colon, used when the model drops it.
    pub fn bare_label(self) -> &'static str {
        self.label().trim_end_matches(':')
    }
}

/// Structured view of a model reply. All three fields are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedReply {
    pub summary: Vec<String>,
    pub bullets: Vec<String>,
    pub skills: Vec<String>,
}

impl SegmentedReply {
    pub fn section(&self, section: Section) -> &[String] {
        match section {
            Section::Summary => &self.summary,
            Section::ImprovedBullets => &self.bullets,
            Section::SuggestedSkills => &self.skills,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.bullets.is_empty() && self.skills.is_empty()
    }
}

/// Segments a raw model reply into its three sections.
pub fn segment(text: &str) -> SegmentedReply {
    if text.is_empty() {
        return SegmentedReply::default();
    }

    let text = text.replace("\r\n", "\n");

    SegmentedReply {
        summary: section_lines(&text, Section::Summary),
        bullets: section_lines(&text, Section::ImprovedBullets),
        skills: section_lines(&text, Section::SuggestedSkills),
    }
}

/// Same as `segment`, treating an absent reply as empty.
pub fn segment_opt(text: Option<&str>) -> SegmentedReply {
    segment(text.unwrap_or_default())
}

/// Lines for one section, retrying with the colon-less label when the
/// canonical one yields nothing.
fn section_lines(text: &str, section: Section) -> Vec<String> {
    let lines = split_section(text, section.label());
    if !lines.is_empty() {
        return lines;
    }
    split_section(text, section.bare_label())
}

/// Extracts cleaned lines from just after the first occurrence of `label` up to
/// the next header line or the end of `text`.
pub fn split_section(text: &str, label: &str) -> Vec<String> {
    let Some(start) = find_label(text, label) else {
        return Vec::new();
    };
    let body = &text[start + label.len()..];
    let end = next_header_offset(body).unwrap_or(body.len());

    body[..end]
        .lines()
        .map(|line| strip_bullet_marker(line.trim()))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Byte offset of the first occurrence of `label`. A colon-less label never
/// matches the head of its colon form, so an empty `SUGGESTED SKILLS:` block is not
/// re-read as the content line `":"`.
fn find_label(text: &str, label: &str) -> Option<usize> {
    if label.ends_with(':') {
        return text.find(label);
    }
    text.match_indices(label)
        .map(|(idx, _)| idx)
        .find(|&idx| !text[idx + label.len()..].starts_with(':'))
}

/// Byte offset of the newline that precedes the first header line in `body`.
/// Text before the first newline belongs to the label's own line and never ends the section.
fn next_header_offset(body: &str) -> Option<usize> {
    body.match_indices('\n')
        .map(|(idx, _)| idx)
        .find(|&idx| {
            let next_line = body[idx + 1..].split('\n').next().unwrap_or_default();
            is_section_header(next_line)
        })
}

/// True when `line` starts with a run of uppercase ASCII letters and spaces
/// immediately followed by a colon, e.g. `SUGGESTED SKILLS:`.
pub fn is_section_header(line: &str) -> bool {
    match line.split_once(':') {
        Some((head, _)) => {
            !head.is_empty() && head.chars().all(|c| c.is_ascii_uppercase() || c == ' ')
        }
        None => false,
    }
}

/// Removes one leading `-` or `•` marker and the whitespace after it.
fn strip_bullet_marker(line: &str) -> &str {
    line.strip_prefix(|c: char| c == '-' || c == '•')
        .unwrap_or(line)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_REPLY: &str = "SUMMARY:
- Enthusiastic entry-level data analyst with a strong foundation in statistics and Excel.
- Experienced in working with SQL, Power BI, and data visualization for academic projects.

IMPROVED BULLETS:
- Analyzed T20 World Cup dataset using SQL and Excel to uncover patterns in player performance.
- Developed interactive Power BI dashboards to track strike rate and win probability.

SUGGESTED SKILLS:
- SQL
- Excel
- Power BI
- Exploratory Data Analysis (EDA)
";

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_input_yields_three_empty_sections() {
        let reply = segment("");
        assert_eq!(reply, SegmentedReply::default());
        assert!(reply.is_empty());
    }

    #[test]
    fn test_absent_input_is_treated_as_empty() {
        assert_eq!(segment_opt(None), SegmentedReply::default());
    }

    #[test]
    fn test_summary_and_bullets_without_skills() {
        let reply = segment("SUMMARY:\n- a\n- b\n\nIMPROVED BULLETS:\n- c\n");
        assert_eq!(reply.summary, strings(&["a", "b"]));
        assert_eq!(reply.bullets, strings(&["c"]));
        assert!(reply.skills.is_empty());
    }

    #[test]
    fn test_full_template_reply() {
        let reply = segment(FULL_REPLY);
        assert_eq!(reply.summary.len(), 2);
        assert!(reply.summary[0].starts_with("Enthusiastic entry-level"));
        assert_eq!(reply.bullets.len(), 2);
        assert_eq!(
            reply.skills,
            strings(&["SQL", "Excel", "Power BI", "Exploratory Data Analysis (EDA)"])
        );
    }

    #[test]
    fn test_bullet_glyph_is_stripped() {
        let reply = segment("SUMMARY:\n• Foo bar\n");
        assert_eq!(reply.summary, strings(&["Foo bar"]));
    }

    #[test]
    fn test_hyphen_without_space_is_stripped() {
        let reply = segment("SUMMARY:\n-Foo\n");
        assert_eq!(reply.summary, strings(&["Foo"]));
    }

    #[test]
    fn test_only_one_marker_is_stripped() {
        let reply = segment("SUGGESTED SKILLS:\n- -Nested\n");
        assert_eq!(reply.skills, strings(&["-Nested"]));
    }

    #[test]
    fn test_unmarked_lines_are_kept_trimmed() {
        let reply = segment("SUMMARY:\n   plain line   \n");
        assert_eq!(reply.summary, strings(&["plain line"]));
    }

    #[test]
    fn test_header_without_colon_falls_back() {
        let reply = segment("SUMMARY\n- x\n");
        assert_eq!(reply.summary, strings(&["x"]));
    }

    #[test]
    fn test_fallback_stops_at_next_colon_header() {
        let reply = segment("SUMMARY\n- x\nIMPROVED BULLETS:\n- y\n");
        assert_eq!(reply.summary, strings(&["x"]));
        assert_eq!(reply.bullets, strings(&["y"]));
    }

    #[test]
    fn test_crlf_line_endings_are_normalised() {
        let reply = segment("SUMMARY:\r\n- a\r\n\r\nSUGGESTED SKILLS:\r\n- Rust\r\n");
        assert_eq!(reply.summary, strings(&["a"]));
        assert_eq!(reply.skills, strings(&["Rust"]));
    }

    #[test]
    fn test_text_on_label_line_belongs_to_section() {
        let reply = segment("SUMMARY: Seasoned analyst\n- second\n");
        assert_eq!(reply.summary, strings(&["Seasoned analyst", "second"]));
    }

    #[test]
    fn test_empty_section_before_next_header() {
        let reply = segment("SUMMARY:\nIMPROVED BULLETS:\n- c\n");
        assert!(reply.summary.is_empty());
        assert_eq!(reply.bullets, strings(&["c"]));
    }

    #[test]
    fn test_trailing_empty_section_stays_empty() {
        let reply = segment("SUMMARY:\n- a\n\nSUGGESTED SKILLS:\n");
        assert_eq!(reply.summary, strings(&["a"]));
        assert!(reply.bullets.is_empty());
        assert!(reply.skills.is_empty());
    }

    #[test]
    fn test_every_section_empty() {
        let reply = segment("SUMMARY:\n\nIMPROVED BULLETS:\n\nSUGGESTED SKILLS:\n");
        assert!(reply.is_empty());
    }

    #[test]
    fn test_fallback_skips_colon_form_of_label() {
        // The first "SUMMARY" is the empty colon header; the bare one later has content.
        let reply = segment("SUMMARY:\nNOTES:\n- n\nSUMMARY\n- late\n");
        assert_eq!(reply.summary, strings(&["late"]));
    }

    #[test]
    fn test_marker_only_lines_are_dropped() {
        let reply = segment("SUGGESTED SKILLS:\n- SQL\n-\n• \n- Excel\n");
        assert_eq!(reply.skills, strings(&["SQL", "Excel"]));
    }

    #[test]
    fn test_unknown_uppercase_header_ends_section() {
        let reply = segment("SUGGESTED SKILLS:\n- SQL\nNOTES:\n- ignore me\n");
        assert_eq!(reply.skills, strings(&["SQL"]));
    }

    #[test]
    fn test_sections_found_out_of_order() {
        let reply = segment("SUGGESTED SKILLS:\n- Go\n\nSUMMARY:\n- s\n");
        assert_eq!(reply.summary, strings(&["s"]));
        assert_eq!(reply.skills, strings(&["Go"]));
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let reply = segment("summary:\n- a\n");
        assert!(reply.summary.is_empty());
    }

    #[test]
    fn test_error_marker_segments_to_nothing() {
        let reply = segment("❌ Error communicating with the AI model:\nHTTP error: timeout");
        assert!(reply.is_empty());
    }

    #[test]
    fn test_segment_is_idempotent() {
        assert_eq!(segment(FULL_REPLY), segment(FULL_REPLY));
    }

    #[test]
    fn test_is_section_header() {
        assert!(is_section_header("SUMMARY:"));
        assert!(is_section_header("IMPROVED BULLETS:"));
        assert!(is_section_header("NOTES: trailing text"));
        assert!(!is_section_header("Summary:"));
        assert!(!is_section_header("- SQL: queries"));
        assert!(!is_section_header(":"));
        assert!(!is_section_header("SUMMARY"));
    }

    #[test]
    fn test_section_accessor_matches_fields() {
        let reply = segment(FULL_REPLY);
        assert_eq!(reply.section(Section::SuggestedSkills), reply.skills.as_slice());
        assert_eq!(Section::ImprovedBullets.bare_label(), "IMPROVED BULLETS");
    }
}
