//! Heuristic extraction of the user's own bullet lines, for a before/after view
//! against the model's improved bullets.

use serde::{Deserialize, Serialize};

const BULLET_CHARS: &[char] = &['-', '•', '*'];
/// Marked bullets shorter than this are usually fragments ("- SQL").
const MIN_MARKED_BULLET_CHARS: usize = 10;
/// Unmarked lines longer than this are treated as bullet-like prose.
const MIN_UNMARKED_LINE_CHARS: usize = 40;

/// One row of the before/after comparison. Pairing is by position only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletComparison {
    pub original: Option<String>,
    pub improved: Option<String>,
}

/// Pulls bullet-style lines out of raw resume text.
///
/// Lines starting with `-`, `•` or `*` count when what remains after the markers
/// is longer than 10 characters. Other lines count when longer than 40 characters.
pub fn extract_original_bullets(resume_text: &str) -> Vec<String> {
    let mut bullets = Vec::new();

    for line in resume_text.lines() {
        let stripped = line.trim();
        if stripped.is_empty() {
            continue;
        }

        if stripped.starts_with(BULLET_CHARS) {
            let content = stripped
                .trim_start_matches(|c: char| BULLET_CHARS.contains(&c) || c == ' ')
                .trim();
            if content.chars().count() > MIN_MARKED_BULLET_CHARS {
                bullets.push(content.to_string());
            }
            continue;
        }

        if stripped.chars().count() > MIN_UNMARKED_LINE_CHARS {
            bullets.push(stripped.to_string());
        }
    }

    bullets
}

/// Pairs original and improved bullets by index, padding the shorter side with `None`.
pub fn compare_bullets(original: &[String], improved: &[String]) -> Vec<BulletComparison> {
    let rows = original.len().max(improved.len());
    (0..rows)
        .map(|i| BulletComparison {
            original: original.get(i).cloned(),
            improved: improved.get(i).cloned(),
        })
        .collect()
}
