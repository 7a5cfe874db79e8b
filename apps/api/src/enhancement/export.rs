//! Plain-text export of an enhancement result.

use chrono::NaiveDateTime;

use crate::enhancement::segmenter::{SegmentedReply, Section};

pub const RAW_OUTPUT_LABEL: &str = "RAW AI OUTPUT:";

/// Serialises the segmented sections under their canonical headings, followed by
/// the unsegmented model reply.
pub fn build_download_payload(reply: &SegmentedReply, raw_text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    for section in Section::ALL {
        lines.push(section.label().to_string());
        lines.extend(reply.section(section).iter().map(|line| format!("- {line}")));
        lines.push(String::new());
    }

    lines.push(RAW_OUTPUT_LABEL.to_string());
    lines.push(raw_text.to_string());

    lines.join("\n")
}

/// `resume_enhanced_{role}_{YYYYmmdd_HHMM}.txt`, spaces in the role replaced by `_`.
pub fn download_filename(job_role: &str, now: NaiveDateTime) -> String {
    format!(
        "resume_enhanced_{}_{}.txt",
        job_role.trim().replace(' ', "_"),
        now.format("%Y%m%d_%H%M")
    )
}
