//! Heuristic resume-section extractor.
//!
//! Scans pasted resume text line by line and splits it into candidate
//! work-experience entries at date-range boundaries. The two lines above a
//! boundary are taken positionally as job title and company. This is a
//! best-effort segmentation: it never fails, it just degrades on input that
//! doesn't follow the "company / title / dates / bullets" shape.
//!
//! The boundary classification is intentionally loose and is preserved as-is
//! for compatibility with documents segmented by earlier versions:
//! any line containing a hyphen counts as a boundary, as does any line with
//! four consecutive digits anywhere in it.

use crate::model::ParsedExperience;
use regex::Regex;
use std::sync::LazyLock;

/// A line starting with an M/D/Y date, or containing a bare 4-digit year.
/// The second alternative is unanchored on purpose.
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{2,4}|\d{4}").unwrap());

/// Captures a `start [-–] end` pair, where end may be "Present".
static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2}/\d{1,2}/\d{2,4}|\d{4})\s*[-–]\s*(\d{1,2}/\d{1,2}/\d{2,4}|\d{4}|Present)")
        .unwrap()
});

/// A line that is (or starts as) a pure numeric date; such lines are never
/// treated as description content.
static LEADING_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{2,4}").unwrap());

const DEFAULT_TITLE: &str = "Position Title";
const DEFAULT_COMPANY: &str = "Company Name";

fn is_marker(line: &str) -> bool {
    MARKER.is_match(line) || line.contains('-')
}

/// Preceding physical line, trimmed, with a placeholder fallback when the
/// line is absent or blank.
fn context_line(lines: &[&str], index: usize, offset: usize, fallback: &str) -> String {
    let text = index
        .checked_sub(offset)
        .and_then(|i| lines.get(i))
        .map(|l| l.trim())
        .unwrap_or("");
    if text.is_empty() {
        fallback.to_string()
    } else {
        text.to_string()
    }
}

/// Split free-form resume text into candidate work-experience entries.
///
/// Never errors; adversarial input just yields low-quality or empty results.
pub fn parse_experiences(content: &str) -> Vec<ParsedExperience> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut experiences = Vec::new();
    let mut current: Option<ParsedExperience> = None;
    let mut order = 0;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }

        if is_marker(line) {
            if let Some(exp) = current.take() {
                experiences.push(exp);
            }

            let (start_date, end_date) = match DATE_RANGE.captures(line) {
                Some(caps) => (caps[1].to_string(), caps[2].to_string()),
                None => (String::new(), String::new()),
            };

            current = Some(ParsedExperience {
                title: context_line(&lines, i, 1, DEFAULT_TITLE),
                company: context_line(&lines, i, 2, DEFAULT_COMPANY),
                start_date,
                end_date,
                description: String::new(),
                original_description: String::new(),
                order,
            });
            order += 1;
        } else if let Some(exp) = current.as_mut() {
            // Pure date lines never become description content.
            if !LEADING_DATE.is_match(line) {
                if !exp.description.is_empty() {
                    exp.description.push('\n');
                }
                exp.description.push_str(line);
                exp.original_description = exp.description.clone();
            }
        }
    }

    if let Some(exp) = current.take() {
        experiences.push(exp);
    }

    experiences
}
