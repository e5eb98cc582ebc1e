//! LRC parser
//!
//! Each physical line of the shape `[MM:SS.HH]text` becomes one `LyricLine`.
//! Lines without a leading time tag (blank lines, metadata such as
//! `[ar:Artist]`, plain text) are dropped without error.
//!
//! The fraction field is always divided by 100, whatever its width, so a
//! three-digit tag like `[00:01.500]` yields `6.0` rather than `1.5`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::LyricLine;

/// Leading `[minutes:seconds.fraction]` tag, optionally preceded by whitespace
static TIME_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\[([0-9]+:[0-9]+\.[0-9]+)\]").expect("valid time tag regex")
});

/// Parse raw lyric text into lines sorted by time.
///
/// Ties keep their original order. A line carrying several tags is kept
/// once, under its first tag; the remaining tags stay in its text.
pub fn parse_lrc(text: &str) -> Vec<LyricLine> {
    let mut lines: Vec<LyricLine> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_line)
        .collect();

    // `sort_by` is stable, so equal times keep input order
    lines.sort_by(|a, b| a.time.total_cmp(&b.time));

    log::debug!("parsed {} lyric lines", lines.len());
    lines
}

/// Parse a single physical line, or `None` if it has no leading time tag
fn parse_line(line: &str) -> Option<LyricLine> {
    let caps = TIME_TAG.captures(line)?;
    let tag = caps.get(0)?;

    let time = parse_time_tag(&caps[1])?;
    let text = line[tag.end()..].trim();

    Some(LyricLine::new(time, text))
}

/// Parse the inside of a time tag (`MM:SS.HH`, no brackets) into seconds
pub fn parse_time_tag(tag: &str) -> Option<f64> {
    let (minutes, rest) = tag.split_once(':')?;
    let (seconds, fraction) = rest.split_once('.')?;

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !(all_digits(minutes) && all_digits(seconds) && all_digits(fraction)) {
        return None;
    }

    // Digit runs parse as f64 without overflowing on long inputs
    let minutes: f64 = minutes.parse().ok()?;
    let seconds: f64 = seconds.parse().ok()?;
    let fraction: f64 = fraction.parse().ok()?;

    Some(minutes * 60.0 + seconds + fraction / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_lines() {
        let lines = parse_lrc("[00:01.00]Hello\n[00:02.50]World");

        assert_eq!(
            lines,
            vec![LyricLine::new(1.0, "Hello"), LyricLine::new(2.5, "World")]
        );
    }

    #[test]
    fn test_blank_and_untagged_lines_are_dropped() {
        let lines = parse_lrc("\n   \n[ar:Someone]\nno tag here\n[00:03.00] kept \n\t\n");

        assert_eq!(lines, vec![LyricLine::new(3.0, "kept")]);
    }

    #[test]
    fn test_tag_must_lead_the_line() {
        assert!(parse_lrc("text first [00:01.00]").is_empty());
        assert_eq!(
            parse_lrc("   [00:01.00]indented"),
            vec![LyricLine::new(1.0, "indented")]
        );
    }

    #[test]
    fn test_output_sorted_with_stable_ties() {
        let lines = parse_lrc("[00:05.00]c\n[00:01.00]a\n[00:05.00]d\n[00:02.00]b");
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();

        assert_eq!(texts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_multiple_tags_use_only_the_first() {
        let lines = parse_lrc("[00:10.00][00:20.00]chorus");

        assert_eq!(lines, vec![LyricLine::new(10.0, "[00:20.00]chorus")]);
    }

    #[test]
    fn test_fraction_is_divided_by_one_hundred() {
        assert_eq!(parse_time_tag("01:05.25"), Some(65.25));
        // three-digit fractions are not treated as milliseconds
        assert_eq!(parse_time_tag("00:01.500"), Some(6.0));
    }

    #[test]
    fn test_crlf_input() {
        let lines = parse_lrc("[00:01.00]one\r\n[00:02.00]two\r\n");

        assert_eq!(lines, vec![LyricLine::new(1.0, "one"), LyricLine::new(2.0, "two")]);
    }

    #[test]
    fn test_malformed_tags_rejected() {
        assert_eq!(parse_time_tag("1:2"), None);
        assert_eq!(parse_time_tag("aa:01.00"), None);
        assert_eq!(parse_time_tag(":01.00"), None);
        assert!(parse_lrc("[00:01]no fraction\n[0x:01.00]bad").is_empty());
    }

    #[test]
    fn test_empty_text_after_tag_is_kept() {
        assert_eq!(parse_lrc("[00:04.00]"), vec![LyricLine::new(4.0, "")]);
    }
}
