//! Question classification: blank-type vs full-name-type.

/// Placeholder marker forms accepted in question text, longest form first so
/// the bracketed variant wins over its bare substring.
pub const PLACEHOLDER_MARKERS: [&str; 2] = ["[빈칸]", "빈칸"];

/// A classified CAPTCHA question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// Exactly one placeholder marker: the answer is the span standing in for
    /// the marker. Whitespace next to the marker is not part of the affixes;
    /// signboards carry no spacing around the blank.
    Blank { prefix: String, suffix: String },
    /// No single marker: the question asks for the complete name of the
    /// pictured subject.
    FullName,
}

/// A question that is nothing but a placeholder. There is no affix to anchor
/// on, so it cannot be solved.
#[derive(Debug, thiserror::Error)]
#[error("question is a bare placeholder with no surrounding text")]
pub struct DegenerateQuestion;

/// Classify a question by its placeholder marker.
///
/// Exactly one occurrence of a marker form makes the question blank-type;
/// zero or several occurrences classify it as full-name-type.
pub fn classify(question_text: &str) -> Result<Question, DegenerateQuestion> {
    let text = question_text.trim();

    for marker in PLACEHOLDER_MARKERS {
        match text.matches(marker).count() {
            0 => continue,
            1 => {
                let (raw_prefix, raw_suffix) =
                    text.split_once(marker).unwrap_or((text, ""));
                let prefix = raw_prefix.trim_end();
                let suffix = raw_suffix.trim_start();
                if prefix.is_empty() && suffix.is_empty() {
                    return Err(DegenerateQuestion);
                }
                return Ok(Question::Blank {
                    prefix: prefix.to_string(),
                    suffix: suffix.to_string(),
                });
            }
            _ => return Ok(Question::FullName),
        }
    }

    Ok(Question::FullName)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(prefix: &str, suffix: &str) -> Question {
        Question::Blank {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    #[test]
    fn marker_at_start() {
        assert_eq!(classify("빈칸나은행").unwrap(), blank("", "나은행"));
    }

    #[test]
    fn marker_at_end() {
        assert_eq!(classify("하나은빈칸").unwrap(), blank("하나은", ""));
    }

    #[test]
    fn marker_in_middle_with_spacing() {
        // The signboard reads "참좋은병원" with no spaces; the question's
        // spacing around the marker must not leak into the affixes.
        assert_eq!(classify("참 빈칸 병원").unwrap(), blank("참", "병원"));
    }

    #[test]
    fn bracketed_marker() {
        assert_eq!(classify("[빈칸]나은행").unwrap(), blank("", "나은행"));
    }

    #[test]
    fn no_marker_is_full_name() {
        assert_eq!(classify("이 건물의 이름은?").unwrap(), Question::FullName);
    }

    #[test]
    fn multiple_markers_are_full_name() {
        assert_eq!(classify("빈칸나은빈칸").unwrap(), Question::FullName);
    }

    #[test]
    fn bare_placeholder_is_degenerate() {
        assert!(classify("빈칸").is_err());
        assert!(classify("  [빈칸]  ").is_err());
    }

    #[test]
    fn surrounding_question_whitespace_is_ignored() {
        assert_eq!(classify("  빈칸나은행\n").unwrap(), blank("", "나은행"));
    }
}
