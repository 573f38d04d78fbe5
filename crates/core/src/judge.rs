//! Pass/fail check for a submitted fix.
//!
//! A submission is correct iff it equals the reference solution after
//! whitespace normalization. Semantically equivalent rewrites that differ in
//! tokens are rejected; each challenge has exactly one accepted answer.
//!
//! "Whitespace" is the ECMAScript `\s` class: U+FEFF separates tokens,
//! U+0085 does not.

/// Characters matched by the ECMAScript `\s` class.
#[must_use]
pub fn is_code_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_code_whitespace).filter(|token| !token.is_empty())
}

/// Collapse every run of whitespace to a single space and trim both ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in tokens(text) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Returns true iff `submission` matches `reference` modulo whitespace runs.
#[must_use]
pub fn judge(submission: &str, reference: &str) -> bool {
    // Compare token streams directly; equivalent to comparing normalized strings.
    tokens(submission).eq(tokens(reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judge_is_reflexive() {
        for sample in ["", "   ", "let x = 1;", "a\n\tb  c", "  padded  "] {
            assert!(judge(sample, sample), "{sample:?}");
        }
    }

    #[test]
    fn judge_ignores_whitespace_runs() {
        assert!(judge("a  b", "a b"));
        assert!(judge("a\nb", "a b"));
        assert!(judge("\t a \r\n b \n", "a b"));
        assert!(judge("", " \n "));
    }

    #[test]
    fn judge_distinguishes_tokens() {
        assert!(!judge("let x=1;", "let x =2;"));
        assert!(!judge("ab", "a b"));
        assert!(!judge("a b", "a b c"));
    }

    #[test]
    fn whitespace_set_matches_ecmascript() {
        assert!(judge("a\u{feff}b", "a b"));
        assert!(judge("a\u{3000}b\u{2028}c", "a b c"));
        assert!(!judge("a\u{85}b", "a b"));
        assert!(!is_code_whitespace('\u{85}'));
        assert!(is_code_whitespace('\u{0B}'));
    }

    #[test]
    fn normalize_collapses_and_trims() {
        assert_eq!(normalize_whitespace("  let   x =\n\t1;  "), "let x = 1;");
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \n "), "");
    }

    #[test]
    fn judge_agrees_with_normalized_equality() {
        let pairs = [
            ("if (a) {\n  b();\n}", "if (a) { b(); }"),
            ("return  x", "return x;"),
            ("x\u{a0}y", "x y"),
        ];
        for (left, right) in pairs {
            assert_eq!(
                judge(left, right),
                normalize_whitespace(left) == normalize_whitespace(right),
                "{left:?} vs {right:?}"
            );
        }
    }
}
