use super::*;

#[test]
fn truncate_marks_the_cut() {
    assert_eq!(truncate("hello world", 5), "hell…");
    assert_eq!(truncate("hi", 5), "hi");
    assert_eq!(truncate("abc", 0), "");
    assert_eq!(truncate("你好世界", 5), "你好…");
}

#[test]
fn wrap_breaks_on_words() {
    assert_eq!(wrap("alpha beta gamma", 10, 3), vec!["alpha beta", "gamma"]);
}

#[test]
fn wrap_breaks_long_words_by_grapheme() {
    assert_eq!(wrap("abcdefgh", 3, 5), vec!["abc", "def", "gh"]);
}

#[test]
fn wrap_overflow_ends_with_ellipsis() {
    assert_eq!(
        wrap("alpha beta gamma delta", 10, 2),
        vec!["alpha beta", "gamma…"]
    );
    assert_eq!(wrap("aaaa bbbb cccc", 4, 2), vec!["aaaa", "bbb…"]);
}

#[test]
fn wrap_degenerate_inputs() {
    assert!(wrap("text", 0, 3).is_empty());
    assert!(wrap("text", 5, 0).is_empty());
    assert!(wrap("   ", 5, 2).is_empty());
}
