//! Keyboard chord dispatch for formatting actions.

use super::format::FormatAction;

/// Map a keyboard chord to a formatting action.
///
/// `command` is the platform command modifier (Ctrl, or Cmd on macOS);
/// without it no chord matches. Key comparison is case-insensitive.
/// Single letters that collide with native webview shortcuts take Shift
/// as a disambiguator, matching the toolbar tooltips.
///
/// Returns `None` for anything outside the table - the caller passes the
/// event through so normal text editing is unaffected.
pub fn action_for_chord(key: &str, command: bool, shift: bool) -> Option<FormatAction> {
    if !command {
        return None;
    }

    let key = key.to_ascii_lowercase();
    let action = match (key.as_str(), shift) {
        ("b", _) => FormatAction::Bold,
        ("i", _) => FormatAction::Italic,
        ("k", _) => FormatAction::Link,
        ("1", true) => FormatAction::Heading1,
        ("2", true) => FormatAction::Heading2,
        ("l", true) => FormatAction::BulletList,
        ("o", true) => FormatAction::NumberedList,
        ("e", true) => FormatAction::CodeBlock,
        ("m", true) => FormatAction::Image,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("b", false, FormatAction::Bold)]
    #[case("i", false, FormatAction::Italic)]
    #[case("k", false, FormatAction::Link)]
    #[case("1", true, FormatAction::Heading1)]
    #[case("2", true, FormatAction::Heading2)]
    #[case("l", true, FormatAction::BulletList)]
    #[case("o", true, FormatAction::NumberedList)]
    #[case("e", true, FormatAction::CodeBlock)]
    #[case("m", true, FormatAction::Image)]
    fn chord_table(#[case] key: &str, #[case] shift: bool, #[case] expected: FormatAction) {
        assert_eq!(action_for_chord(key, true, shift), Some(expected));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(action_for_chord("B", true, false), Some(FormatAction::Bold));
        assert_eq!(
            action_for_chord("L", true, true),
            Some(FormatAction::BulletList)
        );
    }

    #[test]
    fn nothing_matches_without_the_command_modifier() {
        assert_eq!(action_for_chord("b", false, false), None);
        assert_eq!(action_for_chord("1", false, true), None);
    }

    #[test]
    fn shift_group_requires_shift() {
        // Plain Ctrl+L etc. are reserved by the webview
        assert_eq!(action_for_chord("l", true, false), None);
        assert_eq!(action_for_chord("1", true, false), None);
        assert_eq!(action_for_chord("e", true, false), None);
    }

    #[test]
    fn unmatched_keys_are_ignored() {
        assert_eq!(action_for_chord("z", true, false), None);
        assert_eq!(action_for_chord("z", true, true), None);
        assert_eq!(action_for_chord("Enter", true, false), None);
    }

    #[test]
    fn shift_does_not_block_the_plain_chords() {
        assert_eq!(action_for_chord("b", true, true), Some(FormatAction::Bold));
    }
}
