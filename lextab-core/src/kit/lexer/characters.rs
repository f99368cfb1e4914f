//! Named characters and character classes for authoring tables

use super::predicate::CharPredicate;

pub const CP_NUL: char = '\u{00}';
pub const CP_BS: char = '\u{08}';
pub const CP_HT: char = '\u{09}';
pub const CP_LF: char = '\u{0a}';
pub const CP_VT: char = '\u{0b}';
pub const CP_FF: char = '\u{0c}';
pub const CP_CR: char = '\u{0d}';
pub const CP_ESC: char = '\u{1b}';
pub const CP_FS: char = '\u{1c}';
pub const CP_GS: char = '\u{1d}';
pub const CP_RS: char = '\u{1e}';
pub const CP_US: char = '\u{1f}';
pub const CP_DQ: char = '"';
pub const CP_QT: char = '\'';
pub const CP_BACKSLASH: char = '\\';
pub const CP_DEL: char = '\u{7f}';

pub const NUL: CharPredicate = CharPredicate::exact(CP_NUL);
pub const BS: CharPredicate = CharPredicate::exact(CP_BS);
pub const HT: CharPredicate = CharPredicate::exact(CP_HT); // \t
pub const LF: CharPredicate = CharPredicate::exact(CP_LF); // \n
pub const VT: CharPredicate = CharPredicate::exact(CP_VT);
pub const FF: CharPredicate = CharPredicate::exact(CP_FF); // \f
pub const CR: CharPredicate = CharPredicate::exact(CP_CR); // \r
pub const ESC: CharPredicate = CharPredicate::exact(CP_ESC);
pub const FS: CharPredicate = CharPredicate::exact(CP_FS);
pub const GS: CharPredicate = CharPredicate::exact(CP_GS);
pub const RS: CharPredicate = CharPredicate::exact(CP_RS);
pub const US: CharPredicate = CharPredicate::exact(CP_US);
pub const DQ: CharPredicate = CharPredicate::exact(CP_DQ);
pub const QT: CharPredicate = CharPredicate::exact(CP_QT);
pub const BACKSLASH: CharPredicate = CharPredicate::exact(CP_BACKSLASH);
pub const DEL: CharPredicate = CharPredicate::exact(CP_DEL);

pub const ASCII: CharPredicate = CharPredicate::range(CP_NUL, CP_DEL);
pub const CONTROL: CharPredicate = CharPredicate::range(CP_NUL, CP_US);

pub const SPACE: CharPredicate = CharPredicate::exact(' ');
pub const DIGIT: CharPredicate = CharPredicate::range('0', '9');
pub const LOWER: CharPredicate = CharPredicate::range('a', 'z');
pub const UPPER: CharPredicate = CharPredicate::range('A', 'Z');

pub const ANY: CharPredicate = CharPredicate::any();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_range() {
        assert!(CONTROL.test(CP_NUL));
        assert!(CONTROL.test(CP_HT));
        assert!(CONTROL.test(CP_US));
        assert!(!CONTROL.test(' '));
        assert!(!CONTROL.test(CP_DEL));
    }

    #[test]
    fn test_ascii_range() {
        assert!(ASCII.test('~'));
        assert!(ASCII.test(CP_DEL));
        assert!(!ASCII.test('\u{80}'));
        assert!(!ASCII.test('é'));
    }

    #[test]
    fn test_letter_classes() {
        assert!(LOWER.test('m'));
        assert!(!LOWER.test('M'));
        assert!(UPPER.test('M'));
        assert!(DIGIT.test('5'));
        assert!(QT.test('\''));
        assert!(DQ.test('"'));
    }
}
