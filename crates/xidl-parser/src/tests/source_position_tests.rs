//! Tests for `SourcePosition` tracking through the lexer.

use crate::tests::utils::parse_ok;
use crate::SourcePosition;

/// Verifies that display positions are 1-based.
#[test]
fn display_line_col_is_one_based() {
    assert_eq!(SourcePosition::zero().to_display_line_col(), (1, 1));
    let pos = SourcePosition::new(4, 11, Some(11), 60);
    assert_eq!(pos.to_display_line_col(), (5, 12));
}

/// Verifies that line and column are tracked across `\n`, `\r\n` and `\r`
/// line endings alike.
#[test]
fn positions_track_all_line_endings() {
    for newline in ["\n", "\r\n", "\r"] {
        let source = format!("scalar A = u8{newline}{newline}  scalar B = u8");
        let doc = parse_ok(&source);
        let name = doc.definitions[1].name().unwrap();
        assert_eq!(name.span.start_inclusive.line(), 2, "newline {newline:?}");
        assert_eq!(name.span.start_inclusive.col_utf8(), 9, "newline {newline:?}");
    }
}

/// Verifies that UTF-16 columns count surrogate pairs as two units while
/// UTF-8 columns count characters.
#[test]
fn utf16_column_counts_surrogate_pairs() {
    let source = "\"🦀\" scalar Crab = u8";
    let doc = parse_ok(source);
    let name = doc.definitions[0].name().unwrap();
    let start = &name.span.start_inclusive;
    // `"🦀" scalar ` is 11 characters, one of which takes two UTF-16 units.
    assert_eq!(start.col_utf8(), 11);
    assert_eq!(start.col_utf16(), Some(12));
    assert_eq!(start.byte_offset(), "\"🦀\" scalar ".len());
}
