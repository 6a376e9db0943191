use super::*;

#[test]
fn test_advance_if_literal() {
    let mut cursor = Cursor::new(b"#true");
    assert!(cursor.advance_if_literal(b"#").is_ok());
    assert_eq!(cursor.position(), 1);

    // Case-sensitive, no skipping
    assert_eq!(cursor.advance_if_literal(b"T"), Err(ParseError::NoMatch));
    assert_eq!(cursor.position(), 1);

    assert!(cursor.advance_if_literal(b"true").is_ok());
    assert!(cursor.rest().is_empty());
    assert_eq!(cursor.advance_if_literal(b"x"), Err(ParseError::NoMatch));
}

#[test]
fn test_skip_while() {
    let mut cursor = Cursor::new(b"  \n\tabc");
    assert!(cursor.skip_while(is_whitespace).is_ok());
    assert_eq!(cursor.position(), 4);

    // Already on a non-matching byte: zero-length success
    assert!(cursor.skip_while(is_whitespace).is_ok());
    assert_eq!(cursor.position(), 4);
}

#[test]
fn test_skip_while_fails_at_end_of_buffer() {
    let mut cursor = Cursor::new(b"   ");
    assert_eq!(cursor.skip_while(is_whitespace), Err(ParseError::NoMatch));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_skip_until() {
    let mut cursor = Cursor::new(b"hello\"");
    assert!(cursor.skip_until(|b| b == b'"').is_ok());
    assert_eq!(cursor.position(), 5);

    let mut cursor = Cursor::new(b"unterminated");
    assert_eq!(cursor.skip_until(|b| b == b'"'), Err(ParseError::NoMatch));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_separators() {
    for byte in [b' ', b'\n', b'\t', b'\r', b'(', b')', b'[', b']'] {
        assert!(is_separator(byte), "{:?} should separate", byte as char);
    }
    for byte in [b'a', b'#', b'"', b'-', b'{', b'0'] {
        assert!(!is_separator(byte), "{:?} should not separate", byte as char);
    }
}

#[test]
fn test_scan_token_stops_at_separator_or_end() {
    let mut cursor = Cursor::new(b"foo(bar");
    assert_eq!(cursor.scan_token(), b"foo");
    assert_eq!(cursor.peek(), Some(b'('));

    let mut cursor = Cursor::new(b"0x1F");
    assert_eq!(cursor.scan_token(), b"0x1F");
    assert!(cursor.rest().is_empty());

    let mut cursor = Cursor::new(b")");
    assert_eq!(cursor.scan_token(), b"");
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_checkpoint_restore() {
    let mut cursor = Cursor::new(b"abc def");
    let checkpoint = cursor.checkpoint();
    cursor.scan_token();
    assert_eq!(cursor.position(), 3);
    cursor.restore(checkpoint);
    assert_eq!(cursor.position(), checkpoint.offset());
    assert_eq!(cursor.rest(), b"abc def");
}

#[test]
fn test_boundaries_and_trailing_whitespace() {
    let mut cursor = Cursor::new(b"ab ]  ");
    assert!(!cursor.at_token_boundary());
    cursor.scan_token();
    assert!(cursor.at_token_boundary());
    assert!(!cursor.only_whitespace_left());
    cursor.skip_while(is_whitespace).unwrap();
    cursor.advance_if_literal(b"]").unwrap();
    assert!(cursor.only_whitespace_left());
    assert_eq!(cursor.slice(0, 2), b"ab");
}
