use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_display_punctuation_uses_source_text() {
    assert_eq!(TokenKind::AmpAmp.to_string(), "&&");
    assert_eq!(TokenKind::Shr.to_string(), ">>");
    assert_eq!(TokenKind::NotEq.to_string(), "!=");
}

#[test]
fn test_display_literals() {
    assert_eq!(TokenKind::Number(-1).to_string(), "-1");
    assert_eq!(TokenKind::Ident("af'".into()).to_string(), "af'");
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
}

#[test]
fn test_token_list_push_and_kinds() {
    let mut list = TokenList::with_capacity(3);
    assert!(list.is_empty());
    list.push(Token::new(TokenKind::Number(1), Span::new(0, 1)));
    list.push(Token::new(TokenKind::Plus, Span::new(1, 2)));
    list.push(Token::new(TokenKind::Eof, Span::point(2)));

    assert_eq!(list.len(), 3);
    let kinds: Vec<_> = list.kinds().cloned().collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Number(1), TokenKind::Plus, TokenKind::Eof]
    );
    assert_eq!(list.get(1).map(|t| t.span), Some(Span::new(1, 2)));
    assert_eq!(list.get(3), None);
}

#[test]
fn test_token_debug_includes_span() {
    let token = Token::new(TokenKind::Comma, Span::new(4, 5));
    assert_eq!(format!("{token:?}"), "Comma @ 4..5");
}
