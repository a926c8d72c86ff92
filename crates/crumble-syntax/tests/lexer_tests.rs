use crumble_syntax::lexer::{Token, TokenKind, Value, tokenize};
use crumble_syntax::Diagnostics;

fn scan(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize(source, &mut diagnostics);
    (tokens, diagnostics)
}

#[test]
fn test_keywords() {
    let source = "and class else false for fun if null or print return super this true var while";
    let (tokens, diagnostics) = scan(source);

    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::And,
            TokenKind::Class,
            TokenKind::Else,
            TokenKind::False,
            TokenKind::For,
            TokenKind::Fun,
            TokenKind::If,
            TokenKind::Null,
            TokenKind::Or,
            TokenKind::Print,
            TokenKind::Return,
            TokenKind::Super,
            TokenKind::This,
            TokenKind::True,
            TokenKind::Var,
            TokenKind::While,
            TokenKind::Eof,
        ]
    );
    assert!(!diagnostics.had_error());
}

#[test]
fn test_keyword_lookalikes_are_identifiers() {
    let (tokens, _) = scan("varx classy Null TRUE if_");

    for token in &tokens[..tokens.len() - 1] {
        assert_eq!(
            token.kind,
            TokenKind::Identifier,
            "{:?} should not be a keyword",
            token.lexeme
        );
    }
}

#[test]
fn test_operators_prefer_longest_match() {
    let (tokens, _) = scan("! != = == < <= > >=");

    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_numbers_decode_to_f64() {
    let (tokens, _) = scan("0 123 45.67");

    assert_eq!(tokens[0].literal, Some(Value::Number(0.0)));
    assert_eq!(tokens[1].literal, Some(Value::Number(123.0)));
    assert_eq!(tokens[2].literal, Some(Value::Number(45.67)));
    assert_eq!(tokens[2].lexeme, "45.67");
}

#[test]
fn test_strings_keep_raw_contents() {
    let (tokens, _) = scan(r#""hello" "with spaces" """#);

    assert_eq!(tokens[0].literal, Some(Value::String("hello".to_string())));
    assert_eq!(
        tokens[1].literal,
        Some(Value::String("with spaces".to_string()))
    );
    assert_eq!(tokens[2].literal, Some(Value::String(String::new())));
    // The lexeme keeps the quotes; the literal drops them.
    assert_eq!(tokens[0].lexeme, "\"hello\"");
}

#[test]
fn test_line_numbers_advance_on_newlines() {
    let (tokens, _) = scan("1\n2\n\n3");

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[2].line, 4);
}

#[test]
fn test_comments_and_whitespace_produce_no_tokens() {
    let (tokens, diagnostics) = scan("  \t\r\n// just a comment\n");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert!(!diagnostics.had_error());
}

#[test]
fn test_scan_continues_after_unexpected_characters() {
    let (tokens, diagnostics) = scan("#1 ~ 2$");

    assert_eq!(diagnostics.reports().len(), 3);
    assert_eq!(
        diagnostics.reports()[0].message,
        "Unexpected character: #"
    );

    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
    );
}

#[test]
fn test_unterminated_string_reports_final_line() {
    let (_, diagnostics) = scan("\"one\ntwo");

    assert!(diagnostics.had_error());
    let report = &diagnostics.reports()[0];
    assert_eq!(report.message, "Unterminated string.");
    // Reported where scanning stopped, past the embedded newline.
    assert_eq!(report.line, 2);
}

#[test]
fn test_slash_token_versus_comment() {
    let (tokens, _) = scan("8 / 2 // 4");

    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number,
            TokenKind::Slash,
            TokenKind::Number,
            TokenKind::Eof
        ]
    );
}
