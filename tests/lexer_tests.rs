// tests/lexer_tests.rs

use pseudotex::ast::TokenKind;
use pseudotex::lexer::{LexError, Lexer};

fn kinds(input: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(input);
    let mut result = vec![];
    loop {
        let token = lexer.next_token().unwrap();
        if token.kind == TokenKind::Eof {
            break;
        }
        result.push(token.kind);
    }
    result
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

// ============================================================================
// Operators and Punctuation
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("%", TokenKind::Percent),
        ("<", TokenKind::Lt),
        (">", TokenKind::Gt),
        ("=", TokenKind::Assign),
        ("(", TokenKind::LParen),
        (")", TokenKind::RParen),
        ("[", TokenKind::LBracket),
        ("]", TokenKind::RBracket),
        ("{", TokenKind::LBrace),
        ("}", TokenKind::RBrace),
        (":", TokenKind::Colon),
        (",", TokenKind::Comma),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token().unwrap().kind, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }
}

#[test]
fn test_two_char_tokens() {
    let test_cases = vec![
        ("==", TokenKind::EqEq),
        ("<=", TokenKind::LtEq),
        (">=", TokenKind::GtEq),
        ("+=", TokenKind::PlusAssign),
        ("-=", TokenKind::MinusAssign),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token().unwrap().kind, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }
}

#[test]
fn test_equals_only_joins_after_selected_operators() {
    // '*' and '/' never take a trailing '='
    assert_eq!(kinds("*="), vec![TokenKind::Star, TokenKind::Assign]);
    assert_eq!(kinds("/="), vec![TokenKind::Slash, TokenKind::Assign]);
    // at most two characters
    assert_eq!(kinds("==="), vec![TokenKind::EqEq, TokenKind::Assign]);
    assert_eq!(kinds("< ="), vec![TokenKind::Lt, TokenKind::Assign]);
}

// ============================================================================
// Literals and Identifiers
// ============================================================================

#[test]
fn test_numbers() {
    assert_eq!(kinds("42"), vec![TokenKind::Integer("42".into())]);
    assert_eq!(kinds("3.14"), vec![TokenKind::Float("3.14".into())]);
    assert_eq!(kinds(".5"), vec![TokenKind::Float(".5".into())]);
    assert_eq!(kinds("007"), vec![TokenKind::Integer("007".into())]);
    assert_eq!(
        kinds("1.2.3"),
        vec![TokenKind::Float("1.2".into()), TokenKind::Float(".3".into())]
    );
}

#[test]
fn test_strings_are_verbatim() {
    assert_eq!(kinds(r#""hello world""#), vec![TokenKind::String("hello world".into())]);
    assert_eq!(kinds(r"'a\n'"), vec![TokenKind::String(r"a\n".into())]);
    assert_eq!(kinds(r#"'say "hi"'"#), vec![TokenKind::String(r#"say "hi""#.into())]);
}

#[test]
fn test_identifiers_and_keywords() {
    assert_eq!(
        kinds("define iffy in_place x1 return"),
        vec![
            ident("define"),
            ident("iffy"),
            ident("in_place"),
            ident("x1"),
            TokenKind::Return,
        ]
    );
}

#[test]
fn test_statement_line() {
    assert_eq!(
        kinds("total += numbers[i]*2"),
        vec![
            ident("total"),
            TokenKind::PlusAssign,
            ident("numbers"),
            TokenKind::LBracket,
            ident("i"),
            TokenKind::RBracket,
            TokenKind::Star,
            TokenKind::Integer("2".into()),
        ]
    );
}

// ============================================================================
// Lines and Indentation
// ============================================================================

#[test]
fn test_newline_tokens() {
    assert_eq!(
        kinds("a=1\nb=2"),
        vec![
            ident("a"),
            TokenKind::Assign,
            TokenKind::Integer("1".into()),
            TokenKind::Newline,
            ident("b"),
            TokenKind::Assign,
            TokenKind::Integer("2".into()),
        ]
    );
}

#[test]
fn test_indent_level_describes_following_line() {
    let mut lexer = Lexer::new("if x:\n    y=1\n        z=2\nw=3");
    let mut levels = vec![];
    loop {
        let token = lexer.next_token().unwrap();
        match token.kind {
            TokenKind::Newline => levels.push(lexer.indent_level()),
            TokenKind::Eof => break,
            _ => {}
        }
    }
    assert_eq!(levels, vec![1, 2, 0]);
}

#[test]
fn test_indent_level_rounds_down() {
    let mut lexer = Lexer::new("a\n      b\n   c");
    assert_eq!(lexer.next_token().unwrap().kind, ident("a"));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Newline);
    assert_eq!(lexer.indent_level(), 1);
    assert_eq!(lexer.next_token().unwrap().kind, ident("b"));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Newline);
    assert_eq!(lexer.indent_level(), 0);
}

#[test]
fn test_blank_lines_are_elided() {
    let mut lexer = Lexer::new("a\n\n      \n    b");
    assert_eq!(lexer.next_token().unwrap().kind, ident("a"));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Newline);
    assert_eq!(lexer.indent_level(), 1);

    let b = lexer.next_token().unwrap();
    assert_eq!(b.kind, ident("b"));
    // line numbers still refer to the original source
    assert_eq!(b.line, 4);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_first_line_indentation() {
    let lexer = Lexer::new("        x = 1");
    assert_eq!(lexer.indent_level(), 2);
}

#[test]
fn test_crlf_line_endings() {
    assert_eq!(
        kinds("a\r\nb"),
        vec![ident("a"), TokenKind::Newline, ident("b")]
    );
}

#[test]
fn test_token_lines() {
    let mut lexer = Lexer::new("a\nb = 1");
    assert_eq!(lexer.next_token().unwrap().line, 1);
    let newline = lexer.next_token().unwrap();
    assert_eq!((newline.kind, newline.line), (TokenKind::Newline, 1));
    assert_eq!(lexer.next_token().unwrap().line, 2);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unexpected_character() {
    let mut lexer = Lexer::new("a = 1\nb = $");
    let err = loop {
        match lexer.next_token() {
            Ok(token) => assert_ne!(token.kind, TokenKind::Eof),
            Err(e) => break e,
        }
    };
    assert_eq!(
        err,
        LexError::UnexpectedCharacter {
            character: '$',
            line: 2
        }
    );
    assert_eq!(err.to_string(), "Unexpected character '$' on line 2");
}

#[test]
fn test_tab_is_rejected() {
    let mut lexer = Lexer::new("a\n\tb");
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnexpectedCharacter {
            character: '\t',
            line: 2
        })
    );
}

#[test]
fn test_lone_dot_is_rejected() {
    let mut lexer = Lexer::new("a.b");
    lexer.next_token().unwrap();
    assert!(matches!(
        lexer.next_token(),
        Err(LexError::UnexpectedCharacter { character: '.', .. })
    ));
}

#[test]
fn test_unterminated_string() {
    let mut lexer = Lexer::new("x = \"abc\ny = 1");
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    assert_eq!(lexer.next_token(), Err(LexError::UnterminatedString { line: 1 }));
}
