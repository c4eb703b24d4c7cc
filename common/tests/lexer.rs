use common::lexer::{Dfa, LexError, Lexer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Kind {
    Num,
    Open,
    Close,
    Comma,
    Arrow,
}

fn packet_lexer() -> Lexer<Kind, u8> {
    let mut dfa = Dfa::<Kind, u8>::new();
    let num = dfa.add_state(Some(Kind::Num));
    dfa.add_transitions(Dfa::<Kind, u8>::ROOT, b"0123456789", num);
    dfa.add_transitions(num, b"0123456789", num);
    dfa.add_path(Dfa::<Kind, u8>::ROOT, b"[", Kind::Open);
    dfa.add_path(Dfa::<Kind, u8>::ROOT, b"]", Kind::Close);
    dfa.add_path(Dfa::<Kind, u8>::ROOT, b",", Kind::Comma);
    dfa.add_path(Dfa::<Kind, u8>::ROOT, b"->", Kind::Arrow);

    Lexer::new(dfa).ignore(Kind::Comma)
}

#[test]
fn tokenizes_nested_lists() {
    let lexer = packet_lexer();
    let tokens = lexer.tokenize(b"[1,[23,4],[]]").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            Kind::Open,
            Kind::Num,
            Kind::Open,
            Kind::Num,
            Kind::Num,
            Kind::Close,
            Kind::Open,
            Kind::Close,
            Kind::Close,
        ]
    );
    assert_eq!(tokens[3].value, b"23");
}

#[test]
fn next_reads_longest_match() {
    let lexer = packet_lexer();
    let (token, rest) = lexer.next(b"1234]", 0).unwrap().unwrap();

    assert_eq!(token.kind, Kind::Num);
    assert_eq!(token.value, b"1234");
    assert_eq!(rest, b"]");
    assert!(lexer.next(b"", 5).unwrap().is_none());
}

#[test]
fn reports_offset_of_bad_input() {
    let lexer = packet_lexer();

    assert_eq!(lexer.tokenize(b"[1,x]"), Err(LexError::UnexpectedSymbol(3)));
    assert_eq!(lexer.tokenize(b"[-]"), Err(LexError::IncompleteToken(1)));
}
