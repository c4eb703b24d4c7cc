use std::{
    cmp::Ordering,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result};
use clap::Parser;
use common::lexer::{Dfa, LexError, Lexer, Token};
use tracing::debug;

#[derive(Debug)]
pub enum Error {
    Lex(LexError),
    UnexpectedToken(String),
    UnexpectedEnd,
    TrailingText(String),
    IncompletePair(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Lex(e) => write!(f, "Failed to split packet into tokens: {}", e),
            Error::UnexpectedToken(s) => write!(f, "Unexpected token({}) in packet.", s),
            Error::UnexpectedEnd => write!(f, "Packet ends before its lists are closed."),
            Error::TrailingText(s) => write!(f, "Unexpected text({}) after packet.", s),
            Error::IncompletePair(ind) => write!(f, "Pair {} has only one packet.", ind),
        }
    }
}

impl error::Error for Error {}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Error::Lex(value)
    }
}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TokenKind {
    Open,
    Close,
    Comma,
    Integer,
}

#[derive(Debug, Clone)]
pub enum Packet {
    Integer(u32),
    List(Vec<Packet>),
}

impl Packet {
    fn divider(n: u32) -> Self {
        Packet::List(vec![Packet::List(vec![Packet::Integer(n)])])
    }
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Integer(a), Packet::Integer(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Integer(a), Packet::List(b)) => [Packet::Integer(*a)].as_slice().cmp(b),
            (Packet::List(a), Packet::Integer(b)) => a.as_slice().cmp(&[Packet::Integer(*b)]),
        }
    }
}

impl PartialEq for Packet {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Packet {}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Packet {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PacketParser::new().parse(s)
    }
}

/// Turns packet text into [`Packet`]s, commas are only separators.
#[derive(Debug)]
pub struct PacketParser {
    lexer: Lexer<TokenKind, u8>,
}

impl PacketParser {
    pub fn new() -> Self {
        let mut dfa = Dfa::<TokenKind, u8>::new();
        dfa.add_path(Dfa::<TokenKind, u8>::ROOT, b"[", TokenKind::Open);
        dfa.add_path(Dfa::<TokenKind, u8>::ROOT, b"]", TokenKind::Close);
        dfa.add_path(Dfa::<TokenKind, u8>::ROOT, b",", TokenKind::Comma);
        let digits = (b'0'..=b'9').collect::<Vec<_>>();
        let integer = dfa.add_state(Some(TokenKind::Integer));
        dfa.add_transitions(Dfa::<TokenKind, u8>::ROOT, &digits, integer);
        dfa.add_transitions(integer, &digits, integer);

        Self {
            lexer: Lexer::new(dfa).ignore(TokenKind::Comma),
        }
    }

    pub fn parse(&self, text: &str) -> Result<Packet, Error> {
        let tokens = self.lexer.tokenize(text.trim().as_bytes())?;
        let (packet, rest) = parse_packet(&tokens)?;
        if let Some(token) = rest.first() {
            return Err(Error::TrailingText(token_text(token)));
        }

        Ok(packet)
    }
}

impl Default for PacketParser {
    fn default() -> Self {
        Self::new()
    }
}

type PacketToken<'a> = Token<'a, TokenKind, u8>;

fn token_text(token: &PacketToken) -> String {
    String::from_utf8_lossy(token.value).into_owned()
}

fn parse_packet<'t, 'a>(
    tokens: &'t [PacketToken<'a>],
) -> Result<(Packet, &'t [PacketToken<'a>]), Error> {
    let (first, mut rest) = tokens.split_first().ok_or(Error::UnexpectedEnd)?;
    match first.kind {
        TokenKind::Integer => {
            let n = token_text(first)
                .parse::<u32>()
                .map_err(|_| Error::UnexpectedToken(token_text(first)))?;
            Ok((Packet::Integer(n), rest))
        }
        TokenKind::Open => {
            let mut items = Vec::new();
            loop {
                match rest.first() {
                    None => return Err(Error::UnexpectedEnd),
                    Some(token) if token.kind == TokenKind::Close => {
                        return Ok((Packet::List(items), &rest[1..]));
                    }
                    Some(_) => {
                        let (item, next_rest) = parse_packet(rest)?;
                        items.push(item);
                        rest = next_rest;
                    }
                }
            }
        }
        TokenKind::Close | TokenKind::Comma => Err(Error::UnexpectedToken(token_text(first))),
    }
}

#[derive(Debug, Clone)]
pub struct PacketPair {
    left: Packet,
    right: Packet,
}

impl PacketPair {
    pub fn new(left: Packet, right: Packet) -> Self {
        Self { left, right }
    }

    pub fn is_ordered(&self) -> bool {
        self.left < self.right
    }
}

/// Sum of the 1-based indices of pairs already in the right order.
pub fn ordered_index_sum(pairs: &[PacketPair]) -> usize {
    pairs
        .iter()
        .enumerate()
        .filter(|(_, pair)| pair.is_ordered())
        .map(|(ind, _)| ind + 1)
        .sum()
}

/// Product of the 1-based positions of the divider packets `[[2]]` and
/// `[[6]]` once they are sorted together with every other packet.
pub fn decoder_key(pairs: &[PacketPair]) -> usize {
    let mut packets = pairs
        .iter()
        .flat_map(|pair| [&pair.left, &pair.right])
        .cloned()
        .collect::<Vec<_>>();
    let dividers = [Packet::divider(2), Packet::divider(6)];
    packets.extend(dividers.iter().cloned());
    packets.sort_unstable();

    dividers
        .iter()
        .filter_map(|divider| packets.binary_search(divider).ok())
        .map(|ind| ind + 1)
        .product()
}

pub fn read_packet_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<PacketPair>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let parser = PacketParser::new();
    let mut pairs = Vec::new();
    let mut pending = None;
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let packet = parser
            .parse(&line)
            .with_context(|| format!("Failed to parse packet in line {}.", ind + 1))?;
        match pending.take() {
            None => pending = Some(packet),
            Some(left) => pairs.push(PacketPair::new(left, packet)),
        }
    }
    if pending.is_some() {
        return Err(Error::IncompletePair(pairs.len() + 1).into());
    }
    debug!(pair_n = pairs.len(), "read packet pairs");

    Ok(pairs)
}
