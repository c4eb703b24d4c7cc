//! Table driven lexer.
//!
//! A [`Dfa`] is an arena of states; state 0 is the root every token starts
//! from. The [`Lexer`] walks the longest run of symbols the automaton accepts
//! and emits the kind of the state it stops in.

use std::{collections::HashSet, error, fmt::Display, hash::Hash};

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    UnexpectedSymbol(usize),
    IncompleteToken(usize),
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexError::UnexpectedSymbol(offset) => {
                write!(f, "No token can start with symbol at offset {}.", offset)
            }
            LexError::IncompleteToken(offset) => {
                write!(f, "Incomplete token at offset {}.", offset)
            }
        }
    }
}

impl error::Error for LexError {}

pub type StateId = usize;

#[derive(Debug, Clone)]
struct State<T, C> {
    kind: Option<T>,
    transitions: FxHashMap<C, StateId>,
}

impl<T, C> State<T, C> {
    fn new(kind: Option<T>) -> Self {
        Self {
            kind,
            transitions: FxHashMap::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dfa<T, C> {
    states: Vec<State<T, C>>,
}

impl<T, C> Dfa<T, C>
where
    T: Copy,
    C: Copy + Eq + Hash,
{
    pub const ROOT: StateId = 0;

    pub fn new() -> Self {
        Self {
            states: vec![State::new(None)],
        }
    }

    /// Adds a state that accepts `kind`, or a pass-through state for `None`.
    pub fn add_state(&mut self, kind: Option<T>) -> StateId {
        self.states.push(State::new(kind));
        self.states.len() - 1
    }

    /// Every symbol in `symbols` moves `from` to `to`.
    pub fn add_transitions(&mut self, from: StateId, symbols: &[C], to: StateId) {
        let transitions = &mut self.states[from].transitions;
        for symbol in symbols {
            transitions.insert(*symbol, to);
        }
    }

    /// Spells `symbols` out from `from`, reusing existing transitions, and
    /// marks the final state as accepting `kind`.
    pub fn add_path(&mut self, from: StateId, symbols: &[C], kind: T) -> StateId {
        let mut cur = from;
        for symbol in symbols {
            cur = match self.step(cur, *symbol) {
                Some(next) => next,
                None => {
                    let next = self.add_state(None);
                    self.states[cur].transitions.insert(*symbol, next);
                    next
                }
            };
        }
        self.states[cur].kind = Some(kind);

        cur
    }

    pub fn step(&self, from: StateId, symbol: C) -> Option<StateId> {
        self.states[from].transitions.get(&symbol).copied()
    }

    pub fn kind(&self, state: StateId) -> Option<T> {
        self.states[state].kind
    }
}

impl<T, C> Default for Dfa<T, C>
where
    T: Copy,
    C: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a, T, C> {
    pub kind: T,
    pub value: &'a [C],
}

#[derive(Debug, Clone)]
pub struct Lexer<T, C> {
    dfa: Dfa<T, C>,
    ignored: HashSet<T>,
}

impl<T, C> Lexer<T, C>
where
    T: Copy + Eq + Hash,
    C: Copy + Eq + Hash,
{
    pub fn new(dfa: Dfa<T, C>) -> Self {
        Self {
            dfa,
            ignored: HashSet::new(),
        }
    }

    /// Tokens of `kind` are dropped by [`Lexer::tokenize`].
    pub fn ignore(mut self, kind: T) -> Self {
        self.ignored.insert(kind);
        self
    }

    /// Reads one token from the front of `input`, `None` once it's empty.
    ///
    /// `offset` is only used to report where an error happened.
    pub fn next<'a>(
        &self,
        input: &'a [C],
        offset: usize,
    ) -> Result<Option<(Token<'a, T, C>, &'a [C])>, LexError> {
        if input.is_empty() {
            return Ok(None);
        }

        let mut state = Dfa::<T, C>::ROOT;
        let mut end = 0;
        for symbol in input {
            match self.dfa.step(state, *symbol) {
                Some(next) => {
                    state = next;
                    end += 1;
                }
                None => break,
            }
        }

        if end == 0 {
            return Err(LexError::UnexpectedSymbol(offset));
        }
        let kind = self
            .dfa
            .kind(state)
            .ok_or(LexError::IncompleteToken(offset))?;

        Ok(Some((
            Token {
                kind,
                value: &input[..end],
            },
            &input[end..],
        )))
    }

    pub fn tokenize<'a>(&self, input: &'a [C]) -> Result<Vec<Token<'a, T, C>>, LexError> {
        let mut tokens = Vec::new();
        let mut rest = input;
        while let Some((token, next_rest)) = self.next(rest, input.len() - rest.len())? {
            if !self.ignored.contains(&token.kind) {
                tokens.push(token);
            }
            rest = next_rest;
        }

        Ok(tokens)
    }
}
