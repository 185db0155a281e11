//! NFAの状態と、状態を格納するアリーナ
//!
//! 状態同士はインデックス(StateId)で参照し合うため、
//! 繰り返しが作るループも所有権の問題なく表現できる。
use std::{
    collections::VecDeque,
    fmt::{self, Display},
};

/// アリーナ中の状態を指すインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(usize);

impl StateId {
    /// 受理状態。すべてのNFAで0番目に予約されている
    pub const ACCEPT: StateId = StateId(0);

    pub(super) fn new(idx: usize) -> Self {
        StateId(idx)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>04}", self.0)
    }
}

/// 1文字を消費する状態が受け付ける文字
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Char(char),
    Any,
}

impl Symbol {
    #[inline]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Symbol::Char(s) => s == c,
            Symbol::Any => true,
        }
    }
}

/// NFAの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// symbolに合致する1文字を消費してnextへ遷移
    Consume { symbol: Symbol, next: StateId },
    /// 2つのε遷移
    Split(StateId, StateId),
    /// 受理
    Accept,
    /// 構築中に予約された、まだ中身の決まっていない状態
    Unbound,
}

impl State {
    /// 受理状態かどうか。どの受理状態も同一視する
    #[inline]
    pub fn is_accept(&self) -> bool {
        matches!(self, State::Accept)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Consume {
                symbol: Symbol::Char(c),
                next,
            } => write!(f, "char {c}, {next}"),
            State::Consume {
                symbol: Symbol::Any,
                next,
            } => write!(f, "any, {next}"),
            State::Split(a, b) => write!(f, "split {a}, {b}"),
            State::Accept => write!(f, "accept"),
            State::Unbound => write!(f, "unbound"),
        }
    }
}

/// 構築済みのNFA
///
/// 構築後は変更されないため、複数スレッドから同時に評価してよい。
#[derive(Debug, Clone)]
pub struct Nfa {
    states: Vec<State>,
    start: StateId,
}

impl Nfa {
    pub(super) fn new(states: Vec<State>, start: StateId) -> Self {
        Nfa { states, start }
    }

    /// 開始状態
    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    /// アリーナ中の状態数。到達不能な状態も含む
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// 開始状態から到達可能な状態を、幅優先で重複なく列挙
    pub fn reachable(&self) -> Vec<StateId> {
        let mut visited = vec![false; self.states.len()];
        let mut queue = VecDeque::new();
        let mut result = Vec::new();

        visited[self.start.index()] = true;
        queue.push_back(self.start);

        while let Some(id) = queue.pop_front() {
            result.push(id);

            let edges = match self.state(id) {
                State::Consume { next, .. } => [Some(*next), None],
                State::Split(a, b) => [Some(*a), Some(*b)],
                State::Accept | State::Unbound => [None, None],
            };

            for next in edges.into_iter().flatten() {
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }

        result
    }
}

/// 状態を1行ずつ表示
impl Display for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "start: {}", self.start)?;
        for (n, s) in self.states.iter().enumerate() {
            writeln!(f, "{:>04}: {s}", n)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (ab)* に相当するNFAを手で組み立てる
    fn loop_nfa() -> Nfa {
        let states = vec![
            State::Accept,
            State::Split(StateId(2), StateId::ACCEPT),
            State::Consume {
                symbol: Symbol::Char('a'),
                next: StateId(3),
            },
            State::Consume {
                symbol: Symbol::Char('b'),
                next: StateId(1),
            },
            State::Unbound, // 到達不能
        ];
        Nfa::new(states, StateId(1))
    }

    #[test]
    fn test_symbol() {
        assert!(Symbol::Char('a').accepts('a'));
        assert!(!Symbol::Char('a').accepts('b'));
        assert!(Symbol::Any.accepts('あ'));
    }

    #[test]
    fn test_reachable_with_cycle() {
        let nfa = loop_nfa();
        assert_eq!(
            nfa.reachable(),
            vec![StateId(1), StateId(2), StateId(0), StateId(3)]
        );
        assert_eq!(nfa.len(), 5);
    }

    #[test]
    fn test_display() {
        let nfa = loop_nfa();
        assert_eq!(
            nfa.to_string(),
            "start: 0001\n\
             0000: accept\n\
             0001: split 0002, 0000\n\
             0002: char a, 0003\n\
             0003: char b, 0001\n\
             0004: unbound\n"
        );
    }
}
