//! NFAと入力文字列を受け取り、マッチングを行う
//!
//! 現在アクティブな状態の集合を1文字ずつ進める幅優先の評価器。
//! バックトラックしないため、入力長n、状態数mに対してO(n・m)で終了する。
use super::nfa::{Nfa, State, StateId};
use log::{debug, trace};

/// NFAの評価を行う関数。
///
/// 入力文字列lineの全体がnfaにマッチした場合にtrueを返す。
pub fn eval(nfa: &Nfa, line: &str) -> bool {
    let mut closure = Closure::new(nfa.len());
    let mut frontier = closure.compute(nfa, &[nfa.start()]);
    let mut seeds = Vec::new();

    for (sp, c) in line.chars().enumerate() {
        // cを消費できる状態だけが次に進み、それ以外は消える
        seeds.clear();
        for id in frontier.iter() {
            if let State::Consume { symbol, next } = nfa.state(*id) {
                if symbol.accepts(c) {
                    seeds.push(*next);
                }
            }
        }

        frontier = closure.compute(nfa, &seeds);
        trace!("sp = {sp}, char = {c:?}, frontier = {}", frontier.len());

        if frontier.is_empty() {
            debug!("no active state at sp = {sp}");
            return false;
        }
    }

    let matched = frontier.iter().any(|id| nfa.state(*id).is_accept());
    debug!("matched = {matched}");
    matched
}

/// ε閉包の計算器。
///
/// visitedには最後に訪問した際の世代を記録し、
/// 呼び出しごとに世代を進めることで訪問済み集合を作り直す。
struct Closure {
    visited: Vec<usize>,
    generation: usize,
    stack: Vec<StateId>,
}

impl Closure {
    fn new(len: usize) -> Self {
        Closure {
            visited: vec![0; len],
            generation: 0,
            stack: Vec::new(),
        }
    }

    /// seedsからε遷移のみで到達できる状態のうち、
    /// 文字を消費する状態と受理状態を重複なく返す。
    fn compute(&mut self, nfa: &Nfa, seeds: &[StateId]) -> Vec<StateId> {
        self.generation += 1;
        let mut result = Vec::new();

        // seedsの順に展開するため、逆順に積む
        self.stack.clear();
        self.stack.extend(seeds.iter().rev());

        while let Some(id) = self.stack.pop() {
            let mark = &mut self.visited[id.index()];
            if *mark == self.generation {
                continue;
            }
            *mark = self.generation;

            match nfa.state(id) {
                State::Split(a, b) => {
                    self.stack.push(*b);
                    self.stack.push(*a);
                }
                State::Consume { .. } | State::Accept => result.push(id),
                State::Unbound => (), // 構築後には到達しないが、行き止まりとして扱う
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::nfa::Symbol;

    /// (ab)*
    fn loop_nfa() -> Nfa {
        let states = vec![
            State::Accept,
            State::Split(StateId::new(2), StateId::ACCEPT),
            State::Consume {
                symbol: Symbol::Char('a'),
                next: StateId::new(3),
            },
            State::Consume {
                symbol: Symbol::Char('b'),
                next: StateId::new(1),
            },
        ];
        Nfa::new(states, StateId::new(1))
    }

    #[test]
    fn test_eval_loop() {
        let nfa = loop_nfa();
        assert!(eval(&nfa, ""));
        assert!(eval(&nfa, "ab"));
        assert!(eval(&nfa, "ababab"));
        assert!(!eval(&nfa, "aba"));
        assert!(!eval(&nfa, "abc"));
    }

    #[test]
    fn test_closure_epsilon_cycle() {
        // 0001 と 0002 がε遷移だけで循環する
        let states = vec![
            State::Accept,
            State::Split(StateId::new(2), StateId::new(3)),
            State::Split(StateId::new(1), StateId::ACCEPT),
            State::Consume {
                symbol: Symbol::Any,
                next: StateId::new(1),
            },
        ];
        let nfa = Nfa::new(states, StateId::new(1));

        let mut closure = Closure::new(nfa.len());
        let result = closure.compute(&nfa, &[nfa.start()]);
        assert_eq!(result, vec![StateId::ACCEPT, StateId::new(3)]);

        // 世代が進んでも同じ結果になる
        let result = closure.compute(&nfa, &[nfa.start(), StateId::new(2)]);
        assert_eq!(result, vec![StateId::ACCEPT, StateId::new(3)]);

        assert!(eval(&nfa, "xyz"));
    }

    #[test]
    fn test_closure_unbound_is_dead_end() {
        let states = vec![
            State::Accept,
            State::Split(StateId::new(2), StateId::new(3)),
            State::Unbound,
            State::Consume {
                symbol: Symbol::Char('a'),
                next: StateId::ACCEPT,
            },
        ];
        let nfa = Nfa::new(states, StateId::new(1));

        let mut closure = Closure::new(nfa.len());
        assert_eq!(closure.compute(&nfa, &[nfa.start()]), vec![StateId::new(3)]);
        assert!(eval(&nfa, "a"));
        assert!(!eval(&nfa, ""));
    }
}
