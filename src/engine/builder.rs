//! ASTからThompsonの構成法でNFAを構築する
use super::{
    nfa::{Nfa, State, StateId, Symbol},
    parser::{AST, WILDCARD},
};
use log::debug;

/// NFAの構築を行う関数
///
/// 構築は失敗しない。
pub fn build(ast: &AST) -> Nfa {
    let mut builder = Builder::default();
    let start = builder.lower(ast, StateId::ACCEPT);
    let nfa = Nfa::new(builder.states, start);
    debug_assert!(is_bound(&nfa), "unbound state is reachable");
    debug!("built NFA: {} states, start = {start}", nfa.len());
    nfa
}

/// 開始状態から到達可能な状態に、予約されたままのスロットがないか検査
fn is_bound(nfa: &Nfa) -> bool {
    nfa.reachable()
        .into_iter()
        .all(|id| *nfa.state(id) != State::Unbound)
}

/// NFAの構築器
#[derive(Debug)]
struct Builder {
    states: Vec<State>,
}

impl Default for Builder {
    fn default() -> Self {
        // 0番目は受理状態
        Builder {
            states: vec![State::Accept],
        }
    }
}

impl Builder {
    /// astに対応する状態を生成し、その入口を返す。
    ///
    /// astにマッチし終えた後の遷移先はすべてcontとなる。
    fn lower(&mut self, ast: &AST, cont: StateId) -> StateId {
        match ast {
            AST::Char(c) => self.gen_char(*c, cont),
            AST::Concat(..) => self.gen_concat(ast, cont),
            AST::Or(..) => self.gen_or(ast, cont),
            AST::Star(e) => self.gen_star(e, cont),
            AST::Plus(e) => self.gen_plus(e, cont),
        }
    }

    /// 1文字を消費する状態を生成
    fn gen_char(&mut self, c: char, cont: StateId) -> StateId {
        let symbol = if c == WILDCARD {
            Symbol::Any
        } else {
            Symbol::Char(c)
        };
        self.push(State::Consume { symbol, next: cont })
    }

    /// 連接の状態生成器。
    ///
    /// e1 e2 は lower(e1, lower(e2, cont)) となるため、後ろの式から生成する。
    /// 長い連接で再帰が深くならないよう、右側に連なるConcatは反復で処理。
    fn gen_concat(&mut self, ast: &AST, cont: StateId) -> StateId {
        let mut spine = Vec::new();
        let mut last = ast;
        while let AST::Concat(e1, e2) = last {
            spine.push(&**e1);
            last = &**e2;
        }

        let mut entry = self.lower(last, cont);
        for e in spine.into_iter().rev() {
            entry = self.lower(e, entry);
        }
        entry
    }

    /// OR演算子の状態生成器。
    ///
    /// ```text
    /// L1: split L2, L3
    /// L2: e1 -> cont
    /// L3: e2 -> cont
    /// ```
    ///
    /// a|b|c のように右側に連なるOrは反復で処理。
    fn gen_or(&mut self, ast: &AST, cont: StateId) -> StateId {
        let mut spine = Vec::new();
        let mut last = ast;
        while let AST::Or(e1, e2) = last {
            spine.push(&**e1);
            last = &**e2;
        }

        let mut entry = self.lower(last, cont);
        for e in spine.into_iter().rev() {
            let l2 = self.lower(e, cont);
            entry = self.push(State::Split(l2, entry));
        }
        entry
    }

    /// *限量子の状態生成器。
    ///
    /// ```text
    /// L1: split L2, cont
    /// L2: e -> L1
    /// ```
    ///
    /// L1はeの生成時点では未確定なので、先にスロットを予約しておき、
    /// eの生成後に書き戻す。
    fn gen_star(&mut self, e: &AST, cont: StateId) -> StateId {
        let l1 = self.reserve();
        let l2 = self.lower(e, l1);
        self.patch(l1, State::Split(l2, cont));
        l1
    }

    /// +限量子の状態生成器。
    ///
    /// ```text
    /// L1: split L2, L3
    /// L2: e -> cont
    /// L3: e -> L1
    /// ```
    ///
    /// eは2回生成され、L2とL3は独立した状態となる。
    /// そのため(ab+c)+のように+の中に+があると、ネストごとに状態数が倍になる。
    /// a++や((a+)+)+はパーサでa+にまとめられるため倍増しない。
    fn gen_plus(&mut self, e: &AST, cont: StateId) -> StateId {
        let l1 = self.reserve();
        let l2 = self.lower(e, cont);
        let l3 = self.lower(e, l1);
        self.patch(l1, State::Split(l2, l3));
        l1
    }

    fn push(&mut self, state: State) -> StateId {
        let id = StateId::new(self.states.len());
        self.states.push(state);
        id
    }

    /// 後から書き戻すためのスロットを予約
    fn reserve(&mut self) -> StateId {
        self.push(State::Unbound)
    }

    /// 予約済みスロットを書き戻す
    fn patch(&mut self, id: StateId, state: State) {
        let slot = &mut self.states[id.index()];
        debug_assert_eq!(*slot, State::Unbound, "state {id} is already bound");
        *slot = state;
    }
}
