//! # Thompson NFAによる正規表現エンジン用クレート。
//!
//! 正規表現をASTに変換し、ASTからNFAを構築して、
//! NFAの状態集合を1文字ずつ進めることでマッチングを行う。
//! バックトラックは行わないため、どのようなパターンでも
//! 入力長と状態数の積に比例する時間で終了する。
//!
//! 利用できる記法は、文字、`.`(任意の1文字)、`|`、`*`、`+`、`()`のみ。
//!
//! ## 利用例
//!
//! ```
//! use nfa_regex;
//! let expr = "a(bc)+|c(def)*"; // 正規表現
//! let line = "cdefdefdef"; // マッチ対象文字列
//! assert!(nfa_regex::full_match(line, expr).unwrap()); // 全体一致
//! assert!(nfa_regex::match_anywhere("xxabcbcxx", expr).unwrap()); // 部分一致
//! nfa_regex::print(expr).unwrap(); // 正規表現のASTとNFAを表示
//! ```
mod engine;
mod helper;
pub mod logger;

pub use engine::{
    full_match, match_anywhere, print, Config, Nfa, ParseError, Regex, State, StateId, Symbol,
    AST, WILDCARD,
};
pub use helper::DynError;
