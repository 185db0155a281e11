//! 正規表現エンジン
mod builder;
mod evaluator;
mod nfa;
mod parser;

use crate::helper::DynError;

pub use nfa::{Nfa, State, StateId, Symbol};
pub use parser::{ParseError, AST, WILDCARD};

/// パーサの設定
#[derive(Debug, Clone)]
pub struct Config {
    /// 括弧のネストの最大数。NFA構築時の再帰の深さを制限する
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config { max_depth: 256 }
    }
}

/// コンパイル済みの正規表現。
///
/// 一度コンパイルすれば、何度でも評価できる。
/// 評価時にNFAは変更されないため、複数スレッドから共有してよい。
///
/// # 利用例
///
/// ```
/// use nfa_regex::Regex;
/// let re = Regex::new("(ab|cd)+").unwrap();
/// assert!(re.is_match("abcdab"));
/// assert!(!re.is_match("abc"));
/// ```
#[derive(Debug, Clone)]
pub struct Regex {
    nfa: Nfa,
}

impl Regex {
    /// 全体一致用にコンパイル
    pub fn new(expr: &str) -> Result<Regex, ParseError> {
        Regex::with_config(expr, &Config::default())
    }

    pub fn with_config(expr: &str, config: &Config) -> Result<Regex, ParseError> {
        let ast = parser::parse(expr, config)?;
        Ok(Regex {
            nfa: builder::build(&ast),
        })
    }

    /// 部分一致用にコンパイル。
    ///
    /// `.*(expr).*`をコンパイルするのと同じ。
    /// パースエラーの位置はexpr中の位置となる。
    /// exprが""や"()"の場合は`.*`となり、任意の文字列にマッチする。
    pub fn anywhere(expr: &str) -> Result<Regex, ParseError> {
        Regex::anywhere_with_config(expr, &Config::default())
    }

    pub fn anywhere_with_config(expr: &str, config: &Config) -> Result<Regex, ParseError> {
        let ast = match parser::parse(expr, config) {
            Ok(ast) => wrap_anywhere(ast),
            Err(ParseError::Empty) => any_star(),
            Err(e) => return Err(e),
        };
        Ok(Regex {
            nfa: builder::build(&ast),
        })
    }

    /// 入力文字列lineがマッチするかを判定
    pub fn is_match(&self, line: &str) -> bool {
        evaluator::eval(&self.nfa, line)
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }
}

/// `.*`
fn any_star() -> AST {
    AST::Star(Box::new(AST::Char(WILDCARD)))
}

/// astの前後に`.*`を連接
fn wrap_anywhere(ast: AST) -> AST {
    AST::Concat(
        Box::new(any_star()),
        Box::new(AST::Concat(Box::new(ast), Box::new(any_star()))),
    )
}

/// 正規表現をパースしてNFAを構築し、
/// ASTとNFAの状態を標準出力に表示。
///
/// # 利用例
///
/// ```
/// use nfa_regex;
/// nfa_regex::print("abc|(de|cd)+").unwrap();
/// ```
///
/// # 返り値
///
/// 入力された正規表現にエラーがある場合はErrを返す。
pub fn print(expr: &str) -> Result<(), DynError> {
    println!("expr: {expr}");
    let ast = parser::parse(expr, &Config::default())?;
    println!("AST: {:?}", ast);

    println!();
    println!("NFA:");
    let nfa = builder::build(&ast);
    print!("{nfa}");

    Ok(())
}

/// 正規表現と文字列の全体が一致するかを判定。
///
/// # 利用例
///
/// ```
/// use nfa_regex;
/// assert!(nfa_regex::full_match("abbbbb", "ab+").unwrap());
/// assert!(!nfa_regex::full_match("bbbbb", "ab+").unwrap());
/// ```
///
/// # 引数
///
/// lineにマッチ対象とする文字列、exprに正規表現を与える。
///
/// # 返り値
///
/// lineの全体がマッチした場合はOk(true)を、しなかった場合はOk(false)を返す。
///
/// 入力された正規表現にエラーがある場合はErrを返す。
pub fn full_match(line: &str, expr: &str) -> Result<bool, ParseError> {
    Ok(Regex::new(expr)?.is_match(line))
}

/// 正規表現にマッチする部分文字列がlineに含まれるかを判定。
///
/// `full_match(line, ".*(expr).*")`と同じ。
///
/// # 利用例
///
/// ```
/// use nfa_regex;
/// assert!(nfa_regex::match_anywhere("abcde", "cde").unwrap());
/// assert!(!nfa_regex::match_anywhere("abcde", "xyz").unwrap());
/// ```
pub fn match_anywhere(line: &str, expr: &str) -> Result<bool, ParseError> {
    Ok(Regex::anywhere(expr)?.is_match(line))
}
