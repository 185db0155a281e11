//! 正規表現の式をパースし、抽象構文木に変換
use super::Config;
use std::{
    error::Error,
    fmt::{self, Display},
    mem::take,
};

/// 任意の1文字にマッチする文字
pub const WILDCARD: char = '.';

/// パースエラーを表すための型
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParseError {
    InvalidRightParen(usize), // 左開き括弧無し
    NoPrev(usize),            // +、|、*の前に式がない
    NoNext(usize),            // |の後に式がない
    NoRightParen,             // 右閉じ括弧無し
    Empty,                    // 空のパターン
    TooDeep(usize),           // 括弧のネストが深すぎる
}

/// パースエラーを表示するために、Displayトレイトを実装
impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidRightParen(pos) => {
                write!(f, "ParseError: invalid right parenthesis: pos = {pos}")
            }
            ParseError::NoPrev(pos) => {
                write!(f, "ParseError: no previous expression: pos = {pos}")
            }
            ParseError::NoNext(pos) => {
                write!(f, "ParseError: no next expression: pos = {pos}")
            }
            ParseError::NoRightParen => {
                write!(f, "ParseError: no right parenthesis")
            }
            ParseError::Empty => write!(f, "ParseError: empty expression"),
            ParseError::TooDeep(pos) => {
                write!(f, "ParseError: too deeply nested: pos = {pos}")
            }
        }
    }
}

impl Error for ParseError {} // エラー用に、Errorトレイトを実装

/// 抽象構文木を表現するための型
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AST {
    Char(char), // WILDCARDの場合は任意の1文字
    Concat(Box<AST>, Box<AST>),
    Or(Box<AST>, Box<AST>),
    Star(Box<AST>),
    Plus(Box<AST>),
}

/// parse_plus_star関数で利用するための列挙型
enum PS {
    Plus,
    Star,
}

/// 正規表現を抽象構文木に変換
///
/// 括弧のネストがconfig.max_depthを超える場合はエラー。
pub fn parse(expr: &str, config: &Config) -> Result<AST, ParseError> {
    let mut seq = Vec::new(); // 現在の連接のコンテキスト
    let mut seq_or = Vec::new(); // 現在のOrのコンテキスト
    let mut stack = Vec::new(); // コンテキストのスタック
    let mut len = 0;

    for (i, c) in expr.chars().enumerate() {
        len = i + 1;
        match c {
            '+' => parse_plus_star(&mut seq, PS::Plus, i)?,
            '*' => parse_plus_star(&mut seq, PS::Star, i)?,
            '(' => {
                if stack.len() >= config.max_depth {
                    return Err(ParseError::TooDeep(i));
                }

                // 現在のコンテキストをスタックに追加し、
                // 現在のコンテキストを空の状態にする
                let prev = take(&mut seq);
                let prev_or = take(&mut seq_or);
                stack.push((prev, prev_or));
            }
            ')' => {
                // 現在のコンテキストをスタックからポップ
                if let Some((mut prev, prev_or)) = stack.pop() {
                    close_seq(&mut seq_or, seq, i)?;

                    // Orを生成。"()"のように式が空の場合はpushしない
                    if let Some(ast) = fold_or(seq_or) {
                        prev.push(ast);
                    }

                    // 以前のコンテキストを、現在のコンテキストにする
                    seq = prev;
                    seq_or = prev_or;
                } else {
                    // "abc)"のように、開き括弧がないのに閉じ括弧がある場合はエラー
                    return Err(ParseError::InvalidRightParen(i));
                }
            }
            '|' => {
                if let Some(ast) = fold_seq(take(&mut seq)) {
                    seq_or.push(ast);
                } else {
                    // "||", "(|abc)"などと、式が空の場合はエラー
                    return Err(ParseError::NoPrev(i));
                }
            }
            _ => seq.push(AST::Char(c)),
        }
    }

    // 閉じ括弧が足りない場合はエラー
    if !stack.is_empty() {
        return Err(ParseError::NoRightParen);
    }

    close_seq(&mut seq_or, seq, len)?;

    // Orを生成し、成功した場合はそれを返す
    fold_or(seq_or).ok_or(ParseError::Empty)
}

/// +、*をASTに変換
///
/// 後置記法で、+、*の前にパターンがない場合はエラー
///
/// 例 : *ab、abc|+などはエラー
///
/// 限量子が連続する場合は1つにまとめる。
/// a**、a+*、a*+はa*と、a++はa+と等価。
/// まとめないとa***...の長さだけASTが深くなる。
fn parse_plus_star(seq: &mut Vec<AST>, ast_type: PS, pos: usize) -> Result<(), ParseError> {
    if let Some(prev) = seq.pop() {
        let ast = match (ast_type, prev) {
            (PS::Star, AST::Star(e) | AST::Plus(e)) => AST::Star(e),
            (PS::Star, e) => AST::Star(Box::new(e)),
            (PS::Plus, e @ (AST::Star(_) | AST::Plus(_))) => e,
            (PS::Plus, e) => AST::Plus(Box::new(e)),
        };
        seq.push(ast);
        Ok(())
    } else {
        Err(ParseError::NoPrev(pos))
    }
}

/// 処理中の連接をOrのコンテキストに追加。
///
/// "abc|"のように、|の後に式がない場合はエラー
fn close_seq(seq_or: &mut Vec<AST>, seq: Vec<AST>, pos: usize) -> Result<(), ParseError> {
    if let Some(ast) = fold_seq(seq) {
        seq_or.push(ast);
        Ok(())
    } else if seq_or.is_empty() {
        Ok(())
    } else {
        Err(ParseError::NoNext(pos))
    }
}

/// 連続する複数の式をASTに変換
///
/// たとえば、abc は、AST::Concat('a', AST::Concat('b', 'c'))というASTとなる
fn fold_seq(mut seq: Vec<AST>) -> Option<AST> {
    let mut ast = seq.pop()?;
    for s in seq.into_iter().rev() {
        ast = AST::Concat(Box::new(s), Box::new(ast));
    }
    Some(ast)
}

/// orで結合された複数の式をASTに変換
///
/// たとえば、abc|def|ghi は、AST::Or("abc", AST::Or("def", "ghi"))というASTとなる
fn fold_or(mut seq_or: Vec<AST>) -> Option<AST> {
    let mut ast = seq_or.pop()?;
    for s in seq_or.into_iter().rev() {
        ast = AST::Or(Box::new(s), Box::new(ast));
    }
    Some(ast)
}
