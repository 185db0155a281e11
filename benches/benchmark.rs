//! # パフォーマンス計測
//!
//! ## 計測方法
//! a*^n a^nという正規表現を、a^nという文字列にマッチさせる。
//! ただし、a*^nとa^nは、a*とaのn回の繰り返し。
//! バックトラックする実装では指数時間となるが、
//! NFAの状態集合を進める実装ではnの2乗程度に収まる。
//!
//! ## n = 3の場合の例
//!
//! - 正規表現: a*a*a*aaa
//! - str: aaa
//!
//! ## 実行方法
//!
//! cargo-criterionをインストール後、cargo criterionと実行。
//!
//! ```text
//! $ cargo install cargo-criterion
//! $ cargo criterion
//! ```
//!
//! 実行後は、target/criterion/reports/index.htmlというファイルが生成されるため、
//! それをWebブラウザで閲覧する。
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nfa_regex::{full_match, match_anywhere, Regex};
use std::time::Duration;

/// 計測するnの値
const SIZES: &[usize] = &[2, 4, 8, 16, 32, 64];

/// (a*^n a^nという正規表現、a^nという文字列)を生成
fn input(n: usize) -> (String, String) {
    let expr = format!("{}{}", "a*".repeat(n), "a".repeat(n));
    (expr, "a".repeat(n))
}

/// パースとNFA構築を含めた計測
fn compile_and_match(c: &mut Criterion) {
    let mut g = c.benchmark_group("Compile and Match");
    g.measurement_time(Duration::from_secs(12));

    for n in SIZES {
        let (expr, line) = input(*n);
        g.bench_with_input(BenchmarkId::from_parameter(n), &(expr, line), |b, args| {
            b.iter(|| full_match(&args.1, &args.0))
        });
    }
}

/// コンパイル済みのNFAを評価するのみの計測
fn match_only(c: &mut Criterion) {
    let mut g = c.benchmark_group("Match Only");
    g.measurement_time(Duration::from_secs(12));

    for n in SIZES {
        let (expr, line) = input(*n);
        let re = Regex::new(&expr).unwrap();
        g.bench_with_input(BenchmarkId::from_parameter(n), &line, |b, line| {
            b.iter(|| re.is_match(line))
        });
    }
}

/// 長い文字列中の部分一致
fn anywhere(c: &mut Criterion) {
    let mut g = c.benchmark_group("Match Anywhere");

    for n in [100, 1_000, 10_000] {
        let line = format!("{}abcabd", "abc".repeat(n));
        g.bench_with_input(BenchmarkId::from_parameter(n), &line, |b, line| {
            b.iter(|| match_anywhere(line, "(abc)+abd"))
        });
    }
}

criterion_group!(benches, compile_and_match, match_only, anywhere);
criterion_main!(benches);
