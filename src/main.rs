use nfa_regex::{logger::StderrLogger, DynError, Regex};
use rustyline::{error::ReadlineError, Editor};
use std::{
    env,
    fs::File,
    io::{BufRead, BufReader},
};

fn main() -> Result<(), DynError> {
    StderrLogger::from_env().init()?;

    let args: Vec<String> = env::args().collect();
    match args.len() {
        2 => interactive(&args[1]),
        3 => match_file(&args[1], &args[2]),
        _ => {
            eprintln!("usage: {} regex [file]", args[0]);
            Err("invalid arguments".into())
        }
    }
}

/// ファイルをオープンし、行ごとにマッチングを行う。
///
/// 行のどこかに正規表現にマッチする部分文字列があれば、
/// その行を表示する。
fn match_file(expr: &str, file: &str) -> Result<(), DynError> {
    let re = Regex::anywhere(expr)?;

    let f = File::open(file)?;
    let reader = BufReader::new(f);

    for line in reader.lines() {
        let line = line?;
        if re.is_match(&line) {
            println!("{line}");
        }
    }

    Ok(())
}

/// 標準入力から1行ずつ読み込み、全体一致するかを表示する。
///
/// Ctrl+Dで終了。
fn interactive(expr: &str) -> Result<(), DynError> {
    nfa_regex::print(expr)?;
    println!();

    let re = Regex::new(expr)?;
    let mut rl = Editor::<()>::new()?;

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                if re.is_match(&line) {
                    println!("match");
                } else {
                    println!("no match");
                }
                rl.add_history_entry(line);
            }
            Err(ReadlineError::Interrupted) => eprintln!("終了はCtrl+D"),
            Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e.into()),
        }
    }
}
