//! hangeul - 한국어 조사 교정/수사 읽기 도구

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use hangeul::{GrammarError, Korean, KoreanConfig, Value};

#[derive(Debug, Parser)]
#[command(name = "hangeul", about = "한국어 조사 교정, 수사 읽기, 템플릿 서식")]
struct Args {
    /// 조사/수사 설정 파일 (JSON)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 모호한 조사 표기 교정 ("사과은(는)" -> "사과는")
    Proofread {
        /// 입력 파일 (없으면 표준 입력)
        path: Option<PathBuf>,
    },
    /// 정수를 한자어 수사로 읽기
    Read {
        #[arg(allow_hyphen_values = true)]
        number: i64,

        /// 만 단위 묶음별로 출력
        #[arg(short, long)]
        phases: bool,
    },
    /// 템플릿 서식 ("{0:을} 좋아합니다." 향수)
    Format {
        template: String,

        /// 정수는 수사, 나머지는 명사로 씁니다
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn load(config: Option<&PathBuf>) -> Result<Korean, GrammarError> {
    match config {
        Some(path) => {
            log::debug!("설정 로드: {}", path.display());
            Korean::new(&KoreanConfig::load(path)?)
        }
        None => Ok(hangeul::korean().clone()),
    }
}

fn proofread_lines(korean: &Korean, input: impl BufRead) -> Result<(), GrammarError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in input.lines() {
        writeln!(out, "{}", korean.proofread(&line?))?;
    }
    Ok(())
}

fn run(args: Args) -> Result<(), GrammarError> {
    let korean = load(args.config.as_ref())?;
    match args.command {
        Command::Proofread { path } => match path {
            Some(path) => proofread_lines(&korean, BufReader::new(File::open(path)?)),
            None => proofread_lines(&korean, io::stdin().lock()),
        },
        Command::Read { number, phases } => {
            let grammar = korean.grammar();
            if phases {
                println!("{}", grammar.read_phases(number).join(" "));
            } else {
                println!("{}", grammar.read_number(number));
            }
            Ok(())
        }
        Command::Format { template, args } => {
            let values: Vec<Value> = args
                .into_iter()
                .map(|arg| match arg.parse::<i64>() {
                    Ok(number) => Value::Int(number),
                    Err(_) => Value::Text(arg),
                })
                .collect();
            println!("{}", korean.format(&template, &values)?);
            Ok(())
        }
    }
}

fn main() {
    // 로깅 초기화 (기본 warn, RUST_LOG로 조정)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("오류: {}", e);
        process::exit(1);
    }
}
