//! shogiban: 局面の表示・合法手の列挙・対話的な着手
//!
//! ログは `RUST_LOG` で制御する（既定 warn、出力先は標準エラー）。

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use shogiban_core::{
    Coordinate, Drop, Engine, EngineConfig, Move, Piece, Player, PoolEncoding, Position,
};

#[derive(Parser, Debug)]
#[command(name = "shogiban", author, version, about = "将棋の局面表示と合法手判定")]
struct Cli {
    /// エンジン設定ファイル（TOML）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 持ち駒欄の表記（flat | counted）。設定ファイルより優先する
    #[arg(long, global = true)]
    pool_encoding: Option<PoolEncoding>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 局面を表示する
    Show {
        /// 局面文字列（省略時は平手初期局面）
        #[arg(long)]
        position: Option<String>,

        /// JSON で出力する
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// 指定マスの駒の移動先を列挙する
    Moves {
        #[arg(long)]
        position: Option<String>,
        row: i8,
        col: i8,
    },
    /// 手番側の駒打ちを列挙する
    Drops {
        #[arg(long)]
        position: Option<String>,
    },
    /// 標準入力のコマンドで対局を進める
    ///
    /// `move R C R C` / `drop LETTER R C` / `show` / `quit`
    Play {
        #[arg(long)]
        position: Option<String>,
    },
}

fn build_engine(cli: &Cli) -> Result<Engine> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(encoding) = cli.pool_encoding {
        config.pool_encoding = encoding;
    }
    log::debug!("engine config: {config:?}");
    Ok(Engine::new(config))
}

fn load_position(engine: &Engine, text: Option<&str>) -> Result<Position> {
    match text {
        Some(text) => engine.parse(text).with_context(|| format!("invalid position: {text}")),
        None => Ok(Position::startpos()),
    }
}

/// 盤面を人間向けに描く。後手の駒には `v` を前置する
fn render(engine: &Engine, pos: &Position) -> String {
    let mut out = String::new();
    out.push_str(&format!("後手の持ち駒: {}\n", render_hand(pos, Player::Gote)));
    out.push_str("   0 1 2 3 4 5 6 7 8\n");
    for row in 0..Coordinate::SIZE {
        out.push_str(&format!("{row} "));
        for col in 0..Coordinate::SIZE {
            match pos.piece_at(Coordinate::new(row, col)) {
                Ok(Some(piece)) if piece.owner() == Player::Gote => {
                    out.push('v');
                    out.push(piece.glyph());
                }
                Ok(Some(piece)) => {
                    out.push(' ');
                    out.push(piece.glyph());
                }
                _ => out.push_str(" ・"),
            }
        }
        out.push('\n');
    }
    out.push_str(&format!("先手の持ち駒: {}\n", render_hand(pos, Player::Sente)));
    let turn = match pos.side_to_move() {
        Player::Sente => "先手",
        Player::Gote => "後手",
    };
    out.push_str(&format!("手番: {turn}  手数: {}\n", pos.move_number()));
    out.push_str(&engine.format(pos));
    out
}

fn render_hand(pos: &Position, player: Player) -> String {
    let hand = pos.hand(player);
    if hand.is_empty() {
        return "なし".to_string();
    }
    hand.iter()
        .map(|(pt, n)| if n == 1 { pt.glyph().to_string() } else { format!("{}{n}", pt.glyph()) })
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_coordinate(row: &str, col: &str) -> Result<Coordinate> {
    let row: i8 = row.parse().with_context(|| format!("invalid row: {row}"))?;
    let col: i8 = col.parse().with_context(|| format!("invalid col: {col}"))?;
    let coord = Coordinate::new(row, col);
    if !coord.is_on_board() {
        bail!("coordinate out of board: {coord}");
    }
    Ok(coord)
}

enum Step {
    Continue,
    Quit,
}

/// `play` の 1 行を処理する。不正な入力は Err で返し、局面は変えない
fn play_line(engine: &Engine, pos: &mut Position, line: &str, out: &mut impl Write) -> Result<Step> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => {}
        ["quit"] | ["exit"] => return Ok(Step::Quit),
        ["show"] => writeln!(out, "{}", render(engine, pos))?,
        ["move", r1, c1, r2, c2] => {
            let mv = Move::new(pos.side_to_move(), parse_coordinate(r1, c1)?, parse_coordinate(r2, c2)?);
            *pos = engine.play_move(pos, &mv)?;
            log::info!("played {mv}");
            writeln!(out, "{}", engine.format(pos))?;
        }
        ["drop", letter, r, c] => {
            let mut chars = letter.chars();
            let piece = match (chars.next(), chars.next()) {
                (Some(code), None) => Piece::from_code(code),
                _ => None,
            }
            .with_context(|| format!("unknown piece letter: {letter}"))?;
            let drop = Drop::new(piece, parse_coordinate(r, c)?);
            *pos = engine.play_drop(pos, &drop)?;
            log::info!("played {drop}");
            writeln!(out, "{}", engine.format(pos))?;
        }
        _ => bail!("unknown command: {line}"),
    }
    Ok(Step::Continue)
}

fn run_play(engine: &Engine, mut pos: Position) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        match play_line(engine, &mut pos, line.trim(), &mut out) {
            Ok(Step::Continue) => {}
            Ok(Step::Quit) => break,
            Err(e) => {
                log::warn!("rejected input {line:?}: {e:#}");
                eprintln!("error: {e:#}");
            }
        }
        out.flush()?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let engine = build_engine(&cli)?;

    match &cli.command {
        Command::Show { position, json } => {
            let pos = load_position(&engine, position.as_deref())?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&pos.to_json())?);
            } else {
                println!("{}", render(&engine, &pos));
            }
        }
        Command::Moves { position, row, col } => {
            let pos = load_position(&engine, position.as_deref())?;
            let src = Coordinate::new(*row, *col);
            pos.piece_at(src).context("invalid source square")?;
            for mv in engine.legal_moves_from(&pos, src) {
                println!("{}", mv.trg);
            }
        }
        Command::Drops { position } => {
            let pos = load_position(&engine, position.as_deref())?;
            for drop in engine.legal_drops(&pos) {
                println!("{drop}");
            }
        }
        Command::Play { position } => {
            let pos = load_position(&engine, position.as_deref())?;
            run_play(&engine, pos)?;
        }
    }
    Ok(())
}
