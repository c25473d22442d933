// src/cli.rs
//
// One-shot frontend: fetch the feed once, print brackets and
// standings, optionally export the computed standings table.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, bail};

use crate::{
    config::{consts, persist},
    core::csv::{Delim, write_row},
    feed::{self, leaderboard},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl Format {
    fn delim(self) -> Delim {
        match self {
            Format::Csv => Delim::Csv,
            Format::Tsv => Delim::Tsv,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "bracket_board",
    version,
    about = "Fetch a published match feed and print brackets + leaderboard"
)]
pub struct Args {
    /// Feed URL; defaults to the url= entry in bracket_board.conf
    #[arg(long)]
    pub url: Option<String>,

    /// Print one round only
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub round: Option<u8>,

    /// Skip the brackets, print only the leaderboard
    #[arg(long)]
    pub leaderboard_only: bool,

    /// Write the computed standings to this file
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Prepend the Team,Points header row to the export
    #[arg(long)]
    pub include_headers: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    let url = match args.url {
        Some(u) => u,
        None => persist::load(consts::CONF_FILE).feed.url,
    };
    if url.trim().is_empty() {
        bail!(
            "no feed URL: pass --url or set url= in {}",
            consts::CONF_FILE
        );
    }

    logf!("Fetch: {}", url);
    let data = feed::fetch(&url).wrap_err("feed fetch failed")?;

    if !args.leaderboard_only {
        for rd in 1..=3usize {
            if args.round.is_some_and(|r| r as usize != rd) {
                continue;
            }
            println!("== Round {} ==", rd);
            let groups = data.brackets.round(rd);
            if groups.is_empty() {
                println!("  (no data)");
            }
            for g in groups {
                println!("  {}", g.title);
                for t in &g.teams {
                    let name = if t.team.is_empty() { "-" } else { &t.team };
                    let score = if t.score.is_empty() { "-" } else { &t.score };
                    println!("    {:<24} {}", name, score);
                }
            }
            println!();
        }
    }

    println!("== Leaderboard ==");
    if data.standings.is_empty() {
        println!("  (no leaderboard data)");
    }
    for (i, e) in data.standings.iter().enumerate() {
        println!(
            "  {:>3} {:<24} {} points",
            format!("{}.", i + 1),
            e.team,
            leaderboard::fmt_points(e.points)
        );
    }

    if let Some(path) = args.out {
        let rows = leaderboard::standings_rows(&data.standings);
        let skip = if args.include_headers { 0 } else { 1 };
        let mut w = BufWriter::new(
            File::create(&path).wrap_err_with(|| format!("create {}", path.display()))?,
        );
        for row in &rows[skip..] {
            write_row(&mut w, row, args.format.delim())?;
        }
        w.flush()?;
        logf!("Export: wrote {} rows → {}", rows.len() - skip, path.display());
        println!("Wrote {}", path.display());
    }

    Ok(())
}
