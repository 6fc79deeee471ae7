// src/cli.rs
//
// Headless front-end. Same operations as the GUI, driven by clap subcommands.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, bail};

use crate::{
    config::options::{AppOptions, BadgeSource},
    core::net::HttpClient,
    enrich, file,
    progress::Progress,
    report,
    specs::{badges, leetcode},
    store,
};

#[derive(Parser)]
#[command(name = "standing_scrape")]
#[command(about = "Student standing lookups and bulk enrichment", long_about = None)]
struct Cli {
    #[command(flatten)]
    opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalOpts {
    /// Output directory for generated files
    #[arg(long, short, global = true)]
    out: Option<PathBuf>,

    /// Where badge data is read from
    #[arg(long, value_enum, global = true, default_value_t = SourceArg::Svg)]
    source: SourceArg,

    /// Pause between students during enrichment
    #[arg(long, global = true)]
    pause_ms: Option<u64>,

    /// Override the LeetCode stats API base URL
    #[arg(long, global = true)]
    stats_base: Option<String>,

    /// Override the LeetCode GraphQL URL
    #[arg(long, global = true)]
    graphql_url: Option<String>,

    /// Override the HackerRank badge SVG base URL
    #[arg(long, global = true)]
    badge_svg_base: Option<String>,

    /// Override the HackerRank REST profile base URL
    #[arg(long, global = true)]
    badge_rest_base: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    Svg,
    Rest,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a student file's columns and print upload statistics
    Validate { file: PathBuf },
    /// Fetch LeetCode stats and recent submissions for one profile URL
    Lookup {
        url: String,
        /// Skip the recent-submission timeline
        #[arg(long)]
        no_timeline: bool,
    },
    /// Extract HackerRank badges for a username or profile URL
    Badges {
        user: String,
        /// Also write the badges as JSON into the output directory
        #[arg(long)]
        json: bool,
    },
    /// Enrich every student in a file and write .xlsx/.csv outputs
    Enrich { file: PathBuf },
    /// Write the sample input template
    Template,
}

impl GlobalOpts {
    fn apply(&self, options: &mut AppOptions) {
        let lookup = &mut options.lookup;
        lookup.badge_source = match self.source {
            SourceArg::Svg => BadgeSource::Svg,
            SourceArg::Rest => BadgeSource::Rest,
        };
        if let Some(ms) = self.pause_ms {
            lookup.row_pause = Duration::from_millis(ms);
        }
        let ep = &mut lookup.endpoints;
        if let Some(v) = &self.stats_base { ep.leetcode_stats = v.clone(); }
        if let Some(v) = &self.graphql_url { ep.leetcode_graphql = v.clone(); }
        if let Some(v) = &self.badge_svg_base { ep.badge_svg = v.clone(); }
        if let Some(v) = &self.badge_rest_base { ep.badge_rest = v.clone(); }

        if let Some(out) = &self.out {
            options.export.set_out_dir(&out.to_string_lossy());
        }
    }
}

/// Prints progress lines to stderr.
struct CliProgress {
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, index: usize) {
        logd!("row {}/{} done", index + 1, self.total);
    }
}

pub fn run() -> Result<()> {
    crate::log::init(true);
    let cli = Cli::parse();

    let mut options = AppOptions::default();
    cli.opts.apply(&mut options);

    match cli.command {
        Commands::Validate { file } => validate(&file),
        Commands::Lookup { url, no_timeline } => lookup(&options, &url, !no_timeline),
        Commands::Badges { user, json } => badges_cmd(&options, &user, json),
        Commands::Enrich { file } => enrich_cmd(&options, &file),
        Commands::Template => {
            let path = file::write_template(&options.export)?;
            println!("Template written to {}", path.display());
            Ok(())
        }
    }
}

fn validate(path: &Path) -> Result<()> {
    let table = store::load_students(path)
        .wrap_err_with(|| format!("loading {}", path.display()))?;
    for s in &table.suggestions {
        println!("{s}");
    }
    let stats = report::upload_stats(&table);
    println!("Students:          {}", stats.total_students);
    match stats.average_cgpa {
        Some(avg) => println!("Average CGPA:      {avg:.2}"),
        None => println!("Average CGPA:      N/A"),
    }
    println!("With backlogs:     {}", stats.with_backlogs);
    println!("LeetCode profiles: {}", stats.leetcode_profiles);
    Ok(())
}

fn lookup(options: &AppOptions, url: &str, timeline: bool) -> Result<()> {
    if !leetcode::is_profile_url(url) {
        bail!("not a LeetCode profile URL: {url}");
    }
    let client = HttpClient::new()?;
    let opts = &options.lookup;

    match leetcode::fetch_stats(&client, &opts.endpoints, url, opts.stats_timeout) {
        leetcode::StatsOutcome::Fetched(s) => {
            println!(
                "Solved {} (easy {}, medium {}, hard {})",
                s.total_solved, s.easy_solved, s.medium_solved, s.hard_solved
            );
            if let Some(rate) = s.acceptance_rate {
                println!("Acceptance {rate:.1}%");
            }
            if let Some(rank) = s.ranking {
                println!("Ranking {rank}");
            }
        }
        leetcode::StatsOutcome::Failed(code) => println!("Stats unavailable (HTTP {code})"),
        leetcode::StatsOutcome::Error(e) => println!("Stats error: {e}"),
    }

    if timeline {
        match leetcode::fetch_recent_submissions(&client, &opts.endpoints, url, opts.graphql_timeout) {
            Ok(subs) if subs.is_empty() => println!("No recent submissions"),
            Ok(subs) => {
                for sub in subs {
                    println!("{}  {:<10} {:<12} {}", sub.date, sub.lang, sub.status, sub.title);
                }
            }
            Err(e) => println!("Timeline unavailable: {e}"),
        }
    }
    Ok(())
}

fn badges_cmd(options: &AppOptions, user: &str, json: bool) -> Result<()> {
    let username = if user.contains('/') {
        match enrich::hackerrank_username(user) {
            Some(u) => u,
            None => bail!("not a HackerRank profile URL: {user}"),
        }
    } else {
        s!(user)
    };

    let client = HttpClient::new()?;
    let Some(found) = badges::fetch_badges(&client, &options.lookup, &username) else {
        println!("No badges found for {username}");
        return Ok(());
    };

    let summary = badges::summarize(&found);
    for b in &found {
        let mark = if b.estimated { " (estimated)" } else { "" };
        println!("{:<28} {}★{mark}", b.name, b.stars);
    }
    println!(
        "{} badges, {} stars, {:.1} average",
        summary.total_badges, summary.total_stars, summary.average_stars
    );

    if json {
        let path = file::write_badges_json(&options.export, &username, &found, &file::file_stamp())?;
        println!("Saved {}", path.display());
    }
    Ok(())
}

fn enrich_cmd(options: &AppOptions, path: &Path) -> Result<()> {
    let table = store::load_students(path)
        .wrap_err_with(|| format!("loading {}", path.display()))?;
    let client = HttpClient::new()?;

    let mut prog = CliProgress { total: 0 };
    let enriched = enrich::enrich_all(&table, &client, &options.lookup, Some(&mut prog));

    let sum = report::bulk_summary(&enriched.records);
    println!(
        "LeetCode {}/{}  HackerRank {}/{}  avg badges {:.1}  avg stars {:.1}  max badges {}",
        sum.leetcode_success,
        sum.total,
        sum.badges_success,
        sum.total,
        sum.average_badges,
        sum.average_stars,
        sum.max_badges
    );

    for p in file::write_enriched(&options.export, &enriched, &file::file_stamp())? {
        println!("Wrote {}", p.display());
    }
    Ok(())
}
