//! newscloud
//!
//! Builds sentiment-colored word clouds from news articles. Articles come
//! from the news proxy (one job per source), a local JSON file, or the
//! bundled sample. Each job writes `<name>.svg`, plus `<name>.json` with the
//! word infos when `--json` is set.

mod articles;
mod client;
mod cloud;
mod config;
mod layout;
mod render;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use tokio::task::JoinSet;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use articles::NewsPayload;
use client::NewsClient;
use cloud::{ColorMapper, LexiconScorer, SizeScale, StopWords, WordCloudBuilder};
use config::Config;
use layout::{Canvas, LayoutEngine, RowLayout};

/// Sentiment-colored word clouds from news headlines
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// News source to fetch from the proxy (repeatable)
    #[arg(short, long = "source", default_values = ["cnn", "fox"])]
    sources: Vec<String>,

    /// Read articles from a local `{ "data": [...] }` JSON file instead
    #[arg(short, long, conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// Use the bundled sample articles (offline)
    #[arg(long)]
    sample: bool,

    /// Articles requested per source (overrides NEWS_COUNT)
    #[arg(short, long)]
    count: Option<usize>,

    /// Output directory for generated files
    #[arg(short, long, default_value = "out")]
    output_dir: PathBuf,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Font size of the most frequent word
    #[arg(long)]
    max_size: Option<f64>,

    /// Also write the word infos as JSON
    #[arg(long)]
    json: bool,

    /// Base URL of the news proxy (overrides NEWS_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum ArticleSource {
    Proxy(String),
    File(PathBuf),
    Sample,
}

#[derive(Debug, Clone, PartialEq)]
struct Job {
    name: String,
    source: ArticleSource,
}

/// Shared, read-only state for all jobs of a run
struct RunContext {
    client: NewsClient,
    count: usize,
    builder: WordCloudBuilder<LexiconScorer>,
    layout: Box<dyn LayoutEngine>,
    canvas: Canvas,
    output_dir: PathBuf,
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = apply_overrides(Config::from_env(), &args);
    let jobs = plan_jobs(&args);
    let ctx = Arc::new(build_context(&config, &args)?);

    info!(
        "Starting newscloud - jobs={}, output_dir={}",
        jobs.len(),
        ctx.output_dir.display()
    );

    run_all(ctx, jobs).await
}

fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(url) = &args.api_url {
        config.api_url = url.clone();
    }
    if let Some(count) = args.count {
        config.count = count;
    }
    match args.max_size {
        Some(max) if max.is_finite() => config.scale = SizeScale::new(config.scale.min, max),
        Some(max) => warn!("Ignoring --max-size {}: not a finite number", max),
        None => {}
    }
    if let Some(width) = args.width {
        config.canvas.width = width;
    }
    if let Some(height) = args.height {
        config.canvas.height = height;
    }
    config
}

fn plan_jobs(args: &Args) -> Vec<Job> {
    if let Some(path) = &args.input {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("articles")
            .to_string();
        return vec![Job {
            name,
            source: ArticleSource::File(path.clone()),
        }];
    }
    if args.sample {
        return vec![Job {
            name: "sample".to_string(),
            source: ArticleSource::Sample,
        }];
    }
    args.sources
        .iter()
        .map(|source| Job {
            name: source.to_lowercase(),
            source: ArticleSource::Proxy(source.clone()),
        })
        .collect()
}

fn build_context(config: &Config, args: &Args) -> Result<RunContext> {
    let stop_words = match &config.stop_words_file {
        Some(path) => StopWords::load(path)?,
        None => StopWords::english(),
    };
    let scorer = match &config.sentiment_lexicon {
        Some(path) => LexiconScorer::load(path)?,
        None => LexiconScorer::afinn(),
    };

    Ok(RunContext {
        client: NewsClient::new(&config.api_url)?,
        count: config.count,
        builder: WordCloudBuilder::new(
            stop_words,
            config.scale,
            ColorMapper::new(scorer, config.palette),
        ),
        layout: Box::new(RowLayout::default()),
        canvas: config.canvas,
        output_dir: args.output_dir.clone(),
        json: args.json,
    })
}

/// Runs every job concurrently. Fails only when no job succeeded.
async fn run_all(ctx: Arc<RunContext>, jobs: Vec<Job>) -> Result<()> {
    let total = jobs.len();
    let mut set = JoinSet::new();
    for job in jobs {
        let ctx = Arc::clone(&ctx);
        set.spawn(async move {
            let name = job.name.clone();
            (name, run_job(&ctx, job).await)
        });
    }

    let mut succeeded = 0;
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((name, Ok(path))) => {
                succeeded += 1;
                info!("Wrote word cloud - job={}, path={}", name, path.display());
            }
            Ok((name, Err(e))) => warn!("Skipping job {}: {:#}", name, e),
            Err(e) => warn!("Job panicked: {}", e),
        }
    }

    if total > 0 && succeeded == 0 {
        anyhow::bail!("All {} jobs failed", total);
    }
    Ok(())
}

async fn run_job(ctx: &RunContext, job: Job) -> Result<PathBuf> {
    let payload = match &job.source {
        ArticleSource::Proxy(source) => ctx.client.fetch_news(source, ctx.count).await?,
        ArticleSource::File(path) => NewsPayload::load(path).await?,
        ArticleSource::Sample => NewsPayload::bundled_sample()?,
    };

    let infos = ctx.builder.build(&payload.data);
    let placed = ctx.layout.layout(&infos, ctx.canvas);
    info!(
        "Laid out cloud - job={}, articles={}, words={}, placed={}",
        job.name,
        payload.data.len(),
        infos.len(),
        placed.len()
    );

    tokio::fs::create_dir_all(&ctx.output_dir)
        .await
        .with_context(|| format!("Failed to create {}", ctx.output_dir.display()))?;

    let svg_path = output_path(&ctx.output_dir, &job.name, "svg");
    write_file(&svg_path, render::render_svg(&placed, ctx.canvas)).await?;

    if ctx.json {
        let json = serde_json::to_string_pretty(&infos)?;
        write_file(&output_path(&ctx.output_dir, &job.name, "json"), json).await?;
    }

    Ok(svg_path)
}

fn output_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, extension))
}

async fn write_file(path: &Path, contents: String) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["newscloud"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    fn context_in(dir: &Path, json: bool) -> RunContext {
        let mut args = args(&[]);
        args.output_dir = dir.to_path_buf();
        args.json = json;
        // nothing listens on the discard port
        args.api_url = Some("http://127.0.0.1:9".to_string());
        let config = apply_overrides(Config::default(), &args);
        build_context(&config, &args).unwrap()
    }

    #[test]
    fn default_jobs_are_cnn_and_fox() {
        let jobs = plan_jobs(&args(&[]));
        assert_eq!(
            jobs,
            vec![
                Job {
                    name: "cnn".to_string(),
                    source: ArticleSource::Proxy("cnn".to_string()),
                },
                Job {
                    name: "fox".to_string(),
                    source: ArticleSource::Proxy("fox".to_string()),
                },
            ]
        );
    }

    #[test]
    fn repeated_sources_replace_defaults() {
        let jobs = plan_jobs(&args(&["--source", "CNN"]));
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].name, "cnn");
        assert_eq!(jobs[0].source, ArticleSource::Proxy("CNN".to_string()));
    }

    #[test]
    fn input_file_job_is_named_after_file() {
        let jobs = plan_jobs(&args(&["--input", "data/today.json"]));
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].name, "today");
        assert_eq!(
            jobs[0].source,
            ArticleSource::File(PathBuf::from("data/today.json"))
        );
    }

    #[test]
    fn input_conflicts_with_sample() {
        assert!(Args::try_parse_from(["newscloud", "--input", "a.json", "--sample"]).is_err());
    }

    #[test]
    fn flags_override_config() {
        let config = apply_overrides(
            Config::default(),
            &args(&[
                "--count",
                "3",
                "--max-size",
                "80",
                "--width",
                "640",
                "--api-url",
                "http://proxy:5000",
            ]),
        );
        assert_eq!(config.count, 3);
        assert_eq!(config.scale, SizeScale::new(10.0, 80.0));
        assert_eq!(config.canvas, Canvas { width: 640, height: 275 });
        assert_eq!(config.api_url, "http://proxy:5000");
    }

    #[test]
    fn non_finite_max_size_is_ignored() {
        for raw in ["NaN", "inf"] {
            let config = apply_overrides(Config::default(), &args(&["--max-size", raw]));
            assert_eq!(config.scale, SizeScale::default());
        }
    }

    #[tokio::test]
    async fn sample_job_writes_svg_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(dir.path(), true);

        let path = run_job(
            &ctx,
            Job {
                name: "sample".to_string(),
                source: ArticleSource::Sample,
            },
        )
        .await
        .unwrap();

        assert_eq!(path, dir.path().join("sample.svg"));
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">Trump</text>"));

        let json = std::fs::read_to_string(dir.path().join("sample.json")).unwrap();
        let infos: serde_json::Value = serde_json::from_str(&json).unwrap();
        let trump = infos
            .as_array()
            .unwrap()
            .iter()
            .find(|w| w["text"] == "Trump")
            .unwrap();
        assert_eq!(trump["size"], 40.0);
    }

    #[tokio::test]
    async fn file_job_reads_local_articles() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("local.json");
        std::fs::write(
            &input,
            r#"{"data":[{"title":"Amazing win","description":null}]}"#,
        )
        .unwrap();
        let ctx = context_in(dir.path(), false);

        let path = run_job(
            &ctx,
            Job {
                name: "local".to_string(),
                source: ArticleSource::File(input),
            },
        )
        .await
        .unwrap();

        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.contains(">Amazing</text>"));
        assert!(svg.contains(">win</text>"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn failed_source_does_not_stop_other_jobs() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Arc::new(context_in(dir.path(), false));

        let jobs = vec![
            Job {
                name: "cnn".to_string(),
                source: ArticleSource::Proxy("cnn".to_string()),
            },
            Job {
                name: "sample".to_string(),
                source: ArticleSource::Sample,
            },
        ];

        run_all(ctx, jobs).await.unwrap();
        assert!(dir.path().join("sample.svg").exists());
        assert!(!dir.path().join("cnn.svg").exists());
    }

    #[tokio::test]
    async fn all_jobs_failing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Arc::new(context_in(dir.path(), false));

        let jobs = vec![Job {
            name: "missing".to_string(),
            source: ArticleSource::File(dir.path().join("missing.json")),
        }];

        assert!(run_all(ctx, jobs).await.is_err());
    }
}
