use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use techfit::report::{self, ScoreReport};
use techfit::{
    telemetry, AnswerSet, AnswerValue, AssessConfig, AssessmentSession, Category,
    QuestionCatalog, QuestionDefinition, QuestionType, ScoringEngine,
};

#[derive(Parser)]
#[command(name = "techfit")]
#[command(about = "Self-assessment for Edge Cloud Architecture careers: scores, WISCAR breakdown and recommendation")]
struct Cli {
    /// Config file (default: <config dir>/techfit/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the questions of the active catalog
    Questions {
        /// Only show one category (psychometric, technical, aptitude, wiscar)
        #[arg(short, long)]
        category: Option<Category>,
        /// Print question definitions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score one or more answer files (JSON arrays of answers)
    Score {
        /// Answer files to score
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Take the assessment interactively on the terminal
    Take {
        /// Print the final report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a catalog TOML file for errors
    Validate {
        /// Catalog file to check
        catalog: PathBuf,
    },

    /// Print the fingerprint of the active catalog
    Fingerprint,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AssessConfig::resolve(cli.config.as_deref())?;
    telemetry::init(&config.log_level)?;

    match cli.command {
        Command::Questions { category, json } => {
            cmd_questions(&load_catalog(&config)?, category, json)
        }
        Command::Score { files, json } => {
            let catalog = load_catalog(&config)?;
            let engine = ScoringEngine::with_options(&catalog, config.scoring_options());
            cmd_score(&engine, &files, json)
        }
        Command::Take { json } => {
            let catalog = load_catalog(&config)?;
            let engine = ScoringEngine::with_options(&catalog, config.scoring_options());
            cmd_take(&engine, json)
        }
        Command::Validate { catalog } => cmd_validate(&catalog),
        Command::Fingerprint => {
            println!("{}", load_catalog(&config)?.fingerprint());
            Ok(())
        }
    }
}

fn load_catalog(config: &AssessConfig) -> Result<QuestionCatalog> {
    config.catalog().context("loading question catalog")
}

fn cmd_questions(catalog: &QuestionCatalog, category: Option<Category>, json: bool) -> Result<()> {
    let selected: Vec<&QuestionDefinition> = catalog
        .questions()
        .iter()
        .filter(|q| category.map_or(true, |c| q.category == c))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    let mut section = None;
    for q in &selected {
        if section != Some(q.category) {
            println!("=== {} ===", q.category.title());
            println!("{}\n", q.category.description());
            section = Some(q.category);
        }
        println!(
            "[{}] {} ({}, weight {})",
            q.id,
            q.prompt,
            q.question_type,
            q.weight
        );
        for (i, option) in q.options.iter().enumerate() {
            let score = catalog.option_score(&q.id, i);
            println!("    {}. {} (score {})", i + 1, option, score);
        }
        println!();
    }
    println!("{} questions", selected.len());
    Ok(())
}

fn score_file(engine: &ScoringEngine<'_>, path: &Path) -> Result<ScoreReport> {
    let answers = AnswerSet::load(path)?;
    let catalog = engine.catalog();
    Ok(ScoreReport {
        source: path.display().to_string(),
        catalog: catalog.fingerprint(),
        answered: answers.answered(catalog),
        total: catalog.len(),
        results: engine.synthesize(&answers),
    })
}

fn cmd_score(engine: &ScoringEngine<'_>, files: &[PathBuf], json: bool) -> Result<()> {
    eprintln!("Scoring {} answer file(s)...", files.len());

    let reports = files
        .par_iter()
        .map(|path| {
            score_file(engine, path).with_context(|| format!("scoring {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    if json {
        let out = match reports.as_slice() {
            [single] => serde_json::to_string_pretty(single)?,
            _ => serde_json::to_string_pretty(&reports)?,
        };
        println!("{}", out);
    } else {
        let rendered: Vec<String> = reports.iter().map(report::render_text).collect();
        println!("{}", rendered.join("\n"));
    }
    Ok(())
}

/// Turn terminal input into an answer value for `question`.
fn parse_input(question: &QuestionDefinition, input: &str) -> std::result::Result<AnswerValue, String> {
    match question.question_type {
        QuestionType::Likert => input
            .parse::<f64>()
            .map(AnswerValue::Number)
            .map_err(|_| "enter a number from 1 to 5".to_string()),
        QuestionType::YesNo => match input.to_ascii_lowercase().as_str() {
            "y" | "yes" => Ok(AnswerValue::from("yes")),
            "n" | "no" => Ok(AnswerValue::from("no")),
            _ => Err("enter y or n".to_string()),
        },
        QuestionType::MultipleChoice | QuestionType::Scenario => input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| question.options.get(i))
            .map(|text| AnswerValue::from(text.as_str()))
            .ok_or_else(|| format!("enter an option number from 1 to {}", question.options.len())),
    }
}

fn print_question(question: &QuestionDefinition, number: usize, total: usize, current: Option<&AnswerValue>) {
    println!("Question {}/{}: {}", number, total, question.prompt);
    if let Some(description) = &question.description {
        println!("  {}", description);
    }
    match question.question_type {
        QuestionType::Likert => {
            let (min, max) = question
                .likert_labels
                .as_ref()
                .map(|l| (l.min.as_str(), l.max.as_str()))
                .unwrap_or(("Low", "High"));
            println!("  1 = {} ... 5 = {}", min, max);
        }
        QuestionType::YesNo => println!("  y / n"),
        QuestionType::MultipleChoice | QuestionType::Scenario => {
            for (i, option) in question.options.iter().enumerate() {
                println!("  {}. {}", i + 1, option);
            }
        }
    }
    if let Some(value) = current {
        println!("  (current answer: {}; press Enter to keep)", value);
    }
}

fn cmd_take(engine: &ScoringEngine<'_>, json: bool) -> Result<()> {
    let catalog = engine.catalog();
    let mut session = AssessmentSession::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    eprintln!(
        "{} questions. Enter 'b' to go back, 'q' to quit.\n",
        catalog.len()
    );

    let mut section = None;
    while let Some(question) = session.current_question(catalog) {
        if section != Some(question.category) {
            println!("\n=== {} ===\n{}\n", question.category.title(), question.category.description());
            section = Some(question.category);
        }
        let current = session.answers().value(&question.id).cloned();
        print_question(question, session.current_step() + 1, catalog.len(), current.as_ref());
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            eprintln!("\nInput closed, assessment not completed.");
            return Ok(());
        };
        let line = line?;
        let input = line.trim();

        match input {
            "q" => {
                eprintln!("Assessment aborted.");
                return Ok(());
            }
            "b" => {
                session.previous_step();
                continue;
            }
            "" if current.is_some() => {}
            _ => {
                let value = match parse_input(question, input) {
                    Ok(value) => value,
                    Err(hint) => {
                        eprintln!("  {}", hint);
                        continue;
                    }
                };
                if let Err(e) = session.answer(catalog, &question.id, value) {
                    eprintln!("  {}", e);
                    continue;
                }
            }
        }

        if !session.next_step(catalog) {
            break;
        }
    }

    let (answered, total) = session.progress(catalog);
    let elapsed = session.elapsed();
    let results = session.complete(engine).clone();
    eprintln!(
        "\nCompleted {}/{} questions in {}m {}s\n",
        answered,
        total,
        elapsed.num_minutes(),
        elapsed.num_seconds() % 60
    );

    let report = ScoreReport {
        source: "interactive".to_string(),
        catalog: catalog.fingerprint(),
        answered,
        total,
        results,
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report::render_text(&report));
    }
    Ok(())
}

fn cmd_validate(path: &Path) -> Result<()> {
    let catalog = QuestionCatalog::load(path)?;
    println!("{}: ok", path.display());
    for (category, count) in catalog.count_by_category() {
        println!("  {:<13} {} questions", category, count);
    }
    println!("fingerprint: {}", catalog.fingerprint());
    Ok(())
}
