use anyhow::{Context, Result};
use clap::Parser;
use factwerk::prelude::*;
use factwerk_sql::prelude::*;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "factwerk")]
#[command(about = "Load fact tables from a task file", long_about = None)]
struct Args {
    /// Task file (.json, .yaml or .yml)
    #[arg(short, long)]
    config: PathBuf,

    /// Task to run; repeat to run several in order (default: every task)
    #[arg(short, long = "task")]
    tasks: Vec<String>,

    /// Print the statements each task would send without connecting
    #[arg(long)]
    dry_run: bool,
}

fn print_plan(mut out: impl Write, tasks: &[(&ScheduledTask, FactLoadTask)]) -> io::Result<()> {
    for (scheduled, task) in tasks {
        writeln!(out, "-- {} ({})", scheduled.task_id, task.connection_id())?;
        for statement in task.statements() {
            writeln!(out, "{}", statement)?;
        }
    }
    out.flush()
}

fn run_tasks<P>(tasks: &[(&ScheduledTask, FactLoadTask)], provider: &P) -> Result<()>
where
    P: ConnectionProvider,
{
    for (scheduled, task) in tasks {
        let span = tracing::info_span!("task", task_id = %scheduled.task_id);
        let _enter = span.enter();

        task.execute(provider)
            .with_context(|| format!("task {} failed", scheduled.task_id))?;
    }

    Ok(())
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("factwerk=info,warn")),
        )
        .init();

    let args = Args::parse();

    let file = TaskFile::from_path(&args.config)
        .with_context(|| format!("could not load {}", args.config.display()))?;

    // Validate every selected task before touching the database
    let tasks = file
        .select(args.tasks.as_slice())?
        .into_iter()
        .map(|scheduled| -> Result<_> { Ok((scheduled, scheduled.build()?)) })
        .collect::<Result<Vec<_>>>()?;

    if args.dry_run {
        print_plan(io::stdout().lock(), &tasks)?;
        return Ok(());
    }

    let provider = Traced::new(PostgresConnectionProvider::new(file.registry()));
    run_tasks(&tasks, &provider)?;

    tracing::info!(count = tasks.len(), "all tasks finished");

    Ok(())
}
