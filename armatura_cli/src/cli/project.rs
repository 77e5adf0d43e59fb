//! `armatura project`: `.arm` project files.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use armatura_core::calculations::CalculationItem;
use armatura_core::file_io::{load_project, load_project_with_lock_check, save_project, FileLock};
use armatura_core::project::Project;
use clap::{Args, Subcommand};
use serde_json::json;
use tracing::warn;

use super::design::read_section_input;
use crate::output;

#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub command: ProjectCommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    /// Create an empty project file
    New {
        path: PathBuf,
        #[arg(long, default_value = "")]
        engineer: String,
        #[arg(long, default_value = "")]
        job_id: String,
        #[arg(long, default_value = "")]
        client: String,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Add a section from a JSON input file
    Add {
        path: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
        /// Override the label stored in the input file
        #[arg(long)]
        label: Option<String>,
        /// Identity recorded in the lock file
        #[arg(long, env = "USER", default_value = "armatura")]
        user: String,
    },

    /// Remove a section by label
    Remove {
        path: PathBuf,
        label: String,
        #[arg(long, env = "USER", default_value = "armatura")]
        user: String,
    },

    /// List the sections in a project
    List { path: PathBuf },

    /// Design every section in a project
    Run {
        path: PathBuf,
        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(args: &ProjectArgs) -> Result<()> {
    match &args.command {
        ProjectCommand::New {
            path,
            engineer,
            job_id,
            client,
            force,
        } => create(path, engineer, job_id, client, *force),
        ProjectCommand::Add { path, input, label, user } => {
            let id = add(path, input, label.as_deref(), user)?;
            println!("Added {} to {}", id, path.display());
            Ok(())
        }
        ProjectCommand::Remove { path, label, user } => {
            remove(path, label, user)?;
            println!("Removed \"{}\" from {}", label, path.display());
            Ok(())
        }
        ProjectCommand::List { path } => {
            print!("{}", list(&load_for_reading(path)?));
            Ok(())
        }
        ProjectCommand::Run { path, json } => run_all(&load_for_reading(path)?, *json),
    }
}

fn create(path: &Path, engineer: &str, job_id: &str, client: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    save_project(&Project::new(engineer, job_id, client), path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Read-only load; a live lock only means the listing may be out of date.
fn load_for_reading(path: &Path) -> Result<Project> {
    let (project, lock) = load_project_with_lock_check(path)?;
    if let Some(lock) = lock {
        warn!(
            path = %path.display(),
            holder = %lock.holder(),
            since = %lock.locked_at.to_rfc3339(),
            "project is being edited"
        );
    }
    Ok(project)
}

/// Load, edit and save under an exclusive lock.
fn edit<T>(path: &Path, user: &str, change: impl FnOnce(&mut Project) -> Result<T>) -> Result<T> {
    let _lock = FileLock::acquire(path, user)?;
    let mut project = load_project(path)?;
    let value = change(&mut project)?;
    save_project(&project, path)?;
    Ok(value)
}

/// Returns the new item id.
fn add(path: &Path, input: &Path, label: Option<&str>, user: &str) -> Result<String> {
    let mut section = read_section_input(input)?;
    if let Some(label) = label {
        section.label = label.to_string();
    }
    section
        .validate()
        .with_context(|| format!("section in {} is not valid", input.display()))?;

    edit(path, user, |project| {
        Ok(project.add_item(CalculationItem::RectangularSection(section)).to_string())
    })
}

fn remove(path: &Path, label: &str, user: &str) -> Result<()> {
    edit(path, user, |project| {
        project.remove_by_label(label)?;
        Ok(())
    })
}

fn list(project: &Project) -> String {
    let mut out = format!(
        "{} - {} ({}), {} section(s)\n",
        project.meta.job_id,
        project.meta.client,
        project.settings.code,
        project.item_count()
    );
    for (id, item) in project.sorted_items() {
        let CalculationItem::RectangularSection(s) = item;
        out.push_str(&format!(
            "  {}  {:<20} {:.2} x {:.2} m  fck {:>5.1}  Med {:>9.2}  Ned {:>9.2}\n",
            &id.to_string()[..8],
            s.label,
            s.b_m,
            s.h_m,
            s.fck_mpa,
            s.med_knm,
            s.ned_kn
        ));
    }
    out
}

fn run_all(project: &Project, as_json: bool) -> Result<()> {
    let runs = project.run_all();
    for run in &runs {
        if let Err(e) = &run.outcome {
            warn!(id = %run.id, label = %run.label, error = %e, "section could not be designed");
        }
    }

    if as_json {
        let entries: Vec<_> = runs
            .iter()
            .map(|run| match &run.outcome {
                Ok(result) => json!({ "id": run.id, "label": run.label, "result": result }),
                Err(e) => json!({ "id": run.id, "label": run.label, "error": e }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for run in &runs {
        match &run.outcome {
            Ok(result) => print!("{}", output::render_table(result)),
            Err(e) => println!("{}: error: {}", run.label, e),
        }
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use armatura_core::calculations::SectionInput;
    use std::fs;

    fn write_input(dir: &Path, label: &str, med_knm: f64) -> PathBuf {
        let mut input = SectionInput::reference();
        input.label = label.to_string();
        input.med_knm = med_knm;
        let path = dir.join(format!("{}.json", label));
        fs::write(&path, serde_json::to_string(&input).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_create_add_list_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.arm");

        create(&path, "Jane", "25-042", "ACME", false).unwrap();
        assert!(create(&path, "Jane", "25-042", "ACME", false).is_err());

        let beam = write_input(dir.path(), "B-1", 300.0);
        add(&path, &beam, None, "tester").unwrap();
        let column = write_input(dir.path(), "C-1", 150.0);
        add(&path, &column, Some("Column C1"), "tester").unwrap();

        let project = load_project(&path).unwrap();
        assert_eq!(project.item_count(), 2);
        let listing = list(&project);
        assert!(listing.starts_with("25-042 - ACME (EN 1992-1-1), 2 section(s)"));
        assert!(listing.contains("B-1"));
        assert!(listing.contains("Column C1"));

        remove(&path, "B-1", "tester").unwrap();
        assert!(remove(&path, "B-1", "tester").is_err());
        assert_eq!(load_project(&path).unwrap().item_count(), 1);

        // The lock is released after every edit
        assert!(FileLock::check(&path).is_none());
    }

    #[test]
    fn test_add_rejects_invalid_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.arm");
        create(&path, "", "", "", false).unwrap();

        let mut input = SectionInput::reference();
        input.c_m = 0.8;
        let input_path = dir.path().join("bad.json");
        fs::write(&input_path, serde_json::to_string(&input).unwrap()).unwrap();

        assert!(add(&path, &input_path, None, "tester").is_err());
        assert_eq!(load_project(&path).unwrap().item_count(), 0);
    }

    #[test]
    fn test_read_while_locked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.arm");
        create(&path, "Jane", "25-042", "ACME", false).unwrap();
        let beam = write_input(dir.path(), "B-1", 300.0);
        add(&path, &beam, None, "tester").unwrap();

        let lock = FileLock::acquire(&path, "someone-else").unwrap();
        assert_eq!(FileLock::check(&path).unwrap().user_id, "someone-else");
        let project = load_for_reading(&path).unwrap();
        assert_eq!(project.item_count(), 1);
        assert!(add(&path, &beam, None, "tester").is_err());

        drop(lock);
        assert_eq!(load_for_reading(&path).unwrap().item_count(), 1);
    }

    #[test]
    fn test_subcommands_parse() {
        use crate::cli::{Cli, Commands};
        use clap::Parser;

        let cli = Cli::try_parse_from(["armatura", "project", "run", "job.arm", "--json"]).unwrap();
        let Commands::Project(args) = cli.command else {
            panic!("expected project command");
        };
        assert!(matches!(args.command, ProjectCommand::Run { json: true, .. }));
    }
}
