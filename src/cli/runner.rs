use std::path::Path;

use crate::{
    cli::{
        answers::{AnswerCollector, Answers},
        Args,
    },
    error::Result,
    install, launch,
    project::ProjectKind,
    scaffold, templates,
};

/// Main CLI runner that orchestrates the entire bootstrap workflow.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete flow: probe/install uv, collect answers,
    /// scaffold the project, write the template files, launch the dev
    /// server.
    pub fn run(self) -> Result<()> {
        if !self.args.dry_run {
            install::ensure_uv()?;
        }

        let answers = Answers::from_cli_arg(self.args.answers.clone())?;
        let collector = AnswerCollector::new(self.args.non_interactive);
        let (kind, name) = collector.collect(answers)?;

        if self.args.dry_run {
            self.print_plan(kind, &name);
            return Ok(());
        }

        scaffold::check_project_dir(Path::new(&name), self.args.force)?;

        let project_dir = scaffold::scaffold(kind, &name)?;

        println!("\n{kind} project created successfully!");

        if self.args.no_launch {
            println!(
                "Run `uv run python dev.py` inside {} to start the development server.",
                project_dir.display()
            );
            return Ok(());
        }

        launch::launch_dev_server(kind, &project_dir)
    }

    /// Prints the numbered command plan and the files that would be written.
    fn print_plan(&self, kind: ProjectKind, name: &str) {
        println!("\nPlan for {kind} project '{name}':");
        for (index, spec) in scaffold::scaffold_plan(kind, name).iter().enumerate() {
            println!("  {}. {}", index + 1, spec);
        }
        for file in templates::project_files(kind) {
            println!("  write {name}/{file}");
        }
        println!("  launch: {}", kind.dev_server_command());
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
