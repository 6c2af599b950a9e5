//! `mermaid-mcp example` command implementation.

use clap::Args;
use console::Term;
use mermaid_ink::{example, example_types, lookup_example};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the example command.
#[derive(Args)]
pub(crate) struct ExampleArgs {
    /// Diagram type (flowchart, sequence, gantt, pie, gitgraph, mindmap, class).
    diagram_type: Option<String>,
}

impl ExampleArgs {
    /// Execute the example command.
    ///
    /// Prints the example source to stdout so it can be piped into `convert -`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Validation`] for an unknown diagram type.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let Some(diagram_type) = self.diagram_type else {
            let output = Output::new();
            output.heading("Available diagram types:");
            for name in example_types() {
                output.info(&format!("  {name}"));
            }
            return Ok(());
        };

        let source = example(&diagram_type)
            .ok_or_else(|| CliError::Validation(lookup_example(&diagram_type)))?;
        Term::stdout().write_line(source)?;
        Ok(())
    }
}
