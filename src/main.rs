//! api-surface CLI entry point

use std::fs;
use std::process::ExitCode;

use api_surface::{
    collect_api, discover_entries, ApiSurfaceError, Cli, ModuleExports, SurfaceParser,
};

fn main() -> ExitCode {
    match run() {
        Ok(Some(output)) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> api_surface::Result<Option<String>> {
    let cli = Cli::parse_args();

    // 1. Resolve entry points: explicit list, or package discovery under root
    let entries = match (cli.entry.is_empty(), cli.root.as_deref()) {
        (false, _) => cli.entry.clone(),
        (true, Some(root)) => discover_entries(root)?,
        // clap enforces ROOT unless --entry is given
        (true, None) => Vec::new(),
    };

    if cli.verbose {
        eprintln!("Resolved {} entry point(s)", entries.len());
    }

    // 2. Check every entry exists before parsing anything
    for entry in &entries {
        if !entry.is_file() {
            return Err(ApiSurfaceError::FileNotFound {
                path: entry.display().to_string(),
            });
        }
    }

    // 3. Parse each entry into its exported surface
    let mut parser = SurfaceParser::new()?;
    let mut modules: Vec<ModuleExports> = Vec::with_capacity(entries.len());
    for entry in &entries {
        let module = parser.parse_entry(entry)?;
        if cli.verbose {
            eprintln!(
                "Parsed module '{}': {} exported symbol(s)",
                module.name,
                module.symbols.len()
            );
        }
        modules.push(module);
    }

    // 4. Aggregate into the flat record list and serialize
    let records = collect_api(&modules)?;
    let payload = serde_json::to_string_pretty(&records)?;

    if cli.verbose {
        eprintln!("Emitted {} record(s)", records.len());
    }

    // 5. Write to file or hand back for stdout
    match &cli.output {
        Some(path) => {
            fs::write(path, payload)?;
            if cli.verbose {
                eprintln!("Wrote payload to {}", path.display());
            }
            Ok(None)
        }
        None => Ok(Some(payload)),
    }
}
