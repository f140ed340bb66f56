use clap::Parser;
use tagalias::application::{init, AliasService, ConfigService, ResolveService};
use tagalias::cli::{format_alias_names, format_alias_table, format_assignments, Cli, Commands};
use tagalias::error::TagAliasError;
use tagalias::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TagAliasError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Add { name, tokens } => {
            let repo = FileSystemRepository::discover()?;
            AliasService::new(repo).add(&name, &tokens)?;
            println!("Defined alias '{}'", name);
            Ok(())
        }
        Commands::Remove { names } => {
            let repo = FileSystemRepository::discover()?;
            let removed = AliasService::new(repo).remove(&names)?;
            println!("Removed {} alias(es)", removed);
            Ok(())
        }
        Commands::List {
            name,
            aliased_to,
            oneline,
        } => {
            let repo = FileSystemRepository::discover()?;
            let listings = AliasService::new(repo).list(name.as_deref(), aliased_to.as_deref())?;

            if oneline {
                print!("{}", ensure_newline(format_alias_names(&listings)));
            } else {
                print!("{}", ensure_newline(format_alias_table(&listings)));
            }
            Ok(())
        }
        Commands::Resolve { limit, tokens } => {
            let repo = FileSystemRepository::discover()?;
            let assignments = ResolveService::new(repo).execute(&tokens, limit)?;
            println!("{}", format_assignments(&assignments));
            Ok(())
        }
        Commands::Rename { old, new } => {
            let repo = FileSystemRepository::discover()?;
            AliasService::new(repo).rename(&old, &new)?;
            println!("Renamed alias '{}' to '{}'", old, new);
            Ok(())
        }
        Commands::Copy {
            source,
            destinations,
        } => {
            let repo = FileSystemRepository::discover()?;
            AliasService::new(repo).copy(&source, &destinations)?;
            println!("Copied alias '{}' to {} name(s)", source, destinations.len());
            Ok(())
        }
        Commands::Check => {
            let repo = FileSystemRepository::discover()?;
            let failures = AliasService::new(repo).check()?;

            if failures.is_empty() {
                println!("All aliases resolve");
                Ok(())
            } else {
                for (name, err) in &failures {
                    eprintln!("{}: {}", name, err);
                }
                Err(TagAliasError::Config(format!(
                    "{} alias(es) failed to resolve",
                    failures.len()
                )))
            }
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("limit = {}", config.limit);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: tagalias config [--list | <key> [<value>]]");
                println!("Valid keys: limit, created");
                Ok(())
            }
        }
    }
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
