use crate::*;

pub fn handle_roster_commands(
    cli: &Cli,
    cfg: &ConfigFile,
    state: &mut State,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Names { command } => {
            let source = NamesSource::from_arg(cli.names.as_deref())?;
            match command {
                NamesCommands::List => {
                    let names = parse_names(&read_names_text(&source)?);
                    let report = NamesReport {
                        source: source.describe(),
                        count: names.len(),
                        names,
                    };
                    print_one(cli.json, report, |r| {
                        let mut lines = r.names.clone();
                        lines.push(format!("({} names)", r.count));
                        lines.join("\n")
                    })?;
                }
                NamesCommands::Add { entries } => {
                    let path = source.writable_path().ok_or(RosterError::StdinReadOnly)?;
                    let mut names = parse_names(&read_names_text(&source)?);
                    let added = extend_names(&mut names, entries);
                    write_names(path, &names)?;
                    audit("names_add", serde_json::json!({"added": added}));
                    print_one(cli.json, added, |n| format!("added {} names", n))?;
                }
                NamesCommands::Dedupe => {
                    let path = source.writable_path().ok_or(RosterError::StdinReadOnly)?;
                    let names = parse_names(&read_names_text(&source)?);
                    let unique = dedupe(&names);
                    write_names(path, &unique)?;
                    let report = DedupeReport {
                        removed: names.len() - unique.len(),
                        remaining: unique.len(),
                    };
                    audit(
                        "names_dedupe",
                        serde_json::json!({"removed": report.removed}),
                    );
                    print_one(cli.json, report, |r| {
                        format!("removed {} duplicates, {} names left", r.removed, r.remaining)
                    })?;
                }
            }
        }
        Commands::History { command } => match command {
            HistoryCommands::List { limit } => {
                let n = limit.unwrap_or(state.history.len());
                let items: Vec<&WinnerRecord> = state.history.iter().take(n).collect();
                print_out(cli.json, &items, |r| {
                    format!("{}\t{}\t{}", clock_time(r.timestamp), r.name, r.message)
                })?;
            }
            HistoryCommands::Clear => {
                let mut lock = spin_lock()?;
                let _guard = lock.write()?;
                *state = load_state()?;
                let removed = state.history.len();
                state.history.clear();
                save_state(state)?;
                audit("history_clear", serde_json::json!({"removed": removed}));
                print_one(cli.json, removed, |n| format!("removed {} entries", n))?;
            }
        },
        Commands::Wheel => {
            let source = NamesSource::from_arg(cli.names.as_deref())?;
            let names = parse_names(&read_names_text(&source)?);
            let report = layout(&names, state.rotation);
            print_one(cli.json, report, |r| {
                r.sectors
                    .iter()
                    .map(|s| {
                        format!(
                            "{}{}\t{}\t{}\t{:.1}°\t{:.1}°",
                            if s.under_pointer { "▼ " } else { "  " },
                            s.index,
                            s.label,
                            s.color,
                            normalize(s.start_angle).to_degrees(),
                            normalize(s.end_angle).to_degrees()
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let shown = redacted(cfg);
                let text = toml::to_string_pretty(&shown)?;
                print_one(cli.json, shown, |_| text.trim_end().to_string())?;
            }
        },
        _ => return Ok(false),
    }

    Ok(true)
}
