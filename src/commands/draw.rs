use crate::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

pub fn handle_draw_commands(
    cli: &Cli,
    cfg: &ConfigFile,
    state: &mut State,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Spin {
            seed,
            no_animate,
            frame_ms,
        } => {
            let opts = SpinOptions {
                seed: *seed,
                animate: !*no_animate && !cli.json,
                frame_ms: frame_ms.unwrap_or(cfg.wheel.frame_ms),
            };
            match run_spin(cli, cfg, state, &opts) {
                Ok(()) => {}
                Err(e) if e.downcast_ref::<SpinError>() == Some(&SpinError::AlreadySpinning) => {
                    log::info!("spin ignored: another draw is in progress");
                    if cli.json {
                        print_one(true, serde_json::Value::Null, |_| String::new())?;
                    }
                }
                Err(e) => return Err(e),
            }
        }
        Commands::Message { name } => {
            let generator = generator_for(&cfg.message, cli.offline);
            let report = MessageReport {
                name: name.clone(),
                message: generator.generate(name),
            };
            print_one(cli.json, report, |r| r.message.clone())?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}

struct SpinOptions {
    seed: Option<u64>,
    animate: bool,
    frame_ms: u64,
}

/// One draw, from reading the roster to saving the winner. The spin lock
/// is held throughout, so a concurrent draw sees `AlreadySpinning` and
/// every draw starts from the rotation the previous one saved.
fn run_spin(
    cli: &Cli,
    cfg: &ConfigFile,
    state: &mut State,
    opts: &SpinOptions,
) -> anyhow::Result<()> {
    let mut lock = spin_lock()?;
    let _guard = match lock.try_write() {
        Ok(guard) => guard,
        Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
            return Err(SpinError::AlreadySpinning.into())
        }
        Err(e) => return Err(e.into()),
    };
    *state = load_state()?;

    let source = NamesSource::from_arg(cli.names.as_deref())?;
    let names = parse_names(&read_names_text(&source)?);
    let mut engine = SpinEngine::new(state.rotation);
    let mut rng = match opts.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let animator = Animator::new(Duration::from_millis(opts.frame_ms), opts.animate);
    let cancel = CancelToken::default();
    if opts.animate {
        let handle = cancel.clone();
        if let Err(e) = ctrlc::set_handler(move || handle.cancel()) {
            log::warn!("could not install Ctrl-C handler: {}", e);
        }
    }

    let mut renderer = TextRenderer::new(std::io::stdout(), &names);
    let result = animator.spin(&mut engine, &names, &mut rng, &cancel, |frame| {
        if opts.animate {
            renderer.draw(frame)
        } else {
            Ok(())
        }
    })?;

    let outcome = match result {
        RunResult::Finished(outcome) => outcome,
        RunResult::Cancelled { rotation } => {
            audit("spin_cancelled", serde_json::json!({ "rotation": rotation }));
            if !cli.json {
                println!();
            }
            return print_one(cli.json, rotation, |r| {
                format!("spin cancelled at {:.1}°", normalize(*r).to_degrees())
            });
        }
    };

    if !cli.json {
        println!("🎉🎊🎉 {} 🎉🎊🎉", outcome.label);
    }
    let generator = generator_for(&cfg.message, cli.offline);
    let message = generator.generate(&outcome.label);
    let record = WinnerRecord {
        name: outcome.label.clone(),
        message,
        timestamp: now_ms(),
        rotation: outcome.rotation,
        index: outcome.index,
        segment_count: outcome.segment_count,
    };
    record_winner(state, record.clone());
    save_state(state)?;
    audit(
        "spin",
        serde_json::json!({
            "winner": record.name,
            "index": record.index,
            "segments": record.segment_count
        }),
    );
    log::info!(
        "winner {} (segment {} of {})",
        record.name,
        record.index,
        record.segment_count
    );
    print_one(cli.json, record, |r| {
        format!("winner: {}\n\"{}\"", r.name, r.message)
    })
}
