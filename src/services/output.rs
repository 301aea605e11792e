use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use serde::Serialize;

fn emit_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One text row per item, or a single `{"ok":true,"data":[...]}` document.
pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return emit_json(&JsonOut { ok: true, data });
    }
    data.iter().for_each(|d| println!("{}", row(d)));
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return emit_json(&JsonOut { ok: true, data });
    }
    println!("{}", row(&data));
    Ok(())
}

/// JSON errors go to stdout so callers parse one stream; text errors go
/// to stderr.
pub fn print_error(json: bool, code: &str, message: &str) {
    let body = JsonErr {
        ok: false,
        error: ErrorBody {
            code: code.to_string(),
            message: message.to_string(),
        },
    };
    if !json || emit_json(&body).is_err() {
        eprintln!("error: {}", message);
    }
}
