//! Line-oriented fill-in of a property model.
//!
//! The network binding is asked for first, then every configurable property
//! in entry order. Each answer is one line with its terminator stripped; an
//! empty answer leaves the property out of the rendered arguments.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

use crate::model::PropertyModel;

/// Prompt used for the network when the descriptor names none.
pub const NETWORK_FALLBACK_PROMPT: &str = "Network";

/// Ask for every value on `output`, reading answers from `input`.
pub fn fill_interactively<R: BufRead, W: Write>(
    model: &mut PropertyModel,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let network_prompt = model
        .network_name()
        .unwrap_or(NETWORK_FALLBACK_PROMPT)
        .to_string();
    let network = ask(&mut input, &mut output, &network_prompt)?;
    model.set_network_value(network);

    for property in model.configurable_mut() {
        let answer = ask(&mut input, &mut output, property.prompt())?;
        property.value = Some(answer);
    }
    Ok(())
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}: ").context("writing prompt")?;
    output.flush().context("flushing prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| format!("reading value for '{prompt}'"))?;
    if read == 0 {
        bail!("input ended while waiting for '{prompt}'");
    }

    let trimmed = line
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(&line);
    Ok(trimmed.to_string())
}
