//! Line-driven picker session.
//!
//! Plain text searches; `:style <name>` switches style; `:clear` empties the
//! query; a number picks that row; `:quit` or end of input cancels. The
//! listing goes to stderr so stdout only carries the picked result.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, bail};

use maticonsearch::{IconPicker, IconResolver, IconStyle, PickerConfig, PickerResult};

const WAIT: Duration = Duration::from_secs(5);
const SHOWN: usize = 40;

enum Input<'a> {
    Search(&'a str),
    Style(&'a str),
    Clear,
    Pick(usize),
    Quit,
}

fn parse(line: &str) -> Input<'_> {
    let line = line.trim();
    if let Some(style) = line.strip_prefix(":style") {
        return Input::Style(style.trim());
    }
    match line {
        ":clear" => Input::Clear,
        ":quit" | ":q" => Input::Quit,
        _ => match line.parse() {
            Ok(row) => Input::Pick(row),
            Err(_) => Input::Search(line),
        },
    }
}

pub fn run(resolver: IconResolver, config: &PickerConfig) -> Result<()> {
    let mut picker = IconPicker::new(Arc::new(resolver), config)?;
    let stdin = io::stdin();
    let mut err = io::stderr().lock();

    show(&mut picker, &mut err)?;
    for line in stdin.lock().lines() {
        match parse(&line?) {
            Input::Search(query) => {
                picker.search(query)?;
            }
            Input::Style(tag) => match tag.parse::<IconStyle>() {
                Ok(style) => {
                    picker.filter(style)?;
                }
                Err(e) => {
                    writeln!(err, "{e}")?;
                    continue;
                }
            },
            Input::Clear => {
                picker.clear()?;
            }
            Input::Pick(row) => match picker.select(row) {
                Some(selection) => {
                    println!("{}", PickerResult::new(selection).to_json()?);
                    return Ok(());
                }
                None => {
                    writeln!(err, "no icon at row {row}")?;
                    continue;
                }
            },
            Input::Quit => break,
        }
        show(&mut picker, &mut err)?;
    }

    bail!("no icon picked")
}

fn show(picker: &mut IconPicker, out: &mut impl Write) -> Result<()> {
    if !picker.wait(WAIT)? {
        writeln!(out, "still searching...")?;
        return Ok(());
    }

    let state = picker.state();
    writeln!(
        out,
        "{} icons in {} matching {:?}",
        picker.icons().len(),
        state.style(),
        state.query().unwrap_or_default()
    )?;
    for (row, icon) in picker.icons().iter().enumerate().take(SHOWN) {
        writeln!(out, "{row:>4}  {}", icon.name())?;
    }
    if picker.icons().len() > SHOWN {
        writeln!(out, "   ...  {} more", picker.icons().len() - SHOWN)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert!(matches!(parse(" :style twotone "), Input::Style("twotone")));
        assert!(matches!(parse(":clear"), Input::Clear));
        assert!(matches!(parse(":q"), Input::Quit));
        assert!(matches!(parse("12"), Input::Pick(12)));
        assert!(matches!(parse("wifi"), Input::Search("wifi")));
        assert!(matches!(parse(""), Input::Search("")));
    }
}
