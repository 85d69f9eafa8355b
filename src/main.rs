use anyhow::{Context, Result};
use brikfmt::json::to_json;
use brikfmt::{tokenize, Document, Error, Formatter, Parser, Token};
use std::fs::File;
use std::io::{stdin, Read, Write};

#[macro_use]
extern crate clap;
use clap::App;

fn main() -> Result<()> {
    let yaml = load_yaml!("main.yml");
    let matches = App::from_yaml(yaml).get_matches();
    let source = if let Some(path) = matches.value_of_os("brik_file") {
        let mut f = File::open(path)
            .with_context(|| format!("failed to open {}", path.to_string_lossy()))?;
        let mut s = String::new();
        f.read_to_string(&mut s)
            .with_context(|| format!("failed to read {}", path.to_string_lossy()))?;
        s
    } else {
        let mut s = String::new();
        stdin().lock().read_to_string(&mut s)?;
        s
    };

    let tokens = tokenize(&source).map_err(Error::from)?;
    if matches.is_present("tokens") {
        print_tokens(&tokens);
    }
    let doc = Parser::new(tokens).parse().map_err(Error::from)?;
    let result = render(doc, matches.is_present("json"))?;

    let output = if matches.is_present("in_place") {
        matches.value_of_os("brik_file")
    } else {
        matches.value_of_os("output")
    };
    if let Some(path) = output {
        let mut f = File::create(path)
            .with_context(|| format!("failed to create {}", path.to_string_lossy()))?;
        writeln!(f, "{}", result)?;
    } else {
        println!("{}", result);
    }
    Ok(())
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{}", token);
    }
}

fn render(doc: Document, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(&to_json(doc))?)
    } else {
        Ok(Formatter::new().format_document(doc))
    }
}
