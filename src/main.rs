use std::{env::args, process::exit};

use webtext::{engine, render, url::Url};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Some(raw) = args().nth(1) else {
        eprintln!("usage: webtext <http://host[/path]>");
        exit(1);
    };

    let url: Url = raw.parse()?;
    let response = engine::fetch(&url)?;
    print!("{}", render::strip_tags(response.body()));

    Ok(())
}
