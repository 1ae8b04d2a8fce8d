use crate::cli::output::to_json;
use crate::headers::{DirectiveMap, parse_directives};
use owo_colors::OwoColorize;

pub fn run(value: &str, plain: bool) -> anyhow::Result<()> {
    let directives = parse_directives(value);
    if plain {
        println!("{}", render_plain(&directives));
    } else {
        println!("{}", to_json(&directives)?);
    }
    Ok(())
}

pub fn render_plain(directives: &DirectiveMap) -> String {
    directives
        .iter()
        .map(|d| match &d.value {
            Some(value) => format!("{} = {}", d.name.cyan(), value),
            None => d.name.cyan().to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
