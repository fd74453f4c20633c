use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use lr_core::{Chart, DivinationConfig, Language, Numbers, Question};

pub struct CastArgs<'a> {
    pub question: &'a str,
    pub first: &'a str,
    pub second: &'a str,
    pub hour: Option<u32>,
    pub utc_offset: Option<i32>,
    pub english: bool,
    pub lang: Option<&'a str>,
    pub json: bool,
    pub prompt: bool,
    pub output: Option<&'a Path>,
}

pub fn run(args: &CastArgs<'_>) -> Result<(), String> {
    // The question is checked before the numbers, matching the two-step flow.
    let question = Question::new(args.question).map_err(|e| e.to_string())?;
    let numbers = Numbers::parse(args.first, args.second).map_err(|e| e.to_string())?;

    let language = match args.lang {
        Some(lang) => Language::parse(lang).map_err(|e| e.to_string())?,
        None if args.english => Language::English,
        None => Language::Chinese,
    };
    let mut config = DivinationConfig::default().with_language(language);
    if let Some(offset) = args.utc_offset {
        config = config.with_utc_offset_hours(offset);
    }
    if let Some(hour) = args.hour {
        config = config.with_hour_override(hour).map_err(|e| e.to_string())?;
    }

    let divination = question.cast(numbers, config.now());

    if let Some(path) = args.output {
        let json = serde_json::to_string_pretty(&divination)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        std::fs::write(path, json)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        if !args.json && !args.prompt {
            println!("  Exported to {}", path.display());
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(&divination)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    if args.prompt {
        let request = divination.interpretation_request(config.language);
        println!("{}", request.to_json_pretty().map_err(|e| e.to_string())?);
        return Ok(());
    }

    let landing = divination.chart().landing();
    println!(
        "  {} {} [{}]",
        "Question:".dimmed(),
        divination.question(),
        numbers
    );
    println!(
        "  {} {} {}",
        "Landing:".dimmed(),
        landing.to_string().bold(),
        landing.english()
    );
    println!();
    println!("{}", chart_table(divination.chart()));
    println!();
    for line in divination.summary(config.language).lines() {
        println!("  {line}");
    }

    Ok(())
}

fn chart_table(chart: &Chart) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Palace", "Branch", "Beast", "Relation", "Element"]);

    for record in chart.palaces() {
        let marker = if record.is_landing { "▶" } else { " " };
        table.add_row(vec![
            format!("{marker}{}", record.position()),
            format!("{} {}", record.palace, record.palace.english()),
            format!("{} {}", record.branch, record.branch.pinyin()),
            format!("{} {}", record.beast, record.beast.english()),
            format!("{} {}", record.relation, record.relation.english()),
            format!("{} {}", record.element, record.element.english()),
        ]);
    }

    table
}
