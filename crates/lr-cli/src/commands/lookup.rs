use colored::Colorize;

use lr_core::time::window_of;
use lr_core::{Beast, Branch, Element, Palace};

/// Print every symbol whose name matches.
pub fn run(name: &str) -> Result<(), String> {
    let mut found = false;

    if let Ok(branch) = Branch::parse(name) {
        let window = window_of(branch);
        println!(
            "  {} {} {}",
            "branch".dimmed(),
            branch.to_string().bold(),
            branch.pinyin()
        );
        println!("    hours:    {:02}:00-{:02}:00", window.start, window.end);
        println!(
            "    element:  {} {}",
            branch.element(),
            branch.element().english()
        );
        println!("    polarity: {} {}", branch.polarity().chinese(), branch.polarity());
        println!("    beast:    {} {}", branch.beast(), branch.beast().english());
        found = true;
    }

    if let Ok(palace) = Palace::parse(name) {
        println!(
            "  {} {} {} (palace {})",
            "palace".dimmed(),
            palace.to_string().bold(),
            palace.english(),
            palace.position()
        );
        println!(
            "    element:  {} {}",
            palace.element(),
            palace.element().english()
        );
        found = true;
    }

    if let Ok(beast) = Beast::parse(name) {
        let guarded: Vec<String> = Branch::all()
            .iter()
            .filter(|b| b.beast() == beast)
            .map(ToString::to_string)
            .collect();
        println!(
            "  {} {} {}",
            "beast".dimmed(),
            beast.to_string().bold(),
            beast.english()
        );
        println!("    branches: {}", guarded.join(" "));
        found = true;
    }

    if let Ok(element) = Element::parse(name) {
        println!(
            "  {} {} {}",
            "element".dimmed(),
            element.to_string().bold(),
            element.english()
        );
        println!(
            "    generates: {} {}",
            element.generates(),
            element.generates().english()
        );
        println!(
            "    overcomes: {} {}",
            element.overcomes(),
            element.overcomes().english()
        );
        found = true;
    }

    if found {
        Ok(())
    } else {
        Err(format!("unknown symbol: \"{name}\""))
    }
}
